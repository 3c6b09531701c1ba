//! SORTLINE Step Ledger
//!
//! Immutable step snapshots, the append-only ledger that holds them, hash
//! chain fingerprints over a ledger, and a cursor for seeking through it.
//! A ledger is fully materialized before anyone reads it, so every read here
//! is pure random access.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chain;
pub mod cursor;
pub mod encoding;
pub mod ledger;
pub mod step;

pub use chain::{LedgerChain, first_divergence};
pub use cursor::{Cursor, Direction, PlaybackSpeed};
pub use encoding::{CanonicalDecode, CanonicalEncode};
pub use ledger::StepLedger;
pub use step::{HighlightRole, Highlights, Step};
