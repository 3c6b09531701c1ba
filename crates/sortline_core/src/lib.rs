//! SORTLINE Core Types
//!
//! This crate contains pure types and logic with no I/O.
//! Everything the step ledger and the sorting engine share lives here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod hash;
pub mod time;
pub mod value;

// Re-exports
pub use error::{CoreError, CoreResult};
pub use hash::{Hash, HashError};
pub use time::{Duration, Timestamp};
pub use value::SortValue;
