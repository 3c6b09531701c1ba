//! SORTLINE Sorting Engine
//!
//! Fifteen sorting algorithms that record every comparison, exchange and
//! milestone into a step ledger while they run. A run executes eagerly and
//! to completion inside [`Sorter::sort`]; afterwards the ledger is read-only
//! and can be replayed in any order without touching algorithm code.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
mod algorithms;
pub mod config;
pub mod recorder;
pub mod registry;
pub mod sorter;
pub mod trace;

pub use algorithm::{Algorithm, AlgorithmInfo, Category};
pub use config::SortConfig;
pub use recorder::{Counters, Recorder};
pub use registry::{SorterRegistry, get_sorter};
pub use sorter::{Metrics, Sorter};
pub use trace::TraceRecord;
