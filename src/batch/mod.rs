//! Batch driver: folds the task sequence into an aggregate result.
//!
//! One task failing to render or write is counted and logged, never fatal:
//! the batch always runs to the end, and a re-run regenerates everything
//! (writes are keyed and overwriting).

pub mod runner;

pub use runner::{run_batch, BatchResult, MANIFEST_NAME};
