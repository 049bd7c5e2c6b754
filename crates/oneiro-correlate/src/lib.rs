//! # oneiro-correlate
//!
//! **Correlation Engine** — nearest-in-time association between a
//! narrative timestamp and one or more named biometric series.
//!
//! Input series may be unsorted; [`SeriesIndex`] sorts a copy of each
//! series once so every lookup is a binary search over the straddling
//! neighbors. Ties on distance break toward the earlier sample, and an
//! empty series yields an explicit absence marker, never an error.

pub mod engine;

pub use engine::{correlate, correlate_batch, CorrelationResult, SeriesIndex};
