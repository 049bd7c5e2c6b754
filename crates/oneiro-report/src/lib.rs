//! # oneiro-report
//!
//! **Weekly Aggregator** — compiles a window of annotated dream entries
//! into distribution statistics, dominant values, and journal prompts.
//!
//! The aggregator is a pure function of its input window and the
//! caller-supplied "now": identical inputs always produce an identical
//! report, and an empty window produces an explicit no-data report, not
//! an error.

pub mod engine;
pub mod model;

pub use engine::{AggregatorConfig, WeeklyAggregator};
pub use model::WeeklyReport;
