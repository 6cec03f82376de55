//! logsift library
//!
//! Normalizes a newline-delimited JSON activity log into a CSV file and a
//! summary report: activity-to-action mapping, timestamp normalization,
//! deduplication by event identity, and streaming metrics aggregation.

pub mod action;
pub mod csv_out;
pub mod dedup;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod timefmt;
pub mod transform;

pub use action::Action;
pub use csv_out::CsvSink;
pub use dedup::{Classification, Deduplicator};
pub use error::PipelineError;
pub use metrics::{Metrics, MetricsReport};
pub use record::Record;
pub use transform::OutputRow;
