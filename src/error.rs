//! Pipeline errors.

/// Errors that abort a pipeline run.
///
/// Duplicate and unmapped records are classification outcomes, not errors;
/// they never appear here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Malformed input on line {line}: {source}")]
    MalformedInput {
        /// 1-based line number in the input file.
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unparseable timestamp [{value}], expected MM/dd/yy hh:mm:ssa (e.g. 01/02/20 03:04:05PM)")]
    TimestampParse { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
