//! Input record model
//!
//! One `Record` is one decoded line of the newline-delimited JSON input.
//! Decoding is best-effort: every field except `timestamp` may be absent or
//! null, and unknown fields are ignored.

use serde::Deserialize;

use crate::error::PipelineError;

/// One decoded input line.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    /// Event identity used for duplicate detection. Records without an id
    /// are never considered equal to anything (see `dedup`).
    #[serde(rename = "eventId")]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(rename = "ipAddr", default)]
    pub ip_addr: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
    /// Local timestamp in `MM/dd/yy hh:mm:ssa` form.
    pub timestamp: String,
    #[serde(rename = "timeOffset", default)]
    pub time_offset: Option<String>,
}

impl Record {
    /// Decode a single input line. `line_no` is 1-based, used only for the
    /// error report.
    pub fn from_json_line(line: &str, line_no: usize) -> Result<Self, PipelineError> {
        serde_json::from_str(line).map_err(|source| PipelineError::MalformedInput {
            line: line_no,
            source,
        })
    }
}
