//! Timestamp parsing and canonical zoned-string formatting
//!
//! Input timestamps are local times in `MM/dd/yy hh:mm:ssa` form
//! (e.g. `01/02/20 03:04:05PM`). The canonical output form is
//! `yyyy-MM-ddTHH:mm:ss:SSS` followed by `Z`, or by the record's offset
//! string echoed verbatim. The offset is display-only: ordering for
//! start/end tracking uses the naive local time (see DESIGN.md).

use chrono::NaiveDateTime;

use crate::error::PipelineError;

const INPUT_FORMAT: &str = "%m/%d/%y %I:%M:%S%p";
const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse an input timestamp into a comparable instant.
///
/// The offset is ignored here on purpose: two records one hour apart in
/// different zones compare by their local clock readings.
pub fn to_instant(timestamp: &str) -> Result<NaiveDateTime, PipelineError> {
    NaiveDateTime::parse_from_str(timestamp, INPUT_FORMAT).map_err(|_| {
        PipelineError::TimestampParse {
            value: timestamp.to_string(),
        }
    })
}

/// Format an input timestamp as a canonical zoned string.
///
/// The millisecond field is always `000` (the input carries no sub-second
/// precision). A missing offset yields the `Z` suffix; a present offset is
/// embedded as-is, without validation.
pub fn normalize(timestamp: &str, offset: Option<&str>) -> Result<String, PipelineError> {
    let instant = to_instant(timestamp)?;
    let base = instant.format(OUTPUT_FORMAT);
    Ok(match offset {
        None => format!("{base}:000Z"),
        Some(offset) => format!("{base}:000{offset}"),
    })
}
