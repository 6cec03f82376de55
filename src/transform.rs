//! Record-to-row transformation
//!
//! Converts an accepted [`Record`] into the normalized CSV row: canonical
//! zoned timestamp, mapped action, user with its domain stripped, and the
//! file path split into folder and file name. Every nullable input field
//! renders as an empty string.

use std::path::Path;

use crate::action::Action;
use crate::error::PipelineError;
use crate::record::Record;
use crate::timefmt;

/// One line of CSV output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub timestamp: String,
    pub action: Action,
    pub user: String,
    pub folder: String,
    pub file_name: String,
    pub ip: String,
}

impl OutputRow {
    /// Build the output row for a record whose activity already mapped to
    /// `action`. The pipeline resolves the mapping before calling this, so
    /// an unmapped record can never reach here.
    pub fn from_record(record: &Record, action: Action) -> Result<Self, PipelineError> {
        let timestamp = timefmt::normalize(&record.timestamp, record.time_offset.as_deref())?;
        let (folder, file_name) = split_path(record.file.as_deref());
        Ok(OutputRow {
            timestamp,
            action,
            user: strip_domain(record.user.as_deref()),
            folder,
            file_name,
            ip: record.ip_addr.clone().unwrap_or_default(),
        })
    }
}

/// Everything before the first `@`, or the value unchanged if there is no
/// `@`. Missing users become the empty string.
fn strip_domain(user: Option<&str>) -> String {
    match user {
        Some(user) => match user.find('@') {
            Some(at) => user[..at].to_string(),
            None => user.to_string(),
        },
        None => String::new(),
    }
}

/// Split a path into (folder, file name).
///
/// Uses `std::path` semantics: a bare file name has folder `""`, and a
/// missing path yields both components empty.
fn split_path(file: Option<&str>) -> (String, String) {
    let Some(file) = file else {
        return (String::new(), String::new());
    };
    let path = Path::new(file);
    let folder = path
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    (folder, file_name)
}
