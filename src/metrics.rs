//! Streaming metrics aggregation
//!
//! One [`Metrics`] instance accumulates over the whole run: line counts,
//! drop tallies by reason, unique-value cardinalities, per-action counts,
//! and the earliest/latest timestamp seen. `snapshot` consumes it into the
//! serializable [`MetricsReport`] printed at end of run.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::PipelineError;
use crate::record::Record;
use crate::timefmt;
use crate::transform::OutputRow;

pub const DUPLICATES: &str = "Duplicates";
pub const NO_ACTION_MAPPING: &str = "No Action Mapping";

/// Earliest- or latest-seen timestamp, with its display form.
#[derive(Debug, Clone)]
struct TrackedInstant {
    instant: NaiveDateTime,
    zoned: String,
}

/// Mutable aggregate over one pipeline run.
#[derive(Debug, Default)]
pub struct Metrics {
    lines_read: u64,
    dropped_events_count: u64,
    dropped_events: BTreeMap<String, u64>,
    unique_users: HashSet<String>,
    unique_files: HashSet<String>,
    start: Option<TrackedInstant>,
    end: Option<TrackedInstant>,
    actions: BTreeMap<String, u64>,
}

/// Serializable end-of-run summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub lines_read: u64,
    pub dropped_events_count: u64,
    pub dropped_events: BTreeMap<String, u64>,
    pub unique_users: usize,
    pub unique_files: usize,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub actions: BTreeMap<String, u64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every terminal classification counts its line exactly once.
    fn line_read(&mut self) {
        self.lines_read += 1;
    }

    fn drop_event(&mut self, reason: &str) {
        self.line_read();
        self.dropped_events_count += 1;
        *self.dropped_events.entry(reason.to_string()).or_insert(0) += 1;
    }

    /// Record a line dropped as a duplicate identity.
    pub fn on_duplicate(&mut self) {
        self.drop_event(DUPLICATES);
    }

    /// Record a line dropped for an unmapped activity.
    pub fn on_unmapped(&mut self) {
        self.drop_event(NO_ACTION_MAPPING);
    }

    /// Record an accepted line: unique users/files, action tally, and
    /// start/end tracking.
    ///
    /// Unique files are keyed by the raw input path, not the split
    /// folder/file-name pair; a missing path counts as the empty string,
    /// matching the row rendering.
    pub fn on_accepted(&mut self, row: &OutputRow, record: &Record) -> Result<(), PipelineError> {
        self.line_read();
        self.unique_users.insert(row.user.clone());
        self.unique_files
            .insert(record.file.clone().unwrap_or_default());
        *self
            .actions
            .entry(row.action.as_str().to_string())
            .or_insert(0) += 1;
        self.track_instant(&record.timestamp, record.time_offset.as_deref())
    }

    /// Update start/end tracking for one timestamp, independent of how its
    /// line was classified. The driver calls this on the drop paths so the
    /// timestamp pass covers every decoded record.
    pub fn observe_timestamp(
        &mut self,
        timestamp: &str,
        offset: Option<&str>,
    ) -> Result<(), PipelineError> {
        self.track_instant(timestamp, offset)
    }

    // Ordering is on the naive local time; the offset only shapes the
    // stored display string. Ties keep the first-seen value.
    fn track_instant(&mut self, timestamp: &str, offset: Option<&str>) -> Result<(), PipelineError> {
        let instant = timefmt::to_instant(timestamp)?;
        let earlier = match &self.start {
            None => true,
            Some(start) => instant < start.instant,
        };
        if earlier {
            self.start = Some(TrackedInstant {
                instant,
                zoned: timefmt::normalize(timestamp, offset)?,
            });
        }
        let later = match &self.end {
            None => true,
            Some(end) => instant > end.instant,
        };
        if later {
            self.end = Some(TrackedInstant {
                instant,
                zoned: timefmt::normalize(timestamp, offset)?,
            });
        }
        Ok(())
    }

    /// Finalize into the serializable report. The aggregator is consumed;
    /// a run snapshots exactly once.
    pub fn snapshot(self) -> MetricsReport {
        MetricsReport {
            lines_read: self.lines_read,
            dropped_events_count: self.dropped_events_count,
            dropped_events: self.dropped_events,
            unique_users: self.unique_users.len(),
            unique_files: self.unique_files.len(),
            start_date: self.start.map(|t| t.zoned),
            end_date: self.end.map(|t| t.zoned),
            actions: self.actions,
        }
    }
}
