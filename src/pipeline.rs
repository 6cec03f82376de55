//! Pipeline driver
//!
//! Strictly sequential fold over the input lines: decode, classify against
//! the identity set, check the activity mapping, then transform, write, and
//! aggregate. One line is fully settled before the next is read. Decode and
//! timestamp failures abort the whole run; duplicates and unmapped
//! activities are classifications, tallied and skipped.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::action::Action;
use crate::csv_out::CsvSink;
use crate::dedup::{Classification, Deduplicator};
use crate::error::PipelineError;
use crate::metrics::{Metrics, MetricsReport};
use crate::record::Record;
use crate::transform::OutputRow;

/// Run the full pipeline: read every line from `reader`, write accepted
/// rows to `sink`, and return the end-of-run metrics report.
///
/// The header is written before any data row; rows come out in input
/// order. Blank lines are not records and are skipped uncounted.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    sink: &mut CsvSink<W>,
) -> Result<MetricsReport, PipelineError> {
    let mut dedup = Deduplicator::new();
    let mut metrics = Metrics::new();

    sink.write_header()?;

    for (index, line_result) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        let record = Record::from_json_line(&line, line_no)?;

        // Identity first: a duplicate with an unmapped activity counts as
        // a duplicate. The timestamp pass runs on every decoded record,
        // dropped or not.
        if dedup.classify(&record) == Classification::Duplicate {
            debug!(line_no, event_id = ?record.event_id, "dropping duplicate");
            metrics.observe_timestamp(&record.timestamp, record.time_offset.as_deref())?;
            metrics.on_duplicate();
            continue;
        }

        let Some(action) = Action::from_activity(record.activity.as_deref()) else {
            debug!(line_no, activity = ?record.activity, "dropping unmapped activity");
            metrics.observe_timestamp(&record.timestamp, record.time_offset.as_deref())?;
            metrics.on_unmapped();
            continue;
        };

        let row = OutputRow::from_record(&record, action)?;
        sink.write_row(&row)?;
        metrics.on_accepted(&row, &record)?;
    }

    Ok(metrics.snapshot())
}
