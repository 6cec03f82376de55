//! CSV sink
//!
//! Writes the fixed header once, then one quoted row per accepted record.
//! Every field is double-quoted; embedded quotes are not escaped (the
//! writer is best-effort, like the rest of the extraction).

use std::io::Write;

use crate::error::PipelineError;
use crate::transform::OutputRow;

pub const HEADER: &str = "TIMESTP,ACTION,USER,FOLDER,FILENE,IP";

/// CSV writer over any byte sink.
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the header line. Called once, before any data row.
    pub fn write_header(&mut self) -> Result<(), PipelineError> {
        writeln!(self.writer, "{HEADER}")?;
        Ok(())
    }

    /// Write one data row in input order.
    pub fn write_row(&mut self, row: &OutputRow) -> Result<(), PipelineError> {
        writeln!(
            self.writer,
            "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"",
            row.timestamp,
            row.action.as_str(),
            row.user,
            row.folder,
            row.file_name,
            row.ip
        )?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W, PipelineError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
