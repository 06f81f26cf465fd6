//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `dispatches.csv`
//! - `failures.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DispatchRow, FailureRow, OutputResult};

/// Writes dispatch output to two CSV files.
pub struct CsvWriter {
    dispatches: Writer<File>,
    failures:   Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    pub const DISPATCHES_FILE: &'static str = "dispatches.csv";
    pub const FAILURES_FILE:   &'static str = "failures.csv";

    /// Create `dir` if needed, open (or truncate) the two CSV files, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut dispatches = Writer::from_path(dir.join(Self::DISPATCHES_FILE))?;
        dispatches.write_record(["incident_id", "location_id", "kind", "facility_id", "path", "cost"])?;

        let mut failures = Writer::from_path(dir.join(Self::FAILURES_FILE))?;
        failures.write_record(["incident_id", "location_id", "kind", "severity"])?;

        Ok(Self { dispatches, failures, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
        self.dispatches.write_record(&[
            row.incident_id.to_string(),
            row.location_id.to_string(),
            row.kind.to_string(),
            row.facility_id.to_string(),
            row.path.clone(),
            row.cost.to_string(),
        ])?;
        Ok(())
    }

    fn write_failure(&mut self, row: &FailureRow) -> OutputResult<()> {
        self.failures.write_record(&[
            row.incident_id.to_string(),
            row.location_id.to_string(),
            row.kind.to_string(),
            row.severity.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.dispatches.flush()?;
        self.failures.flush()?;
        Ok(())
    }
}
