//! `LedgerOutputObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use tracing::debug;

use er_dispatch::{DispatchObserver, DispatchRecord, DispatchSummary};
use er_schedule::Incident;

use crate::row::{DispatchRow, FailureRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that writes every outcome to any [`OutputWriter`]
/// backend.
///
/// Errors from the writer are stored internally because `DispatchObserver`
/// methods have no return value.  After `run_until_empty()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct LedgerOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> LedgerOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows successfully written so far (dispatches and failures).
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store(&mut self, result: OutputResult<()>) {
        match result {
            Ok(()) => self.rows += 1,
            // Keep only the first error.
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(e);
                }
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for LedgerOutputObserver<W> {
    fn on_dispatched(&mut self, record: &DispatchRecord) {
        let result = self.writer.write_dispatch(&DispatchRow::from(record));
        self.store(result);
    }

    fn on_unreachable(&mut self, incident: &Incident) {
        let result = self.writer.write_failure(&FailureRow::from(incident));
        self.store(result);
    }

    fn on_drained(&mut self, summary: &DispatchSummary) {
        if let Err(e) = self.writer.finish() {
            self.last_error.get_or_insert(e);
        }
        debug!(rows = self.rows, total = summary.total(), "dispatch output flushed");
    }
}
