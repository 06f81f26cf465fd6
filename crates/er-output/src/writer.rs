//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DispatchRow, FailureRow, OutputResult};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`LedgerOutputObserver::take_error`](crate::LedgerOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one dispatch row.
    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()>;

    /// Write one failure row.
    fn write_failure(&mut self, row: &FailureRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
