//! `DispatchLedger` — last-in-first-out history of completed dispatches.

use crate::{DispatchError, DispatchRecord, DispatchResult};

/// Completed dispatches, most recent on top.
#[derive(Debug, Default, Clone)]
pub struct DispatchLedger {
    records: Vec<DispatchRecord>,
}

impl DispatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `record` on top.
    pub fn push(&mut self, record: DispatchRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recent record.
    pub fn pop(&mut self) -> DispatchResult<DispatchRecord> {
        self.records.pop().ok_or(DispatchError::EmptyLedger)
    }

    /// The most recent record, left in place.
    pub fn peek(&self) -> DispatchResult<&DispatchRecord> {
        self.records.last().ok_or(DispatchError::EmptyLedger)
    }

    /// Every record, most recent first.  Borrowing iterator: call again to
    /// start over.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &DispatchRecord> + '_ {
        self.records.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
