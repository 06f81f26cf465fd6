//! `er-output` — dispatch output writers.
//!
//! | Backend | Files created                        |
//! |---------|--------------------------------------|
//! | CSV     | `dispatches.csv`, `failures.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`LedgerOutputObserver`], which implements `er_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use er_output::{CsvWriter, LedgerOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = LedgerOutputObserver::new(writer);
//! coordinator.run_until_empty(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     tracing::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LedgerOutputObserver;
pub use row::{DispatchRow, FailureRow, PATH_SEPARATOR};
pub use writer::OutputWriter;
