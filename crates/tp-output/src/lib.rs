//! `tp-output`: pose recording for the trajectory playback engine.
//!
//! | Backend | Files created             |
//! |---------|---------------------------|
//! | CSV     | `poses.csv`, `ticks.csv`  |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven by
//! [`PoseObserver`], which implements `tp_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tp_output::{CsvWriter, PoseObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = PoseObserver::new(writer, HostFrame::REFERENCE);
//! sim.run(Some(500), &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::PoseObserver;
pub use row::{PoseRow, TickRow};
pub use writer::OutputWriter;
