//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PoseRow, TickRow};

/// A sink for per-tick pose and tick rows.
///
/// Errors are stored by the observer and retrieved with
/// [`PoseObserver::take_error`][crate::PoseObserver::take_error].
pub trait OutputWriter {
    /// Write every vehicle's pose for one tick.
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()>;

    /// Write one tick row.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
