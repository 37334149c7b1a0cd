//! `PoseObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use tp_core::{HostFrame, Tick};
use tp_motion::VehicleStore;
use tp_sim::{SimObserver, TickReport};

use crate::row::{PoseRow, TickRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that records every published pose and tick to an
/// [`OutputWriter`].
///
/// Poses are converted with `frame` before they are written, so a recording
/// made with [`HostFrame::REFERENCE`] matches what the rendering host saw.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct PoseObserver<W: OutputWriter> {
    writer:     W,
    frame:      HostFrame,
    rows:       Vec<PoseRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PoseObserver<W> {
    pub fn new(writer: W, frame: HostFrame) -> Self {
        Self { writer, frame, rows: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any).  `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for PoseObserver<W> {
    fn on_publish(&mut self, report: &TickReport, vehicles: &VehicleStore) {
        let tick = report.tick.0;
        let frame = self.frame;
        self.rows.clear();
        self.rows.extend(vehicles.iter().map(|(id, pose, speed)| {
            let host = frame.to_host(pose, speed);
            PoseRow {
                tick,
                index:   report.index,
                vehicle: id.0,
                x:       host.x,
                y:       host.y,
                yaw_deg: host.yaw_deg,
                speed:   host.speed,
            }
        }));
        let result = self.writer.write_poses(&self.rows);
        self.store_err(result);

        let row = TickRow {
            tick,
            sent_index:    report.sent_index,
            index:         report.index,
            acceleration:  report.action.acceleration,
            turn_rate:     report.action.turn_rate,
            action_source: report.action_source,
        };
        let result = self.writer.write_tick(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
