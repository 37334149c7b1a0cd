//! Verbatim replay for vehicles that are not under external control.

use tp_core::{Pose, VehicleId};
use tp_trajectory::TrajectoryData;

/// Reads a vehicle's pose and speed straight out of the recording.
///
/// No blending and no interpolation: the result at index `t` is exactly the
/// recorded row, widened to `f64`.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlaybackDriver;

impl PlaybackDriver {
    /// The recorded pose and speed of `vehicle` at trajectory index `t`.
    ///
    /// # Panics
    /// Panics if `t >= trajectory.horizon()` or `vehicle` is out of range.
    #[inline]
    pub fn replay(&self, vehicle: VehicleId, trajectory: &TrajectoryData, t: usize) -> (Pose, f64) {
        let state = trajectory.state(t);
        (state.pose(vehicle), state.speed(vehicle))
    }
}
