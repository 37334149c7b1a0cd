//! Per-tick vehicle update: integrate the controlled vehicle, replay the rest.

use tp_core::{Action, VehicleId};
use tp_trajectory::TrajectoryData;

use crate::{KinematicIntegrator, PlaybackDriver, VehicleStore};

/// Applies one tick's update to every vehicle in a [`VehicleStore`].
#[derive(Copy, Clone, Debug)]
pub struct MotionEngine {
    pub integrator: KinematicIntegrator,
    pub playback:   PlaybackDriver,
    /// The one vehicle driven by actions.
    pub controlled: VehicleId,
}

impl MotionEngine {
    pub fn new(integrator: KinematicIntegrator, controlled: VehicleId) -> Self {
        Self { integrator, playback: PlaybackDriver, controlled }
    }

    /// Update all vehicles for trajectory index `t`.
    ///
    /// `t` is the index *after* the loop has advanced, so replayed vehicles
    /// show the recording one step ahead of the state that was sent out.
    pub fn apply(
        &self,
        store:      &mut VehicleStore,
        trajectory: &TrajectoryData,
        t:          usize,
        action:     Action,
        dt:         f64,
    ) {
        for i in 0..store.len() {
            let vehicle = VehicleId(i as u32);
            let (pose, speed) = if vehicle == self.controlled {
                self.integrator.integrate(store.pose(vehicle), store.speed(vehicle), action, dt)
            } else {
                self.playback.replay(vehicle, trajectory, t)
            };
            store.set(vehicle, pose, speed);
        }
    }
}
