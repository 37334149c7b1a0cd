//! The `VehicleStore`: live pose and speed of every vehicle.

use tp_core::{Pose, VehicleId};
use tp_trajectory::{TrajectoryResult, VehicleState};

/// Structure-of-Arrays live state, indexed by [`VehicleId`].
///
/// Every `Vec` has exactly `len()` elements.  Seeded from the first recorded
/// state at load and then rewritten every tick: the controlled vehicle by
/// integration, the rest by replay.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleStore {
    pub x:       Vec<f64>,
    pub y:       Vec<f64>,
    /// Radians.
    pub heading: Vec<f64>,
    pub speed:   Vec<f64>,
}

impl VehicleStore {
    /// Seed every vehicle from a recorded state.
    pub fn from_state(state: &VehicleState) -> Self {
        Self {
            x:       state.x().iter().map(|&v| v as f64).collect(),
            y:       state.y().iter().map(|&v| v as f64).collect(),
            heading: state.theta().to_vec(),
            speed:   state.v().to_vec(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn pose(&self, vehicle: VehicleId) -> Pose {
        let i = vehicle.index();
        Pose::new(self.x[i], self.y[i], self.heading[i])
    }

    #[inline]
    pub fn speed(&self, vehicle: VehicleId) -> f64 {
        self.speed[vehicle.index()]
    }

    #[inline]
    pub fn set(&mut self, vehicle: VehicleId, pose: Pose, speed: f64) {
        let i = vehicle.index();
        self.x[i]       = pose.x;
        self.y[i]       = pose.y;
        self.heading[i] = pose.heading;
        self.speed[i]   = speed;
    }

    /// All vehicles' `(id, pose, speed)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleId, Pose, f64)> + '_ {
        (0..self.len()).map(move |i| {
            let id = VehicleId(i as u32);
            (id, self.pose(id), self.speed[i])
        })
    }

    /// The live state in wire layout.  Positions narrow to `f32`.
    ///
    /// Fails only if the public columns were resized to different lengths.
    pub fn snapshot(&self) -> TrajectoryResult<VehicleState> {
        let narrow = |v: &[f64]| v.iter().map(|&p| p as f32).collect::<Vec<f32>>();
        VehicleState::new(narrow(&self.x), narrow(&self.y), self.heading.clone(), self.speed.clone())
    }
}
