//! Semi-implicit kinematic update for the controlled vehicle.

use std::f64::consts::FRAC_PI_2;

use tp_core::{Action, Pose};

/// Advances a pose and speed by one step from an [`Action`].
///
/// ```text
/// actual     = heading + heading_offset
/// v_old      = unit(actual) * speed
/// speed'     = speed + acceleration * dt
/// heading'   = heading + turn_rate * dt
/// v_new      = unit(actual) * speed'          ← old `actual`, not heading'
/// x'         = x + (v_old.x + v_old.x) * dt / 2
/// y'         = y + (v_old.y + v_new.y) * dt / 2
/// ```
///
/// The x axis advances on the old velocity alone while the y axis takes the
/// trapezoidal mean.
///
/// With the default offset of 0 the heading is the direction of travel, as
/// trajectory `theta` is.  [`KinematicIntegrator::HOST_YAW`] adds a quarter
/// turn for headings stored in host-yaw convention (`theta − 90°`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicIntegrator {
    /// Rotation added to the heading before the velocity is resolved.
    pub heading_offset: f64,
}

impl KinematicIntegrator {
    /// Quarter-turn offset for host-yaw headings.
    pub const HOST_YAW: KinematicIntegrator = KinematicIntegrator { heading_offset: FRAC_PI_2 };

    pub fn new(heading_offset: f64) -> Self {
        Self { heading_offset }
    }

    /// One step of length `dt` seconds.  Returns the new pose and speed.
    pub fn integrate(&self, pose: Pose, speed: f64, action: Action, dt: f64) -> (Pose, f64) {
        let (sin, cos) = (pose.heading + self.heading_offset).sin_cos();

        let old_vx = cos * speed;
        let old_vy = sin * speed;

        let new_speed   = speed + action.acceleration * dt;
        let new_heading = pose.heading + action.turn_rate * dt;
        let new_vy      = sin * new_speed;

        let next = Pose {
            x:       pose.x + (old_vx + old_vx) * dt / 2.0,
            y:       pose.y + (old_vy + new_vy) * dt / 2.0,
            heading: new_heading,
        };
        (next, new_speed)
    }
}

impl Default for KinematicIntegrator {
    /// No offset: the heading is the direction of travel.
    fn default() -> Self {
        Self::new(0.0)
    }
}
