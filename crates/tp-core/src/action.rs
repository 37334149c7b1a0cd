//! The control input returned by the decision process each tick.

/// `(acceleration, turn_rate)` for the controlled vehicle.
///
/// Produced once per tick by a decision channel and consumed immediately by
/// the kinematic integrator; never stored across ticks except as the
/// fallback for `ReplyFailurePolicy::HoldLastAction`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    /// Longitudinal acceleration, speed units per second.
    pub acceleration: f64,
    /// Heading rate, radians per second.
    pub turn_rate:    f64,
}

impl Action {
    pub const ZERO: Action = Action { acceleration: 0.0, turn_rate: 0.0 };

    #[inline]
    pub fn new(acceleration: f64, turn_rate: f64) -> Self {
        Self { acceleration, turn_rate }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(accel {:.4}, turn {:.4})", self.acceleration, self.turn_rate)
    }
}
