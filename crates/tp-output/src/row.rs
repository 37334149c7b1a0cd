//! Plain data row types written by output backends.

use tp_sim::ActionSource;

/// One vehicle's published pose at a given tick, in host units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseRow {
    pub tick:    u64,
    /// Trajectory index the pose belongs to (the advanced index).
    pub index:   usize,
    /// Position in the vehicle list, not the recorded vehicle id.
    pub vehicle: u32,
    pub x:       f64,
    pub y:       f64,
    pub yaw_deg: f64,
    pub speed:   f64,
}

/// What happened in one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRow {
    pub tick:          u64,
    pub sent_index:    usize,
    pub index:         usize,
    pub acceleration:  f64,
    pub turn_rate:     f64,
    pub action_source: ActionSource,
}
