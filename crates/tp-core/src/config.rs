//! Playback configuration.
//!
//! Typically assembled by the application crate (from the environment or a
//! file) and passed to `tp_sim::SimBuilder`.

use std::fmt;
use std::str::FromStr;

use crate::{TpError, TpResult, VehicleId};

/// Horizon of the reference scenario, in recorded ticks.
pub const DEFAULT_HORIZON: usize = 150;

/// Fixed wall time step of the reference scenario, in seconds.
pub const DEFAULT_DT_SECS: f64 = 0.1;

// ── StateSource ───────────────────────────────────────────────────────────────

/// Which vehicle state is sent to the decision process each tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StateSource {
    /// The recorded state at the current trajectory index.
    #[default]
    Recorded,
    /// The live simulated pose and speed of every vehicle.
    Live,
}

impl FromStr for StateSource {
    type Err = TpError;

    fn from_str(s: &str) -> TpResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recorded" => Ok(StateSource::Recorded),
            "live"     => Ok(StateSource::Live),
            other => Err(TpError::Config(format!(
                "invalid state source {other:?}: expected \"recorded\" or \"live\""
            ))),
        }
    }
}

impl fmt::Display for StateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StateSource::Recorded => "recorded",
            StateSource::Live     => "live",
        })
    }
}

// ── ReplyFailurePolicy ────────────────────────────────────────────────────────

/// What the loop does when the decision exchange fails (timeout, transport
/// error, or malformed reply).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReplyFailurePolicy {
    /// Propagate the error; the tick does not advance and no vehicle moves.
    #[default]
    Abort,
    /// Reuse the last successfully received action (zero before the first).
    HoldLastAction,
    /// Apply `(0, 0)`: coast at constant speed and heading.
    ZeroAction,
}

impl FromStr for ReplyFailurePolicy {
    type Err = TpError;

    fn from_str(s: &str) -> TpResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort"            => Ok(ReplyFailurePolicy::Abort),
            "hold" | "hold_last_action" => Ok(ReplyFailurePolicy::HoldLastAction),
            "zero" | "zero_action"      => Ok(ReplyFailurePolicy::ZeroAction),
            other => Err(TpError::Config(format!(
                "invalid failure policy {other:?}: expected \"abort\", \"hold\", or \"zero\""
            ))),
        }
    }
}

impl fmt::Display for ReplyFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReplyFailurePolicy::Abort          => "abort",
            ReplyFailurePolicy::HoldLastAction => "hold_last_action",
            ReplyFailurePolicy::ZeroAction     => "zero_action",
        })
    }
}

// ── PlaybackConfig ────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackConfig {
    /// Number of recorded ticks read from the trajectory file.  Not stored in
    /// the file itself.  Default: 150.
    pub horizon: usize,

    /// Seconds per tick.  Default: 0.1.
    pub dt_secs: f64,

    /// The vehicle advanced by integrating decision-process actions.  Every
    /// other vehicle is replayed.  Default: vehicle 0.
    pub controlled_vehicle: VehicleId,

    /// Which state goes on the wire.  Default: [`StateSource::Recorded`].
    pub state_source: StateSource,

    /// Reaction to a failed exchange.  Default: [`ReplyFailurePolicy::Abort`].
    pub failure_policy: ReplyFailurePolicy,

    /// Rotation added to the controlled vehicle's heading before its
    /// velocity vector is resolved.  Trajectory `theta` is already the
    /// direction of travel, so the default is 0.  Use π/2 for headings in
    /// host-yaw convention (`theta − 90°`, see `HostFrame::REFERENCE`).
    pub heading_offset_rad: f64,
}

impl PlaybackConfig {
    /// Check the values that the loop cannot run without.
    pub fn validate(&self) -> TpResult<()> {
        if self.horizon == 0 {
            return Err(TpError::ZeroHorizon);
        }
        if !self.dt_secs.is_finite() || self.dt_secs <= 0.0 {
            return Err(TpError::InvalidTimeStep(self.dt_secs));
        }
        if !self.heading_offset_rad.is_finite() {
            return Err(TpError::Config(format!(
                "heading offset must be finite, got {}",
                self.heading_offset_rad
            )));
        }
        Ok(())
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            horizon:            DEFAULT_HORIZON,
            dt_secs:            DEFAULT_DT_SECS,
            controlled_vehicle: VehicleId::EGO,
            state_source:       StateSource::Recorded,
            failure_policy:     ReplyFailurePolicy::Abort,
            heading_offset_rad: 0.0,
        }
    }
}
