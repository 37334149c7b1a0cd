//! Simulation time model.
//!
//! # Design
//!
//! Two counters run side by side:
//!
//! - `Tick` counts every call to the loop since load.  It only grows and is
//!   what observers and logs report.
//! - `CyclicIndex` selects the recorded `VehicleState` for the current step.
//!   It wraps modulo the horizon `H`, so a finite recording replays forever:
//!
//!   index = tick mod H
//!
//! Wall time per tick is fixed (`PlaybackConfig::dt_secs`); the host never
//! feeds its own frame delta into the engine.

use std::fmt;

use crate::{TpError, TpResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── CyclicIndex ───────────────────────────────────────────────────────────────

/// Position `t ∈ [0, horizon)` in the recorded trajectory.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CyclicIndex {
    value:   usize,
    horizon: usize,
}

impl CyclicIndex {
    /// Start at `t = 0` over a trajectory of `horizon` recorded ticks.
    ///
    /// # Errors
    /// [`TpError::ZeroHorizon`] if `horizon == 0`.
    pub fn new(horizon: usize) -> TpResult<Self> {
        if horizon == 0 {
            return Err(TpError::ZeroHorizon);
        }
        Ok(Self { value: 0, horizon })
    }

    /// The current position.
    #[inline]
    pub fn get(self) -> usize {
        self.value
    }

    #[inline]
    pub fn horizon(self) -> usize {
        self.horizon
    }

    /// Advance by one, wrapping to 0 at the horizon, and return the new value.
    #[inline]
    pub fn advance(&mut self) -> usize {
        self.value = (self.value + 1) % self.horizon;
        self.value
    }
}

impl fmt::Display for CyclicIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.horizon)
    }
}
