//! Immutable trajectory data: vehicle definitions plus one recorded
//! `VehicleState` per tick.
//!
//! Both record types are Structure-of-Arrays: every `Vec` has exactly
//! `n_vehicles` elements and a [`VehicleId`] is the index into all of them,
//! in `VehicleDefs` and in every `VehicleState` alike.
//!
//! ```ignore
//! let x = trajectory.state(t).x()[vehicle.index()];
//! ```
//!
//! Field names are also the wire names (`id`, `cls`, `length`, `width`,
//! `n_vehicles`; `x`, `y`, `theta`, `v`), so both types serialise straight
//! into the decision-process request.

use serde::{Deserialize, Serialize};

use tp_core::{Pose, VehicleId};

use crate::{TrajectoryError, TrajectoryResult};

// ── VehicleDefs ───────────────────────────────────────────────────────────────

/// Static per-vehicle properties, created once at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDefs")]
pub struct VehicleDefs {
    pub(crate) id:         Vec<i32>,
    pub(crate) cls:        Vec<i32>,
    pub(crate) length:     Vec<f64>,
    pub(crate) width:      Vec<f64>,
    pub(crate) n_vehicles: usize,
}

#[derive(Deserialize)]
struct RawDefs {
    id:         Vec<i32>,
    cls:        Vec<i32>,
    length:     Vec<f64>,
    width:      Vec<f64>,
    n_vehicles: usize,
}

impl TryFrom<RawDefs> for VehicleDefs {
    type Error = TrajectoryError;

    fn try_from(raw: RawDefs) -> TrajectoryResult<Self> {
        let defs = VehicleDefs::new(raw.id, raw.cls, raw.length, raw.width)?;
        check_len(raw.n_vehicles, defs.n_vehicles, "declared n_vehicles")?;
        Ok(defs)
    }
}

impl VehicleDefs {
    /// Build definitions from parallel sequences.  `n_vehicles` is taken from
    /// `id.len()`; the other three must match it.
    pub fn new(
        id:     Vec<i32>,
        cls:    Vec<i32>,
        length: Vec<f64>,
        width:  Vec<f64>,
    ) -> TrajectoryResult<Self> {
        let n_vehicles = id.len();
        check_len(n_vehicles, cls.len(), "cls")?;
        check_len(n_vehicles, length.len(), "length")?;
        check_len(n_vehicles, width.len(), "width")?;
        Ok(Self { id, cls, length, width, n_vehicles })
    }

    #[inline]
    pub fn n_vehicles(&self) -> usize {
        self.n_vehicles
    }

    /// Vehicle labels as read from the file.
    pub fn id(&self) -> &[i32] {
        &self.id
    }

    /// Vehicle class codes.
    pub fn cls(&self) -> &[i32] {
        &self.cls
    }

    pub fn length(&self) -> &[f64] {
        &self.length
    }

    pub fn width(&self) -> &[f64] {
        &self.width
    }
}

// ── VehicleState ──────────────────────────────────────────────────────────────

/// Every vehicle's recorded pose and speed at one tick.
///
/// Positions are single precision (as recorded); heading and speed are
/// double precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct VehicleState {
    pub(crate) x:     Vec<f32>,
    pub(crate) y:     Vec<f32>,
    pub(crate) theta: Vec<f64>,
    pub(crate) v:     Vec<f64>,
}

#[derive(Deserialize)]
struct RawState {
    x:     Vec<f32>,
    y:     Vec<f32>,
    theta: Vec<f64>,
    v:     Vec<f64>,
}

impl TryFrom<RawState> for VehicleState {
    type Error = TrajectoryError;

    fn try_from(raw: RawState) -> TrajectoryResult<Self> {
        VehicleState::new(raw.x, raw.y, raw.theta, raw.v)
    }
}

impl VehicleState {
    /// Build a state from parallel sequences of equal length.
    pub fn new(x: Vec<f32>, y: Vec<f32>, theta: Vec<f64>, v: Vec<f64>) -> TrajectoryResult<Self> {
        let n = x.len();
        check_len(n, y.len(), "y")?;
        check_len(n, theta.len(), "theta")?;
        check_len(n, v.len(), "v")?;
        Ok(Self { x, y, theta, v })
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            x:     Vec::with_capacity(n),
            y:     Vec::with_capacity(n),
            theta: Vec::with_capacity(n),
            v:     Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, x: f32, y: f32, theta: f64, v: f64) {
        self.x.push(x);
        self.y.push(y);
        self.theta.push(theta);
        self.v.push(v);
    }

    /// Number of vehicles in this state.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f32] {
        &self.x
    }

    pub fn y(&self) -> &[f32] {
        &self.y
    }

    /// Headings in radians.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Speeds.
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// The recorded pose of `vehicle`, widened to `f64` (exact).
    ///
    /// # Panics
    /// Panics if `vehicle` is out of range.
    #[inline]
    pub fn pose(&self, vehicle: VehicleId) -> Pose {
        let i = vehicle.index();
        Pose::new(self.x[i] as f64, self.y[i] as f64, self.theta[i])
    }

    /// The recorded speed of `vehicle`.
    ///
    /// # Panics
    /// Panics if `vehicle` is out of range.
    #[inline]
    pub fn speed(&self, vehicle: VehicleId) -> f64 {
        self.v[vehicle.index()]
    }
}

// ── TrajectoryData ────────────────────────────────────────────────────────────

/// Vehicle definitions plus `H` recorded states.  Read-only after load.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryData {
    defs:   VehicleDefs,
    states: Vec<VehicleState>,
}

impl TrajectoryData {
    /// Pair definitions with states, checking every state has one entry per
    /// defined vehicle.
    pub fn new(defs: VehicleDefs, states: Vec<VehicleState>) -> TrajectoryResult<Self> {
        for state in &states {
            check_len(defs.n_vehicles, state.len(), "vehicle state")?;
        }
        Ok(Self { defs, states })
    }

    /// Loader path: rows were pushed one vehicle at a time, so shapes hold.
    pub(crate) fn from_parts(defs: VehicleDefs, states: Vec<VehicleState>) -> Self {
        Self { defs, states }
    }

    pub fn defs(&self) -> &VehicleDefs {
        &self.defs
    }

    pub fn states(&self) -> &[VehicleState] {
        &self.states
    }

    /// The recorded state at trajectory index `t`.
    ///
    /// # Panics
    /// Panics if `t >= self.horizon()`.
    #[inline]
    pub fn state(&self, t: usize) -> &VehicleState {
        &self.states[t]
    }

    /// Number of recorded ticks, `H`.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn n_vehicles(&self) -> usize {
        self.defs.n_vehicles
    }
}

fn check_len(expected: usize, got: usize, what: &'static str) -> TrajectoryResult<()> {
    if expected != got {
        return Err(TrajectoryError::Shape { expected, got, what });
    }
    Ok(())
}
