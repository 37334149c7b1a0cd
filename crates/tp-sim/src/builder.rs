//! Builder for constructing a [`Sim`].

use std::path::Path;

use tracing::info;

use tp_core::{CyclicIndex, PlaybackConfig, Tick};
use tp_motion::{KinematicIntegrator, MotionEngine, VehicleStore};
use tp_protocol::DecisionChannel;
use tp_trajectory::{load_trajectory, TrajectoryData};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`PlaybackConfig`]: horizon, time step, controlled vehicle, policies
/// - [`TrajectoryData`]: already parsed, or read with [`SimBuilder::from_path`]
/// - `C: DecisionChannel`: an open channel (e.g. a connected
///   [`tp_protocol::TcpDecisionChannel`])
///
/// # Example
///
/// ```rust,ignore
/// let channel = TcpDecisionChannel::connect("127.0.0.1:5555", None)?;
/// let mut sim = SimBuilder::from_path(config, Path::new("trajdata.txt"), channel)?
///     .build()?;
/// sim.run(Some(1_000), &mut NoopObserver)?;
/// ```
pub struct SimBuilder<C: DecisionChannel> {
    config:     PlaybackConfig,
    trajectory: TrajectoryData,
    channel:    C,
}

impl<C: DecisionChannel> SimBuilder<C> {
    pub fn new(config: PlaybackConfig, trajectory: TrajectoryData, channel: C) -> Self {
        Self { config, trajectory, channel }
    }

    /// Read `config.horizon` ticks from the trajectory file at `path`.
    pub fn from_path(config: PlaybackConfig, path: &Path, channel: C) -> SimResult<Self> {
        let trajectory = load_trajectory(path, config.horizon)?;
        Ok(Self::new(config, trajectory, channel))
    }

    /// Validate inputs, seed every vehicle from the first recorded state, and
    /// return a ready-to-tick [`Sim`] at index 0.
    pub fn build(self) -> SimResult<Sim<C>> {
        self.config.validate()?;

        let horizon = self.trajectory.horizon();
        if horizon != self.config.horizon {
            return Err(SimError::HorizonMismatch {
                expected: self.config.horizon,
                got:      horizon,
            });
        }

        let n_vehicles = self.trajectory.n_vehicles();
        let controlled = self.config.controlled_vehicle;
        if controlled.index() >= n_vehicles {
            return Err(SimError::ControlledVehicleOutOfRange { vehicle: controlled, n_vehicles });
        }

        let vehicles = VehicleStore::from_state(self.trajectory.state(0));
        let motion = MotionEngine::new(
            KinematicIntegrator::new(self.config.heading_offset_rad),
            controlled,
        );

        info!(
            n_vehicles,
            horizon,
            %controlled,
            dt_secs = self.config.dt_secs,
            state_source = %self.config.state_source,
            failure_policy = %self.config.failure_policy,
            heading_offset_rad = self.config.heading_offset_rad,
            "simulation loaded"
        );

        Ok(Sim {
            index:       CyclicIndex::new(horizon)?,
            tick:        Tick::ZERO,
            last_action: None,
            config:      self.config,
            trajectory:  self.trajectory,
            vehicles,
            motion,
            channel:     self.channel,
        })
    }
}
