//! The `Sim` struct and its tick loop.

use tracing::{debug, error, warn};

use tp_core::{
    Action, CyclicIndex, HostFrame, HostPose, PlaybackConfig, ReplyFailurePolicy, StateSource, Tick,
};
use tp_motion::{MotionEngine, VehicleStore};
use tp_protocol::{encode_state, DecisionChannel, Message};
use tp_trajectory::TrajectoryData;

use crate::{ActionSource, SimError, SimObserver, SimResult, TickReport};

/// The playback simulation.
///
/// `Sim<C>` owns the trajectory, the live vehicle state, and the decision
/// channel, and drives the per-tick sequence:
///
/// 1. **Encode**: serialise the vehicle definitions with the recorded state
///    at the current index (or the live state, see [`StateSource`]).
/// 2. **Exchange**: send it and block for the action.
/// 3. **Advance**: `index = (index + 1) mod H`.
/// 4. **Move**: integrate the controlled vehicle from the action; overwrite
///    every other vehicle with its recorded row at the *advanced* index.
/// 5. **Publish**: hand the new poses to the observer.
///
/// There is no terminal state: the index wraps and the recording loops for
/// as long as the caller keeps ticking.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: DecisionChannel> {
    pub(crate) config:      PlaybackConfig,
    pub(crate) trajectory:  TrajectoryData,
    pub(crate) vehicles:    VehicleStore,
    pub(crate) motion:      MotionEngine,
    pub(crate) index:       CyclicIndex,
    pub(crate) tick:        Tick,
    pub(crate) last_action: Option<Action>,

    /// The decision channel.  Held for the lifetime of the simulation.
    pub channel: C,
}

impl<C: DecisionChannel> Sim<C> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn trajectory(&self) -> &TrajectoryData {
        &self.trajectory
    }

    /// Live pose and speed of every vehicle.
    pub fn vehicles(&self) -> &VehicleStore {
        &self.vehicles
    }

    /// Current trajectory index `t`.
    pub fn index(&self) -> usize {
        self.index.get()
    }

    /// Ticks completed since load.
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Every vehicle's live pose in host units, in index order.  Right after
    /// build these are the spawn poses.
    pub fn host_poses(&self, frame: HostFrame) -> Vec<HostPose> {
        self.vehicles
            .iter()
            .map(|(_, pose, speed)| frame.to_host(pose, speed))
            .collect()
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick.
    ///
    /// # Errors
    ///
    /// Under [`ReplyFailurePolicy::Abort`], a failed exchange returns
    /// [`SimError::Exchange`] and leaves the index, tick counter, and every
    /// vehicle untouched.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.tick;
        let sent_index = self.index.get();
        observer.on_tick_start(now, sent_index);

        // ── Encode + exchange ─────────────────────────────────────────────
        let message = self.state_message(sent_index)?;
        let (action, action_source) = match self.channel.exchange(&message) {
            Ok(action) => {
                self.last_action = Some(action);
                (action, ActionSource::Decision)
            }
            Err(err) => {
                let fallback = match self.config.failure_policy {
                    ReplyFailurePolicy::Abort => {
                        error!(tick = %now, error = %err, "decision exchange failed");
                        return Err(SimError::Exchange { tick: now, source: err });
                    }
                    ReplyFailurePolicy::HoldLastAction => (
                        self.last_action.unwrap_or(Action::ZERO),
                        ActionSource::HeldLast,
                    ),
                    ReplyFailurePolicy::ZeroAction => (Action::ZERO, ActionSource::Zero),
                };
                warn!(tick = %now, error = %err, action = %fallback.0, "decision exchange failed; applying fallback");
                observer.on_exchange_failed(now, &err, fallback.0);
                fallback
            }
        };

        // ── Advance, then move every vehicle ──────────────────────────────
        let index = self.index.advance();
        self.motion.apply(&mut self.vehicles, &self.trajectory, index, action, self.config.dt_secs);

        let report = TickReport { tick: now, sent_index, index, action, action_source };
        debug!(tick = %now, sent_index, index, %action, source = %action_source, "tick complete");

        observer.on_publish(&report, &self.vehicles);
        self.tick = now.next();
        Ok(report)
    }

    /// Tick until `max_ticks` more ticks have run, or forever with `None`.
    ///
    /// Calls [`SimObserver::on_sim_end`] when it stops normally.
    pub fn run<O: SimObserver>(&mut self, max_ticks: Option<u64>, observer: &mut O) -> SimResult<()> {
        let mut remaining = max_ticks;
        while remaining != Some(0) {
            self.tick(observer)?;
            if let Some(n) = remaining.as_mut() {
                *n -= 1;
            }
        }
        observer.on_sim_end(self.tick);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn state_message(&self, index: usize) -> SimResult<Message> {
        let defs = self.trajectory.defs();
        let message = match self.config.state_source {
            StateSource::Recorded => encode_state(defs, self.trajectory.state(index))?,
            StateSource::Live     => encode_state(defs, &self.vehicles.snapshot()?)?,
        };
        Ok(message)
    }
}
