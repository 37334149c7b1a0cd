//! Simulation observer trait: the host-facing side of the loop.

use std::fmt;

use tp_core::{Action, Tick};
use tp_motion::VehicleStore;
use tp_protocol::ChannelError;

/// Where the action applied in a tick came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionSource {
    /// Received from the decision process this tick.
    Decision,
    /// The exchange failed; the last received action was reused.
    HeldLast,
    /// The exchange failed; a zero action was applied.
    Zero,
}

impl fmt::Display for ActionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionSource::Decision => "decision",
            ActionSource::HeldLast => "held_last",
            ActionSource::Zero     => "zero",
        })
    }
}

/// Summary of one completed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickReport {
    pub tick:          Tick,
    /// Trajectory index whose recorded state was current when the message
    /// was built.
    pub sent_index:    usize,
    /// Trajectory index after advancing; replayed vehicles show this row.
    pub index:         usize,
    pub action:        Action,
    pub action_source: ActionSource,
}

/// Callbacks invoked by [`Sim`][crate::Sim] at key points in the tick loop.
///
/// All methods have default no-op implementations.  A rendering host
/// implements [`on_publish`][Self::on_publish] to move its actors.
///
/// # Example: reposition host actors
///
/// ```rust,ignore
/// struct SceneSync { actors: Vec<ActorHandle>, frame: HostFrame }
///
/// impl SimObserver for SceneSync {
///     fn on_publish(&mut self, _report: &TickReport, vehicles: &VehicleStore) {
///         for (id, pose, speed) in vehicles.iter() {
///             self.actors[id.index()].place(self.frame.to_host(pose, speed));
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before the message is encoded.
    fn on_tick_start(&mut self, _tick: Tick, _index: usize) {}

    /// Called when an exchange failed and the failure policy substituted
    /// `fallback`.  Not called under the abort policy; the error is returned
    /// from the tick instead.
    fn on_exchange_failed(&mut self, _tick: Tick, _error: &ChannelError, _fallback: Action) {}

    /// Called once every vehicle has its new pose and speed.
    fn on_publish(&mut self, _report: &TickReport, _vehicles: &VehicleStore) {}

    /// Called once when [`Sim::run`][crate::Sim::run] stops.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
