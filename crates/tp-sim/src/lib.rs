//! `tp-sim`: tick loop orchestrator for the trajectory playback engine.
//!
//! # Tick loop
//!
//! ```text
//! load:   trajectory ← parse(file, H);  vehicles ← states[0];  t ← 0
//! tick:
//!   ① Encode      message ← encode(defs, states[t])
//!   ② Exchange    action ← channel.exchange(message)      (blocks)
//!   ③ Advance     t ← (t + 1) mod H
//!   ④ Move        controlled vehicle: integrate(action, dt)
//!                 all others:         copy states[t]       (advanced t)
//!   ⑤ Publish     observer.on_publish(report, vehicles)
//! ```
//!
//! Everything runs on the caller's thread.  The only suspension point is
//! the exchange in ②, so the channel never has more than one request in
//! flight.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tp_core::PlaybackConfig;
//! use tp_protocol::TcpDecisionChannel;
//! use tp_sim::{NoopObserver, SimBuilder};
//!
//! let channel = TcpDecisionChannel::connect("127.0.0.1:5555", None)?;
//! let mut sim = SimBuilder::from_path(PlaybackConfig::default(), path, channel)?.build()?;
//! sim.run(None, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{ActionSource, NoopObserver, SimObserver, TickReport};
pub use sim::Sim;
