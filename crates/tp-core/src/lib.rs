//! `tp-core`: foundational types for the trajectory playback engine.
//!
//! This crate is a dependency of every other `tp-*` crate.  It has no `tp-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `VehicleId`                                           |
//! | [`action`]      | `Action`                                              |
//! | [`geo`]         | `Pose`, `HostFrame`, `HostPose`                       |
//! | [`time`]        | `Tick`, `CyclicIndex`                                 |
//! | [`config`]      | `PlaybackConfig`, `StateSource`, `ReplyFailurePolicy` |
//! | [`error`]       | `TpError`, `TpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use config::{PlaybackConfig, ReplyFailurePolicy, StateSource};
pub use error::{TpError, TpResult};
pub use geo::{HostFrame, HostPose, Pose};
pub use ids::VehicleId;
pub use time::{CyclicIndex, Tick};
