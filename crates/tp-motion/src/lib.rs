//! `tp-motion`: live vehicle state and the two per-vehicle update rules.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`store`]      | `VehicleStore`: SoA live pose + speed                       |
//! | [`integrator`] | `KinematicIntegrator`: action-driven update                 |
//! | [`playback`]   | `PlaybackDriver`: exact copy from the recording             |
//! | [`engine`]     | `MotionEngine`: dispatches one rule per vehicle             |
//!
//! # Update model
//!
//! Exactly one vehicle (the *controlled* vehicle, index 0 by default) is
//! integrated from the decision process's action.  Every other vehicle is
//! overwritten with its recorded pose and speed at the current index, so
//! background traffic never drifts from the recording.
//!
//! Both rules are infallible; this crate has no error type.

pub mod engine;
pub mod integrator;
pub mod playback;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::MotionEngine;
pub use integrator::KinematicIntegrator;
pub use playback::PlaybackDriver;
pub use store::VehicleStore;
