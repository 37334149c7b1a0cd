//! `tp-trajectory`: recorded trajectories and the fixed-format loader.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`data`]    | `VehicleDefs`, `VehicleState`, `TrajectoryData`                 |
//! | [`loader`]  | `parse_trajectory`, `load_trajectory`, `load_trajectory_reader` |
//! | [`error`]   | `ParseError`, `ParseErrorKind`, `TrajectoryError`               |
//!
//! A trajectory is loaded once and then only read.  The simulation loop owns
//! it and lends `&TrajectoryData` to the encoder and the playback driver.

pub mod data;
pub mod error;
pub mod loader;


pub use data::{TrajectoryData, VehicleDefs, VehicleState};
pub use error::{ParseError, ParseErrorKind, TrajectoryError, TrajectoryResult};
pub use loader::{load_trajectory, load_trajectory_reader, parse_trajectory};
