use thiserror::Error;

use tp_core::{Tick, TpError, VehicleId};
use tp_protocol::ChannelError;
use tp_trajectory::TrajectoryError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] TpError),

    #[error("trajectory holds {got} recorded ticks but the horizon is {expected}")]
    HorizonMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("controlled vehicle {vehicle} is out of range for {n_vehicles} vehicles")]
    ControlledVehicleOutOfRange {
        vehicle:    VehicleId,
        n_vehicles: usize,
    },

    #[error("decision exchange failed at {tick}: {source}")]
    Exchange {
        tick:   Tick,
        #[source]
        source: ChannelError,
    },

    #[error("state message error: {0}")]
    Channel(#[from] ChannelError),

    #[error("trajectory error: {0}")]
    Trajectory(#[from] TrajectoryError),
}

pub type SimResult<T> = Result<T, SimError>;
