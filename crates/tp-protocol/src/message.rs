//! Request encoding.
//!
//! A request is one JSON object with two sections:
//!
//! ```json
//! {
//!   "vehicle_defs":   { "id": [...], "cls": [...], "length": [...], "width": [...], "n_vehicles": N },
//!   "vehicle_states": { "x": [...], "y": [...], "theta": [...], "v": [...] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use tp_trajectory::{VehicleDefs, VehicleState};

use crate::{ChannelError, ChannelResult};

/// An encoded request, ready to hand to a [`DecisionChannel`][crate::DecisionChannel].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Serialize)]
struct StateMessage<'a> {
    vehicle_defs:   &'a VehicleDefs,
    vehicle_states: &'a VehicleState,
}

/// The receiving side's view of a request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecodedState {
    pub vehicle_defs:   VehicleDefs,
    pub vehicle_states: VehicleState,
}

/// Serialise `defs` and one `state` snapshot into a request message.
pub fn encode_state(defs: &VehicleDefs, state: &VehicleState) -> ChannelResult<Message> {
    let body = serde_json::to_string(&StateMessage {
        vehicle_defs:   defs,
        vehicle_states: state,
    })?;
    Ok(Message(body))
}

/// Parse a request back into owned values, re-checking every length.
pub fn decode_message(text: &str) -> ChannelResult<DecodedState> {
    let decoded: DecodedState = serde_json::from_str(text)?;
    let n = decoded.vehicle_defs.n_vehicles();
    if decoded.vehicle_states.len() != n {
        return Err(ChannelError::Codec(serde::de::Error::custom(format!(
            "vehicle_states has {} entries, vehicle_defs declares {n}",
            decoded.vehicle_states.len()
        ))));
    }
    Ok(decoded)
}
