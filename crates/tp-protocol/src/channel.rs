//! The `DecisionChannel` trait: the seam between the loop and whatever
//! computes the controlled vehicle's action.

use tp_core::Action;

use crate::{ChannelResult, Message};

/// A synchronous request/reply link to a decision process.
///
/// Each call sends exactly one message and returns only once the matching
/// reply has been decoded (or the exchange has failed).  Implementations
/// must never have more than one request outstanding.
///
/// # Example
///
/// ```rust,ignore
/// let message = encode_state(trajectory.defs(), trajectory.state(t))?;
/// let action  = channel.exchange(&message)?;
/// ```
pub trait DecisionChannel {
    fn exchange(&mut self, message: &Message) -> ChannelResult<Action>;
}
