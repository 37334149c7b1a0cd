//! Reply decoding.

use tp_core::Action;

use crate::{ChannelError, ChannelResult};

/// Decode a reply payload into an [`Action`].
///
/// The payload is split on whitespace and read as floating-point numbers up
/// to the first token that is not one.  The first number is the
/// acceleration, the second the turn rate; any further numbers are ignored.
pub fn parse_action(reply: &str) -> ChannelResult<Action> {
    let mut numbers = reply
        .split_whitespace()
        .map_while(|tok| tok.parse::<f64>().ok());

    match (numbers.next(), numbers.next()) {
        (Some(acceleration), Some(turn_rate)) => Ok(Action::new(acceleration, turn_rate)),
        (first, _) => Err(ChannelError::MalformedReply {
            reply:  reply.to_owned(),
            reason: format!(
                "expected at least two numbers, found {}",
                usize::from(first.is_some())
            ),
        }),
    }
}
