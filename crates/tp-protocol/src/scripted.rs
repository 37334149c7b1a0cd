//! In-process decision channels for tests and offline runs.

use std::collections::VecDeque;

use tp_core::Action;

use crate::{parse_action, ChannelError, ChannelResult, DecisionChannel, Message};

/// A [`DecisionChannel`] that answers every request with the same action.
///
/// Useful for "coasting" runs and as a placeholder where no decision process
/// is available.
#[derive(Debug, Clone)]
pub struct ConstantPolicy {
    pub action: Action,
    /// Requests received so far.
    pub calls:  u64,
}

impl ConstantPolicy {
    pub fn new(action: Action) -> Self {
        Self { action, calls: 0 }
    }
}

impl DecisionChannel for ConstantPolicy {
    fn exchange(&mut self, _message: &Message) -> ChannelResult<Action> {
        self.calls += 1;
        Ok(self.action)
    }
}

/// One pre-programmed outcome of a [`ScriptedChannel`] exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedReply {
    /// A raw reply payload, decoded with [`parse_action`].
    Text(String),
    /// The decision process does not answer in time.
    Timeout,
    /// The decision process hangs up.
    Disconnect,
}

impl From<&str> for ScriptedReply {
    fn from(s: &str) -> Self {
        ScriptedReply::Text(s.to_owned())
    }
}

impl From<Action> for ScriptedReply {
    fn from(a: Action) -> Self {
        ScriptedReply::Text(format!("{} {}", a.acceleration, a.turn_rate))
    }
}

/// A [`DecisionChannel`] that plays back a fixed list of replies and records
/// every message it was sent.
///
/// Once the script runs out, every exchange fails with
/// [`ChannelError::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedChannel {
    replies: VecDeque<ScriptedReply>,
    sent:    Vec<Message>,
}

impl ScriptedChannel {
    pub fn new<I, R>(replies: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ScriptedReply>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            sent:    Vec::new(),
        }
    }

    /// Append one more reply to the script.
    pub fn push_reply(&mut self, reply: impl Into<ScriptedReply>) {
        self.replies.push_back(reply.into());
    }

    /// Every message sent so far, oldest first.
    pub fn sent(&self) -> &[Message] {
        &self.sent
    }

    /// Replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl DecisionChannel for ScriptedChannel {
    fn exchange(&mut self, message: &Message) -> ChannelResult<Action> {
        self.sent.push(message.clone());
        match self.replies.pop_front() {
            Some(ScriptedReply::Text(reply)) => parse_action(&reply),
            Some(ScriptedReply::Timeout)     => Err(ChannelError::Timeout),
            Some(ScriptedReply::Disconnect) | None => Err(ChannelError::Closed),
        }
    }
}
