//! `tp-protocol`: the per-tick state/action exchange.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`message`]  | `Message`, `encode_state`, `decode_message`, `DecodedState`     |
//! | [`action`]   | `parse_action`: reply payload → `Action`                        |
//! | [`channel`]  | `DecisionChannel` trait                                         |
//! | [`tcp`]      | `TcpDecisionChannel`, `serve_decisions`                         |
//! | [`scripted`] | `ConstantPolicy`, `ScriptedChannel`, `ScriptedReply`            |
//! | [`error`]    | `ChannelError`, `ChannelResult<T>`                              |
//!
//! # Exchange model
//!
//! Exactly one request per tick, and the reply is always consumed before the
//! next request is sent:
//!
//! ```text
//! encode_state(defs, state) ──► exchange(&message) ──► Action
//!                                    │  blocks until the reply line arrives
//!                                    ▼  (or the configured timeout elapses)
//! ```
//!
//! The reply is a whitespace-separated list of numbers; the first two are
//! `(acceleration, turn_rate)`.

pub mod action;
pub mod channel;
pub mod error;
pub mod message;
pub mod scripted;
pub mod tcp;


pub use action::parse_action;
pub use channel::DecisionChannel;
pub use error::{ChannelError, ChannelResult};
pub use message::{decode_message, encode_state, DecodedState, Message};
pub use scripted::{ConstantPolicy, ScriptedChannel, ScriptedReply};
pub use tcp::{serve_decisions, TcpDecisionChannel};
