use thiserror::Error;

/// Failures of one state/action exchange.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("malformed reply {reply:?}: {reason}")]
    MalformedReply { reply: String, reason: String },

    #[error("timed out waiting for the decision process")]
    Timeout,

    #[error("decision process closed the connection")]
    Closed,

    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("message codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

pub type ChannelResult<T> = Result<T, ChannelError>;
