//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `TpError` where a core
//! validation failure can surface through them.

use thiserror::Error;

/// The error type for `tp-core` validation.
#[derive(Debug, Error, PartialEq)]
pub enum TpError {
    #[error("horizon must be at least one tick")]
    ZeroHorizon,

    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tp-core`.
pub type TpResult<T> = Result<T, TpError>;
