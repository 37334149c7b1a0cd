use std::fmt;

use thiserror::Error;

/// The category of a trajectory-file parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Fewer tokens or lines than the declared counts require.
    TruncatedFile,
    /// A token that must be numeric failed to parse.
    NonNumericToken,
    /// A per-tick block has a row count different from `n_vehicles`.
    VehicleCountMismatch,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseErrorKind::TruncatedFile        => "truncated file",
            ParseErrorKind::NonNumericToken      => "non-numeric token",
            ParseErrorKind::VehicleCountMismatch => "vehicle count mismatch",
        })
    }
}

/// A parse failure with the 1-based line it was detected on.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at line {line}: {detail}")]
pub struct ParseError {
    pub kind:   ParseErrorKind,
    pub line:   usize,
    pub detail: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, line: usize, detail: impl Into<String>) -> Self {
        Self { kind, line, detail: detail.into() }
    }
}

#[derive(Debug, Error)]
pub enum TrajectoryError {
    #[error("trajectory parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{what} length {got} does not match vehicle count {expected}")]
    Shape {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;
