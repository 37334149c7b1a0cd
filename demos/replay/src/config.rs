//! Configuration loaded from environment variables.
//!
//! | Variable             | Default          | Used by           |
//! |----------------------|------------------|-------------------|
//! | `TRAJ_PATH`          | *(required)*     | `replay`          |
//! | `DECISION_ADDR`      | `127.0.0.1:5555` | both              |
//! | `HORIZON`            | `150`            | `replay`          |
//! | `DT_SECS`            | `0.1`            | `replay`          |
//! | `EGO_INDEX`          | `0`              | `replay`          |
//! | `STATE_SOURCE`       | `recorded`       | `replay`          |
//! | `FAILURE_POLICY`     | `abort`          | `replay`          |
//! | `HEADING_OFFSET_RAD` | `0`              | `replay`          |
//! | `REPLY_TIMEOUT_MS`   | unset (block)    | `replay`          |
//! | `MAX_TICKS`          | unset (forever)  | `replay`          |
//! | `OUTPUT_DIR`         | unset (no CSV)   | `replay`          |
//! | `POLICY_ACCEL`       | `0`              | `constant_policy` |
//! | `POLICY_TURN_RATE`   | `0`              | `constant_policy` |
//! | `LOG_LEVEL`          | `info`           | both              |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tp_core::{Action, PlaybackConfig, ReplyFailurePolicy, StateSource, VehicleId};

pub const DEFAULT_DECISION_ADDR: &str = "127.0.0.1:5555";

/// Configuration for the `replay` binary.
#[derive(Clone, Debug)]
pub struct Config {
    /// Trajectory file to play back.
    pub traj_path:     PathBuf,
    /// Address of the decision process.
    pub decision_addr: String,
    pub playback:      PlaybackConfig,
    /// Read/write timeout on the decision channel; `None` blocks forever.
    pub reply_timeout: Option<Duration>,
    /// Stop after this many ticks; `None` runs until interrupted.
    pub max_ticks:     Option<u64>,
    /// Write `poses.csv` and `ticks.csv` here when set.
    pub output_dir:    Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    pub log_level:     String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PlaybackConfig::default();
        let playback = PlaybackConfig {
            horizon:            parse_var::<usize, _>(&lookup, "HORIZON")?.unwrap_or(defaults.horizon),
            dt_secs:            parse_var::<f64, _>(&lookup, "DT_SECS")?.unwrap_or(defaults.dt_secs),
            controlled_vehicle: parse_var::<u32, _>(&lookup, "EGO_INDEX")?
                .map(VehicleId)
                .unwrap_or(defaults.controlled_vehicle),
            state_source:       parse_var::<StateSource, _>(&lookup, "STATE_SOURCE")?.unwrap_or(defaults.state_source),
            failure_policy:     parse_var::<ReplyFailurePolicy, _>(&lookup, "FAILURE_POLICY")?.unwrap_or(defaults.failure_policy),
            heading_offset_rad: parse_var::<f64, _>(&lookup, "HEADING_OFFSET_RAD")?
                .unwrap_or(defaults.heading_offset_rad),
        };

        Ok(Self {
            traj_path:     lookup("TRAJ_PATH")
                .map(PathBuf::from)
                .ok_or(ConfigError::Missing("TRAJ_PATH"))?,
            decision_addr: lookup("DECISION_ADDR").unwrap_or_else(|| DEFAULT_DECISION_ADDR.to_string()),
            playback,
            reply_timeout: parse_var::<u64, _>(&lookup, "REPLY_TIMEOUT_MS")?.map(Duration::from_millis),
            max_ticks:     parse_var::<u64, _>(&lookup, "MAX_TICKS")?,
            output_dir:    lookup("OUTPUT_DIR").map(PathBuf::from),
            log_level:     lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Configuration for the `constant_policy` binary.
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    /// Address to listen on.
    pub decision_addr: String,
    /// The action sent back for every request.
    pub action:        Action,
    pub log_level:     String,
}

impl PolicyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            decision_addr: lookup("DECISION_ADDR").unwrap_or_else(|| DEFAULT_DECISION_ADDR.to_string()),
            action:        Action::new(
                parse_var::<f64, _>(&lookup, "POLICY_ACCEL")?.unwrap_or(0.0),
                parse_var::<f64, _>(&lookup, "POLICY_TURN_RATE")?.unwrap_or(0.0),
            ),
            log_level:     lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Parse an optional variable; present but unparsable is an error.
fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
