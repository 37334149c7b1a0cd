//! Shared setup for the `replay` and `constant_policy` binaries.

pub mod config;
pub mod policy;


use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::{Config, ConfigError, PolicyConfig};
pub use policy::serve_constant;

/// Install the global subscriber.  `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
