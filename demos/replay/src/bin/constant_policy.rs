//! constant_policy: a decision process that always answers with one action.
//!
//! Listens on `DECISION_ADDR` and replies `POLICY_ACCEL POLICY_TURN_RATE`
//! to every state message.  Serves one client at a time, forever; a client
//! that fails mid-session is logged and the next one accepted.

use std::net::TcpListener;

use anyhow::Result;
use tracing::info;

use tp_replay::{init_tracing, serve_constant, PolicyConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = PolicyConfig::from_env()?;
    init_tracing(&config.log_level);

    let listener = TcpListener::bind(config.decision_addr.as_str())?;
    info!(addr = %listener.local_addr()?, action = %config.action, "constant policy listening");

    serve_constant(&listener, config.action, None);
    Ok(())
}
