//! replay: drive a recorded traffic scene against a live decision process.
//!
//! Loads `TRAJ_PATH`, connects to the decision process at `DECISION_ADDR`,
//! and runs the tick loop until `MAX_TICKS` (or forever).  Every replayed
//! vehicle follows its recording; the controlled vehicle follows the
//! decision process.  Set `OUTPUT_DIR` to record poses in the reference host
//! frame.  See `tp_replay::config` for every variable.
//!
//! Pair with `constant_policy` for a local run:
//!
//! ```text
//! POLICY_ACCEL=0.5 cargo run --bin constant_policy &
//! TRAJ_PATH=trajdata.txt MAX_TICKS=600 OUTPUT_DIR=out cargo run --bin replay
//! ```

use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use tp_core::HostFrame;
use tp_output::{CsvWriter, PoseObserver};
use tp_protocol::TcpDecisionChannel;
use tp_replay::{init_tracing, Config};
use tp_sim::{NoopObserver, SimBuilder};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    info!(path = %config.traj_path.display(), addr = %config.decision_addr, "starting playback");

    let channel = TcpDecisionChannel::connect(config.decision_addr.as_str(), config.reply_timeout)?;
    let mut sim = SimBuilder::from_path(config.playback.clone(), &config.traj_path, channel)?.build()?;

    for (vehicle, spawn) in sim.host_poses(HostFrame::REFERENCE).iter().enumerate() {
        info!(vehicle, x = spawn.x, y = spawn.y, yaw_deg = spawn.yaw_deg, "spawn");
    }

    let started = Instant::now();
    match &config.output_dir {
        Some(dir) => {
            let mut obs = PoseObserver::new(CsvWriter::new(dir)?, HostFrame::REFERENCE);
            let result = sim.run(config.max_ticks, &mut obs);
            if let Some(e) = obs.take_error() {
                warn!(error = %e, dir = %dir.display(), "pose recording failed");
            }
            result?;
        }
        None => sim.run(config.max_ticks, &mut NoopObserver)?,
    }

    info!(
        ticks     = sim.current_tick().0,
        exchanges = sim.channel.exchanges(),
        elapsed   = ?started.elapsed(),
        "playback finished"
    );
    Ok(())
}
