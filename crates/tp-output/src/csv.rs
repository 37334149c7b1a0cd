//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `poses.csv`
//! - `ticks.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PoseRow, TickRow};

pub const POSES_FILE: &str = "poses.csv";
pub const TICKS_FILE: &str = "ticks.csv";

/// Writes recorded poses and tick rows to two CSV files.
pub struct CsvWriter {
    poses:    Writer<File>,
    ticks:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut poses = Writer::from_path(dir.join(POSES_FILE))?;
        poses.write_record(["tick", "index", "vehicle", "x", "y", "yaw_deg", "speed"])?;

        let mut ticks = Writer::from_path(dir.join(TICKS_FILE))?;
        ticks.write_record(["tick", "sent_index", "index", "acceleration", "turn_rate", "action_source"])?;

        Ok(Self { poses, ticks, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.tick.to_string(),
                row.index.to_string(),
                row.vehicle.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.yaw_deg.to_string(),
                row.speed.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.sent_index.to_string(),
            row.index.to_string(),
            row.acceleration.to_string(),
            row.turn_rate.to_string(),
            row.action_source.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.ticks.flush()?;
        Ok(())
    }
}
