//! Tests for tp-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use tp_sim::ActionSource;

    use crate::csv::{CsvWriter, POSES_FILE, TICKS_FILE};
    use crate::row::{PoseRow, TickRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn pose_row(vehicle: u32, tick: u64) -> PoseRow {
        PoseRow {
            tick,
            index:   tick as usize + 1,
            vehicle,
            x:       vehicle as f64 * 10.0,
            y:       1.5,
            yaw_deg: -90.0,
            speed:   12.25,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(POSES_FILE).exists());
        assert!(dir.path().join(TICKS_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("run").join("001");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(POSES_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join(POSES_FILE)),
            ["tick", "index", "vehicle", "x", "y", "yaw_deg", "speed"]
        );
        assert_eq!(
            headers(dir.path().join(TICKS_FILE)),
            ["tick", "sent_index", "index", "acceleration", "turn_rate", "action_source"]
        );
    }

    #[test]
    fn pose_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_poses(&[pose_row(0, 4), pose_row(1, 4)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(POSES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "4");     // tick
        assert_eq!(&rows[1][1], "5");     // index
        assert_eq!(&rows[1][2], "1");     // vehicle
        assert_eq!(&rows[1][3], "10");    // x
        assert_eq!(&rows[1][6], "12.25"); // speed
    }

    #[test]
    fn tick_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick(&TickRow {
            tick:          7,
            sent_index:    2,
            index:         3,
            acceleration:  0.5,
            turn_rate:     -0.25,
            action_source: ActionSource::HeldLast,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(TICKS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            ["7", "2", "3", "0.5", "-0.25", "held_last"]
        );
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_poses_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_poses(&[]).unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use tp_core::{Action, HostFrame, PlaybackConfig};
    use tp_protocol::ConstantPolicy;
    use tp_sim::SimBuilder;
    use tp_trajectory::{TrajectoryData, VehicleDefs, VehicleState};

    use crate::csv::{CsvWriter, POSES_FILE, TICKS_FILE};
    use crate::observer::PoseObserver;
    use crate::row::{PoseRow, TickRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Two vehicles over three ticks, vehicle `i` at `(i + t, 2i)`.
    fn trajectory() -> TrajectoryData {
        let defs = VehicleDefs::new(vec![1, 2], vec![1, 1], vec![4.5; 2], vec![1.8; 2]).unwrap();
        let states = (0..3)
            .map(|t| {
                VehicleState::new(
                    vec![t as f32, 1.0 + t as f32],
                    vec![0.0, 2.0],
                    vec![0.0, 0.0],
                    vec![5.0, 5.0],
                )
                .unwrap()
            })
            .collect();
        TrajectoryData::new(defs, states).unwrap()
    }

    /// In-memory writer; fails every pose write after `fail_after` batches.
    #[derive(Default)]
    struct MemWriter {
        poses:      Vec<PoseRow>,
        ticks:      Vec<TickRow>,
        finished:   u32,
        fail_after: Option<usize>,
    }

    impl OutputWriter for MemWriter {
        fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()> {
            if self.fail_after.is_some_and(|n| self.ticks.len() >= n) {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.poses.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
            self.ticks.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn config() -> PlaybackConfig {
        PlaybackConfig { horizon: 3, ..PlaybackConfig::default() }
    }

    #[test]
    fn records_every_vehicle_every_tick() {
        let mut sim = SimBuilder::new(config(), trajectory(), ConstantPolicy::new(Action::new(1.0, 0.0)))
            .build()
            .unwrap();
        let mut obs = PoseObserver::new(MemWriter::default(), HostFrame::IDENTITY);
        sim.run(Some(4), &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(w.poses.len(), 8);
        assert_eq!(w.ticks.len(), 4);
        assert_eq!(w.finished, 1);

        // Tick 3 wraps to index 1; vehicle 1 replays row 1.
        let last = w.poses[7];
        assert_eq!((last.tick, last.index, last.vehicle), (3, 1, 1));
        assert_eq!((last.x, last.y), (2.0, 2.0));
        assert_eq!(w.ticks[3].acceleration, 1.0);
        assert_eq!(w.ticks[3].sent_index, 0);
    }

    #[test]
    fn poses_converted_with_frame() {
        let mut sim = SimBuilder::new(config(), trajectory(), ConstantPolicy::new(Action::ZERO))
            .build()
            .unwrap();
        let mut obs = PoseObserver::new(MemWriter::default(), HostFrame::REFERENCE);
        sim.tick(&mut obs).unwrap();

        let w = obs.into_writer();
        let replayed = w.poses[1];
        assert_eq!((replayed.x, replayed.y), (200.0, 200.0));
        assert_eq!(replayed.yaw_deg, -90.0);
        assert_eq!(replayed.speed, 500.0);
    }

    #[test]
    fn first_error_kept() {
        let mut sim = SimBuilder::new(config(), trajectory(), ConstantPolicy::new(Action::ZERO))
            .build()
            .unwrap();
        let writer = MemWriter { fail_after: Some(1), ..MemWriter::default() };
        let mut obs = PoseObserver::new(writer, HostFrame::IDENTITY);
        sim.run(Some(3), &mut obs).unwrap();

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
        let w = obs.into_writer();
        assert_eq!(w.poses.len(), 2);
        assert_eq!(w.ticks.len(), 3);
    }

    #[test]
    fn integration_csv() {
        let mut sim = SimBuilder::new(config(), trajectory(), ConstantPolicy::new(Action::ZERO))
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = PoseObserver::new(writer, HostFrame::IDENTITY);
        sim.run(Some(5), &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join(POSES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 10, "5 ticks × 2 vehicles");
        let mut rdr = csv::Reader::from_path(dir.path().join(TICKS_FILE)).unwrap();
        let sources: Vec<String> = rdr.records().map(|r| r.unwrap()[5].to_owned()).collect();
        assert_eq!(sources, vec!["decision"; 5]);
    }
}
