//! Unit tests for tp-motion.

use tp_trajectory::{TrajectoryData, VehicleDefs, VehicleState};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

/// Three vehicles, two recorded ticks.
fn three_by_two() -> TrajectoryData {
    let defs = VehicleDefs::new(vec![10, 11, 12], vec![1, 1, 2], vec![4.5; 3], vec![1.8; 3]).unwrap();
    let s0 = VehicleState::new(
        vec![0.0, 10.0, 20.0],
        vec![0.0, 1.0, 2.0],
        vec![0.0, 0.1, 0.2],
        vec![10.0, 11.0, 12.0],
    )
    .unwrap();
    let s1 = VehicleState::new(
        vec![1.0, 11.25, 21.5],
        vec![0.5, 1.5, 2.5],
        vec![0.05, 0.15, 0.25],
        vec![10.5, 11.5, 12.5],
    )
    .unwrap();
    TrajectoryData::new(defs, vec![s0, s1]).unwrap()
}

// ── KinematicIntegrator ───────────────────────────────────────────────────────

#[cfg(test)]
mod integrator {
    use std::f64::consts::FRAC_PI_2;

    use tp_core::{Action, Pose};

    use super::EPS;
    use crate::KinematicIntegrator;

    #[test]
    fn reference_example() {
        // heading 0 → velocity resolved at 90°: (0, 10) before, (0, 10.2) after.
        let integ = KinematicIntegrator::HOST_YAW;
        let (pose, speed) = integ.integrate(Pose::new(3.0, 4.0, 0.0), 10.0, Action::new(2.0, 0.0), 0.1);
        assert!((speed - 10.2).abs() < EPS);
        assert!((pose.x - 3.0).abs() < EPS, "x moved: {}", pose.x);
        assert!((pose.y - (4.0 + 1.01)).abs() < EPS, "y = {}", pose.y);
        assert_eq!(pose.heading, 0.0);
    }

    #[test]
    fn x_axis_uses_old_velocity_only() {
        // heading −90° + offset 90° → velocity along +x.
        let integ = KinematicIntegrator::HOST_YAW;
        let (pose, speed) =
            integ.integrate(Pose::new(0.0, 0.0, -FRAC_PI_2), 10.0, Action::new(2.0, 0.0), 0.1);
        assert!((speed - 10.2).abs() < EPS);
        // 10 * 0.1, not (10 + 10.2) * 0.1 / 2.
        assert!((pose.x - 1.0).abs() < EPS, "x = {}", pose.x);
        assert!(pose.y.abs() < EPS);
    }

    #[test]
    fn turn_rate_changes_heading_not_this_steps_direction() {
        let integ = KinematicIntegrator::HOST_YAW;
        let (pose, _) = integ.integrate(Pose::new(0.0, 0.0, 0.0), 5.0, Action::new(0.0, 0.5), 0.2);
        assert!((pose.heading - 0.1).abs() < EPS);
        // Still moved along the pre-turn direction (+y).
        assert!((pose.y - 1.0).abs() < EPS);
        assert!(pose.x.abs() < EPS);
    }

    #[test]
    fn default_moves_along_heading() {
        let integ = KinematicIntegrator::default();
        assert_eq!(integ.heading_offset, 0.0);

        let (pose, _) = integ.integrate(Pose::new(0.0, 0.0, 0.0), 4.0, Action::ZERO, 0.5);
        assert!((pose.x - 2.0).abs() < EPS);
        assert!(pose.y.abs() < EPS);

        let (pose, _) = integ.integrate(Pose::new(0.0, 0.0, FRAC_PI_2), 4.0, Action::ZERO, 0.5);
        assert!(pose.x.abs() < EPS);
        assert!((pose.y - 2.0).abs() < EPS);
    }

    #[test]
    fn braking_below_zero_is_not_clamped() {
        let integ = KinematicIntegrator::default();
        let (_, speed) = integ.integrate(Pose::default(), 0.1, Action::new(-5.0, 0.0), 0.1);
        assert!((speed - (-0.4)).abs() < EPS);
    }
}

// ── PlaybackDriver ────────────────────────────────────────────────────────────

#[cfg(test)]
mod playback {
    use tp_core::VehicleId;

    use super::three_by_two;
    use crate::PlaybackDriver;

    #[test]
    fn copies_recorded_row_exactly() {
        let traj = three_by_two();
        let (pose, speed) = PlaybackDriver.replay(VehicleId(1), &traj, 1);
        assert_eq!(pose.x, 11.25);
        assert_eq!(pose.y, 1.5f32 as f64);
        assert_eq!(pose.heading, 0.15);
        assert_eq!(speed, 11.5);
    }
}

// ── VehicleStore ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use tp_core::{Pose, VehicleId};

    use super::three_by_two;
    use crate::VehicleStore;

    #[test]
    fn seeded_from_first_state() {
        let traj = three_by_two();
        let store = VehicleStore::from_state(traj.state(0));
        assert_eq!(store.len(), 3);
        assert_eq!(store.pose(VehicleId(2)), Pose::new(20.0, 2.0, 0.2));
        assert_eq!(store.speed(VehicleId(0)), 10.0);
    }

    #[test]
    fn set_and_iter() {
        let traj = three_by_two();
        let mut store = VehicleStore::from_state(traj.state(0));
        store.set(VehicleId(1), Pose::new(-1.0, -2.0, 3.0), 4.0);
        let rows: Vec<_> = store.iter().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], (VehicleId(1), Pose::new(-1.0, -2.0, 3.0), 4.0));
    }

    #[test]
    fn snapshot_matches_wire_layout() {
        let traj = three_by_two();
        let store = VehicleStore::from_state(traj.state(1));
        assert_eq!(&store.snapshot().unwrap(), traj.state(1));
    }

    #[test]
    fn snapshot_fails_on_ragged_columns() {
        let traj = three_by_two();
        let mut store = VehicleStore::from_state(traj.state(0));
        store.speed.pop();
        assert!(store.snapshot().is_err());
    }
}

// ── MotionEngine ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod engine {
    use tp_core::{Action, VehicleId};

    use super::{three_by_two, EPS};
    use crate::{KinematicIntegrator, MotionEngine, VehicleStore};

    #[test]
    fn integrates_controlled_and_replays_others() {
        let traj = three_by_two();
        let mut store = VehicleStore::from_state(traj.state(0));
        let engine = MotionEngine::new(KinematicIntegrator::HOST_YAW, VehicleId(0));

        engine.apply(&mut store, &traj, 1, Action::new(2.0, 0.0), 0.1);

        // Ego: integrated from (0, 0, 0) at speed 10, resolved at 90°.
        assert!((store.speed(VehicleId(0)) - 10.2).abs() < EPS);
        assert!((store.pose(VehicleId(0)).y - 1.01).abs() < EPS);
        // Others: exactly the row at index 1.
        for i in 1..3 {
            let v = VehicleId(i);
            assert_eq!(store.pose(v), traj.state(1).pose(v));
            assert_eq!(store.speed(v), traj.state(1).speed(v));
        }
    }

    #[test]
    fn controlled_vehicle_is_configurable() {
        let traj = three_by_two();
        let mut store = VehicleStore::from_state(traj.state(0));
        let engine = MotionEngine::new(KinematicIntegrator::default(), VehicleId(2));

        engine.apply(&mut store, &traj, 1, Action::ZERO, 0.1);

        assert_eq!(store.pose(VehicleId(0)), traj.state(1).pose(VehicleId(0)));
        // Vehicle 2 kept its speed under a zero action instead of jumping to 12.5.
        assert_eq!(store.speed(VehicleId(2)), 12.0);
        assert_ne!(store.pose(VehicleId(2)), traj.state(1).pose(VehicleId(2)));
    }
}
