//! Unit tests for gw-schedule.

use gw_agent::AgentState;
use gw_core::{Direction, GridConfig, GridError, SimRng};

use crate::{PhaseWaits, ScheduleError, StoplightSchedule, stoplight_wait, stoplight_waits};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 2×2 blocks, stoplight base 10 → cycle 30, 3×3 intersections.
fn grid() -> GridConfig {
    GridConfig::new(2, 2, 5, 5, 10, 2).unwrap()
}

/// Walker facing intersection (1, 1) at time `t`.
fn agent_at(t: u64) -> AgentState {
    AgentState { x_right: true, y_top: true, cur_t: t, ..AgentState::new() }
}

// ── StoplightSchedule ─────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_tests {
    use super::*;

    #[test]
    fn random_covers_every_intersection() {
        let g = grid();
        let s = StoplightSchedule::random(&g, &mut SimRng::new(1)).unwrap();
        assert_eq!(s.dims(), (3, 3));
        assert_eq!(s.iter().count(), 9);
        assert_eq!(s.cycle_length(), 30);
    }

    #[test]
    fn random_thresholds_in_range() {
        let g = GridConfig::new(20, 20, 5, 5, 10, 2).unwrap();
        let s = StoplightSchedule::random(&g, &mut SimRng::new(99)).unwrap();
        for (_, t) in s.iter() {
            assert!((10..=19).contains(&t), "threshold {t} out of range");
        }
    }

    #[test]
    fn random_is_reproducible() {
        let g = grid();
        let a = StoplightSchedule::random(&g, &mut SimRng::new(5)).unwrap();
        let b = StoplightSchedule::random(&g, &mut SimRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn stoplight_time_one_is_constant() {
        let g = GridConfig::new(3, 3, 1, 1, 1, 1).unwrap();
        let s = StoplightSchedule::random(&g, &mut SimRng::new(0)).unwrap();
        assert!(s.iter().all(|(_, t)| t == 1));
    }

    #[test]
    fn large_stoplight_time_does_not_overflow() {
        let g = GridConfig::new(1, 1, 5, 5, 3_000_000_000, 2).unwrap();
        let s = StoplightSchedule::random(&g, &mut SimRng::new(1)).unwrap();
        assert_eq!(s.cycle_length(), 9_000_000_000);
        for (_, t) in s.iter() {
            assert!((3_000_000_000..6_000_000_000).contains(&t), "threshold {t} out of range");
        }
    }

    #[test]
    fn unvalidated_grid_is_rejected() {
        let huge = GridConfig { blocks_wide: u32::MAX, blocks_high: u32::MAX, ..GridConfig::CLASSIC };
        let err = StoplightSchedule::random(&huge, &mut SimRng::new(1)).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Config(GridError::GridTooLarge { blocks_wide: u32::MAX, blocks_high: u32::MAX })
        );

        let zero = GridConfig { stoplight_time: 0, ..GridConfig::CLASSIC };
        assert_eq!(
            StoplightSchedule::uniform(&zero, 0),
            Err(ScheduleError::Config(GridError::InvalidConfiguration { parameter: "stoplight_time" }))
        );
    }

    #[test]
    fn from_fn_indexes_by_x_then_y() {
        let s = StoplightSchedule::from_fn(&grid(), |ix, iy| (ix * 10 + iy) as u64).unwrap();
        assert_eq!(s.threshold(0, 0), Some(0));
        assert_eq!(s.threshold(2, 1), Some(21));
        assert_eq!(s.threshold(1, 2), Some(12));
        assert_eq!(s.threshold(3, 0), None);
        assert_eq!(s.threshold(0, 3), None);
    }

    #[test]
    fn threshold_must_fit_cycle() {
        let err = StoplightSchedule::uniform(&grid(), 30).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::ThresholdOutOfCycle { ix: 0, iy: 0, threshold: 30, cycle_length: 30 }
        );
        assert!(StoplightSchedule::uniform(&grid(), 29).is_ok());
    }

    #[test]
    fn check_fits_rejects_other_grids() {
        let s = StoplightSchedule::uniform(&grid(), 12).unwrap();
        assert!(s.check_fits(&grid()).is_ok());

        let wider = GridConfig::new(3, 2, 5, 5, 10, 2).unwrap();
        assert_eq!(
            s.check_fits(&wider),
            Err(ScheduleError::DimensionMismatch { expected: (4, 3), got: (3, 3) })
        );

        let slower = GridConfig::new(2, 2, 5, 5, 11, 2).unwrap();
        assert_eq!(
            s.check_fits(&slower),
            Err(ScheduleError::CycleMismatch { expected: 33, got: 30 })
        );
    }
}

// ── Wait model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wait_tests {
    use super::*;

    fn schedule(threshold: u64) -> StoplightSchedule {
        StoplightSchedule::uniform(&grid(), threshold).unwrap()
    }

    #[test]
    fn top_is_green_before_threshold() {
        let s = schedule(12);
        assert_eq!(stoplight_wait(&s, &agent_at(0), Direction::Top).unwrap(), 0);
        assert_eq!(stoplight_wait(&s, &agent_at(11), Direction::Top).unwrap(), 0);
    }

    #[test]
    fn top_waits_for_cycle_wrap_after_threshold() {
        let s = schedule(12);
        assert_eq!(stoplight_wait(&s, &agent_at(13), Direction::Top).unwrap(), 17);
        assert_eq!(stoplight_wait(&s, &agent_at(29), Direction::Top).unwrap(), 1);
    }

    #[test]
    fn right_waits_for_threshold() {
        let s = schedule(12);
        assert_eq!(stoplight_wait(&s, &agent_at(0), Direction::Right).unwrap(), 12);
        assert_eq!(stoplight_wait(&s, &agent_at(10), Direction::Right).unwrap(), 2);
        assert_eq!(stoplight_wait(&s, &agent_at(13), Direction::Right).unwrap(), 0);
    }

    #[test]
    fn phase_wraps_with_shared_cycle() {
        let s = schedule(12);
        // 70 % 30 = 10
        assert_eq!(stoplight_wait(&s, &agent_at(70), Direction::Right).unwrap(), 2);
        // 75 % 30 = 15
        assert_eq!(stoplight_wait(&s, &agent_at(75), Direction::Top).unwrap(), 15);
    }

    #[test]
    fn boundary_tick_is_green_both_ways() {
        let s = schedule(12);
        let a = agent_at(42); // 42 % 30 = 12
        assert_eq!(stoplight_wait(&s, &a, Direction::Top).unwrap(), 0);
        assert_eq!(stoplight_wait(&s, &a, Direction::Right).unwrap(), 0);
    }

    #[test]
    fn cycle_is_global_not_per_intersection() {
        // Threshold 19 would give a 57-long cycle if it were per-light; the
        // phase must still be taken modulo 30.
        let s = schedule(19);
        assert_eq!(stoplight_wait(&s, &agent_at(35), Direction::Right).unwrap(), 14);
        assert_eq!(stoplight_wait(&s, &agent_at(50), Direction::Top).unwrap(), 10);
    }

    #[test]
    fn consults_the_faced_intersection() {
        let s = StoplightSchedule::from_fn(&grid(), |ix, iy| if (ix, iy) == (2, 1) { 20 } else { 10 })
            .unwrap();
        let mut a = AgentState {
            current_x: 1,
            x_right:   true,
            y_top:     true,
            cur_t:     15,
            ..AgentState::new()
        };
        assert_eq!(a.intersection(), (2, 1));
        assert_eq!(stoplight_wait(&s, &a, Direction::Right).unwrap(), 5);

        a.x_right = false; // now facing (1, 1), threshold 10 < phase 15
        assert_eq!(stoplight_wait(&s, &a, Direction::Right).unwrap(), 0);
    }

    #[test]
    fn backward_directions_are_invalid() {
        let s = schedule(12);
        for dir in [Direction::Bottom, Direction::Left] {
            assert_eq!(
                stoplight_wait(&s, &agent_at(0), dir),
                Err(ScheduleError::InvalidDirection(dir))
            );
        }
    }

    #[test]
    fn out_of_lattice_is_an_error() {
        let s = schedule(12);
        let a = AgentState { current_x: 2, x_right: true, ..AgentState::new() };
        assert_eq!(
            stoplight_wait(&s, &a, Direction::Right),
            Err(ScheduleError::IntersectionOutOfRange { ix: 3, iy: 0 })
        );
    }

    #[test]
    fn wait_always_below_cycle() {
        let g = GridConfig::new(4, 4, 5, 5, 10, 2).unwrap();
        let s = StoplightSchedule::random(&g, &mut SimRng::new(17)).unwrap();
        for t in 0..120 {
            for (x, y) in [(0, 0), (1, 2), (3, 3)] {
                let a = AgentState { current_x: x, current_y: y, x_right: true, y_top: true, cur_t: t, ..AgentState::new() };
                for dir in [Direction::Top, Direction::Right] {
                    let w = stoplight_wait(&s, &a, dir).unwrap();
                    assert!(w < g.cycle_length(), "wait {w} at t={t}");
                }
            }
        }
    }

    #[test]
    fn complementary_waits() {
        let s = schedule(12);
        for t in 0..60 {
            let a = agent_at(t);
            let PhaseWaits { top, right } = stoplight_waits(&s, &a).unwrap();
            let phase = t % 30;
            if phase <= 12 {
                assert_eq!(top, 0);
                assert_eq!(right, 12 - phase);
            } else {
                assert_eq!(top, 30 - phase);
                assert_eq!(right, 0);
            }
            if phase == 12 {
                assert_eq!((top, right), (0, 0));
            } else {
                assert!((top == 0) != (right == 0), "exactly one wait nonzero at t={t}");
            }
        }
    }
}
