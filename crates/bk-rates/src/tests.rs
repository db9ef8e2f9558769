//! Unit tests for bk-rates.

use bk_core::format_duration;

use crate::{PromoteSample, PromotionRate, RateError, RateTable, TrainSample};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Level 9 training sample measured in game: 712 troops in 1d 07:46:18.
fn level9_sample() -> TrainSample {
    TrainSample::new(9, 712, "1d 07:46:18")
}

// ── RateTable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rate_table {
    use super::*;

    #[test]
    fn sampled_level_is_exact() {
        let table = RateTable::derive(&TrainSample::new(9, 723, "1d 07:45:09"), 9).unwrap();
        assert_eq!(table.rate(9), Some(114_309.0 / 723.0));
    }

    #[test]
    fn covers_one_through_max_level() {
        let table = RateTable::derive(&TrainSample::new(4, 100, "01:00:00"), 7).unwrap();
        assert_eq!(table.max_level(), 7);
        assert!(table.rate(0).is_none());
        assert!(table.rate(8).is_none());
        let levels: Vec<u32> = table.iter().map(|(l, _)| l).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn sample_above_max_producer_level_still_covered() {
        let table = RateTable::derive(&level9_sample(), 6).unwrap();
        assert_eq!(table.max_level(), 9);
        assert!(table.rate(9).is_some());
    }

    #[test]
    fn adjacent_levels_follow_extrapolation_law() {
        let table = RateTable::derive(&TrainSample::new(5, 561, "19:03:47"), 10).unwrap();
        for level in 1..10 {
            let lo = table.rate(level).unwrap();
            let hi = table.rate(level + 1).unwrap();
            let expected = (level + 2) as f64 / (level + 1) as f64;
            assert!((hi / lo - expected).abs() < 1e-12, "level {level}: {}", hi / lo);
        }
    }

    #[test]
    fn reproduces_in_game_measurements() {
        // Extrapolated downward from level 9; these match the game's own timers.
        let table = RateTable::derive(&level9_sample(), 9).unwrap();
        assert_eq!(format_duration(table.train_cost(8, 712).unwrap()), "1d 04:35:40");
        assert_eq!(format_duration(table.train_cost(6, 712).unwrap()), "0d 22:14:25");
        assert_eq!(format_duration(table.train_cost(5, 712).unwrap()), "0d 19:03:47");
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = RateTable::derive(&TrainSample::new(9, 0, "1d 07:45:09"), 9).unwrap_err();
        assert!(matches!(err, RateError::Config(_)));
    }

    #[test]
    fn out_of_range_level_rejected() {
        assert!(matches!(
            RateTable::derive(&TrainSample::new(0, 10, "01:00:00"), 9),
            Err(RateError::Config(_))
        ));
        assert!(matches!(
            RateTable::derive(&TrainSample::new(11, 10, "01:00:00"), 9),
            Err(RateError::Config(_))
        ));
    }

    #[test]
    fn malformed_duration_surfaces_format_error() {
        let err = RateTable::derive(&TrainSample::new(9, 10, "tomorrow"), 9).unwrap_err();
        assert!(matches!(err, RateError::Format(_)));
    }
}

// ── PromotionRate ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod promotion {
    use super::*;

    #[test]
    fn one_level_reproduces_sample() {
        let rate = PromotionRate::derive(&PromoteSample::new(723, "03:10:31")).unwrap();
        assert_eq!(format_duration(rate.promote_cost(723, 1)), "0d 03:10:31");
    }

    #[test]
    fn linear_in_count_and_levels() {
        let rate = PromotionRate::derive(&PromoteSample::new(10, "00:01:40")).unwrap();
        assert_eq!(rate.secs_per_unit_level(), 10.0);
        assert_eq!(rate.promote_cost(5, 3), 150.0);
        assert_eq!(rate.promote_cost(0, 3), 0.0);
    }

    #[test]
    fn zero_capacity_rejected() {
        assert!(matches!(
            PromotionRate::derive(&PromoteSample::new(0, "03:10:31")),
            Err(RateError::Config(_))
        ));
    }
}
