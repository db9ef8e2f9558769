//! Unit tests for bk-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ActivityId, ProducerId};

    #[test]
    fn index_roundtrip() {
        let id = ProducerId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(ProducerId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ProducerId(0) < ProducerId(1));
        assert!(ActivityId(10) > ActivityId(9));
    }

    #[test]
    fn display() {
        assert_eq!(ProducerId(7).to_string(), "ProducerId(7)");
    }
}

#[cfg(test)]
mod codec {
    use crate::{CoreError, format_duration, parse_duration};

    #[test]
    fn parses_with_day_component() {
        assert_eq!(parse_duration("1d 07:45:09").unwrap(), 86_400 + 7 * 3_600 + 45 * 60 + 9);
    }

    #[test]
    fn parses_without_day_component() {
        assert_eq!(parse_duration("03:10:31").unwrap(), 3 * 3_600 + 10 * 60 + 31);
        assert_eq!(parse_duration("3:10:31").unwrap(), 3 * 3_600 + 10 * 60 + 31);
    }

    #[test]
    fn tolerates_surrounding_and_missing_whitespace() {
        assert_eq!(parse_duration("  2d 00:00:01 ").unwrap(), 2 * 86_400 + 1);
        assert_eq!(parse_duration("2d00:00:01").unwrap(), 2 * 86_400 + 1);
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "abc", "07:45", "1d", "d 07:45:09", "123:00:00", "1:2:03", "01:02:03:04", "01:02:03x"] {
            let err = parse_duration(bad).unwrap_err();
            assert!(matches!(err, CoreError::Format { .. }), "{bad:?} should fail");
        }
    }

    #[test]
    fn format_always_emits_days() {
        assert_eq!(format_duration(0.0), "0d 00:00:00");
        assert_eq!(format_duration(59.0), "0d 00:00:59");
        assert_eq!(format_duration(3_600.0), "0d 01:00:00");
        assert_eq!(format_duration(86_400.0), "1d 00:00:00");
        assert_eq!(format_duration(114_309.0), "1d 07:45:09");
    }

    #[test]
    fn format_rounds_to_nearest_second() {
        assert_eq!(format_duration(100_000.7), "1d 03:46:41");
        assert_eq!(format_duration(0.4), "0d 00:00:00");
    }

    #[test]
    fn format_clamps_negative_and_nan() {
        assert_eq!(format_duration(-5.0), "0d 00:00:00");
        assert_eq!(format_duration(f64::NAN), "0d 00:00:00");
    }

    #[test]
    fn parse_recovers_rounded_input() {
        for s in [0.0, 59.0, 3_600.0, 86_400.0, 100_000.7] {
            let text = format_duration(s);
            assert_eq!(parse_duration(&text).unwrap(), s.round() as u64, "{text}");
        }
    }
}

#[cfg(test)]
mod sim_time {
    use crate::SimTime;

    #[test]
    fn total_ordering() {
        assert!(SimTime(1.0) < SimTime(1.5));
        assert_eq!(SimTime(2.0), SimTime(2.0));
        assert_eq!(SimTime(3.0).max(SimTime(-1.0)), SimTime(3.0));
    }

    #[test]
    fn arithmetic() {
        let t = SimTime::ZERO + 90.5;
        assert_eq!(t.secs(), 90.5);
        assert_eq!(t - SimTime(0.5), 90.0);
    }

    #[test]
    fn unix_offset_rounds() {
        assert_eq!(SimTime(10.6).unix_secs(1_000), 1_011);
    }

    #[test]
    fn display_uses_codec() {
        assert_eq!(SimTime(3_661.0).to_string(), "0d 01:01:01");
    }
}
