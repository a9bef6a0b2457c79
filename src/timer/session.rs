//! Planned session length.

use crate::types::{Phase, TimerSettings};

use super::duration::DurationError;

/// Total planned session time in seconds.
///
/// The last cycle has no trailing cycle rest, so one cycle rest is taken off
/// the sum. The result is signed: zero cycles yields
/// `prepare + warm_up - cycle_rest`, which may be negative.
pub fn total_session_seconds(settings: &TimerSettings) -> Result<i64, DurationError> {
    let prepare = i64::from(settings.seconds_for(Phase::Prepare)?);
    let warm_up = i64::from(settings.seconds_for(Phase::Warmup)?);
    let work = i64::from(settings.seconds_for(Phase::Work)?);
    let rest = i64::from(settings.seconds_for(Phase::Rest)?);
    let cycle_rest = i64::from(settings.seconds_for(Phase::CycleRest)?);

    let sets = i64::from(settings.sets);
    let cycles = i64::from(settings.cycles);

    (work + rest)
        .checked_mul(sets)
        .and_then(|sets_time| sets_time.checked_add(cycle_rest))
        .and_then(|per_cycle| per_cycle.checked_mul(cycles))
        .and_then(|cycles_time| cycles_time.checked_add(prepare + warm_up))
        .and_then(|total| total.checked_sub(cycle_rest))
        .ok_or(DurationError::SessionOverflow {
            sets: settings.sets,
            cycles: settings.cycles,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        // 3 + 300 + ((30 + 20) * 3 + 30) * 5 - 30
        assert_eq!(total_session_seconds(&TimerSettings::default()), Ok(1173));
    }

    #[test]
    fn test_single_cycle_has_no_cycle_rest() {
        let settings = TimerSettings::default()
            .with_prepare("00:10")
            .with_warm_up("01:00")
            .with_work("00:40")
            .with_rest("00:20")
            .with_cycle_rest("02:00")
            .with_sets(2)
            .with_cycles(1);
        assert_eq!(total_session_seconds(&settings), Ok(10 + 60 + 120));
    }

    #[test]
    fn test_zero_cycles_can_go_negative() {
        let settings = TimerSettings::default()
            .with_prepare("00:03")
            .with_warm_up("00:00")
            .with_cycle_rest("00:30")
            .with_cycles(0);
        assert_eq!(total_session_seconds(&settings), Ok(-27));
    }

    #[test]
    fn test_is_deterministic() {
        let settings = TimerSettings::default().with_sets(7).with_cycles(2);
        assert_eq!(
            total_session_seconds(&settings),
            total_session_seconds(&settings)
        );
    }

    #[test]
    fn test_huge_counts_report_overflow() {
        let settings = TimerSettings::default()
            .with_work("71582788:15")
            .with_rest("00:00")
            .with_sets(u32::MAX)
            .with_cycles(u32::MAX);
        assert_eq!(
            total_session_seconds(&settings),
            Err(DurationError::SessionOverflow {
                sets: u32::MAX,
                cycles: u32::MAX
            })
        );
    }

    #[test]
    fn test_max_sets_single_cycle_still_fits() {
        let settings = TimerSettings::default()
            .with_prepare("00:00")
            .with_warm_up("00:00")
            .with_work("00:01")
            .with_rest("00:00")
            .with_cycle_rest("00:00")
            .with_sets(u32::MAX)
            .with_cycles(1);
        assert_eq!(total_session_seconds(&settings), Ok(i64::from(u32::MAX)));
    }

    #[test]
    fn test_malformed_duration() {
        let settings = TimerSettings::default().with_work("thirty");
        assert!(total_session_seconds(&settings).is_err());
    }
}
