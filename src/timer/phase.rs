//! Phase sequencing.
//!
//! Pure transition table: given where the session is, decide what comes
//! after the current phase completes.

use crate::types::Phase;

/// Position of the session within its sets and cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub phase: Phase,
    pub current_set: u32,
    pub total_sets: u32,
    pub current_cycle: u32,
    pub total_cycles: u32,
}

/// Result of completing a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Move on to `phase` at the given set and cycle.
    Next {
        phase: Phase,
        set: u32,
        cycle: u32,
    },
    /// The last rest of the last cycle finished.
    Complete,
}

/// Computes the transition that follows the completion of `progress.phase`.
///
/// The duration of the next phase is read from the settings by the caller
/// via [`crate::types::TimerSettings::seconds_for`].
pub fn next_phase(progress: &Progress) -> Transition {
    let Progress {
        phase,
        current_set: set,
        total_sets,
        current_cycle: cycle,
        total_cycles,
    } = *progress;

    match phase {
        Phase::Prepare => Transition::Next {
            phase: Phase::Warmup,
            set,
            cycle,
        },
        Phase::Warmup | Phase::CycleRest => Transition::Next {
            phase: Phase::Work,
            set,
            cycle,
        },
        Phase::Work => Transition::Next {
            phase: Phase::Rest,
            set,
            cycle,
        },
        Phase::Rest if set < total_sets => Transition::Next {
            phase: Phase::Work,
            set: set + 1,
            cycle,
        },
        Phase::Rest if cycle < total_cycles => Transition::Next {
            phase: Phase::CycleRest,
            set: 1,
            cycle: cycle + 1,
        },
        Phase::Rest => Transition::Complete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(phase: Phase, set: u32, cycle: u32) -> Progress {
        Progress {
            phase,
            current_set: set,
            total_sets: 2,
            current_cycle: cycle,
            total_cycles: 2,
        }
    }

    #[test]
    fn test_linear_phases() {
        assert_eq!(
            next_phase(&progress(Phase::Prepare, 1, 1)),
            Transition::Next {
                phase: Phase::Warmup,
                set: 1,
                cycle: 1
            }
        );
        assert_eq!(
            next_phase(&progress(Phase::Warmup, 1, 1)),
            Transition::Next {
                phase: Phase::Work,
                set: 1,
                cycle: 1
            }
        );
        assert_eq!(
            next_phase(&progress(Phase::Work, 2, 1)),
            Transition::Next {
                phase: Phase::Rest,
                set: 2,
                cycle: 1
            }
        );
        assert_eq!(
            next_phase(&progress(Phase::CycleRest, 1, 2)),
            Transition::Next {
                phase: Phase::Work,
                set: 1,
                cycle: 2
            }
        );
    }

    #[test]
    fn test_rest_advances_set() {
        assert_eq!(
            next_phase(&progress(Phase::Rest, 1, 1)),
            Transition::Next {
                phase: Phase::Work,
                set: 2,
                cycle: 1
            }
        );
    }

    #[test]
    fn test_last_rest_of_cycle_goes_to_cycle_rest() {
        assert_eq!(
            next_phase(&progress(Phase::Rest, 2, 1)),
            Transition::Next {
                phase: Phase::CycleRest,
                set: 1,
                cycle: 2
            }
        );
    }

    #[test]
    fn test_last_rest_of_session_completes() {
        assert_eq!(next_phase(&progress(Phase::Rest, 2, 2)), Transition::Complete);
    }

    #[test]
    fn test_zero_totals_do_not_panic() {
        let degenerate = Progress {
            phase: Phase::Rest,
            current_set: 1,
            total_sets: 0,
            current_cycle: 1,
            total_cycles: 0,
        };
        assert_eq!(next_phase(&degenerate), Transition::Complete);
    }
}
