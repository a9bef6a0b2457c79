//! Manual next/previous navigation.
//!
//! Navigation moves the cycle pointer and only touches the set when the
//! cycle wraps. The phase is left alone.

/// Set/cycle pointer of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub cycle: u32,
    pub set: u32,
}

impl Position {
    pub fn new(cycle: u32, set: u32) -> Self {
        Self { cycle, set }
    }
}

/// Steps one cycle forward, wrapping to the first cycle and the next set.
pub fn next(pos: Position, total_cycles: u32, total_sets: u32) -> Position {
    if pos.cycle < total_cycles {
        return Position::new(pos.cycle + 1, pos.set);
    }
    let set = if pos.set < total_sets { pos.set + 1 } else { 1 };
    Position::new(1, set)
}

/// Steps one cycle back, wrapping to the last cycle and the previous set.
pub fn previous(pos: Position, total_cycles: u32, total_sets: u32) -> Position {
    if pos.cycle > 1 {
        return Position::new(pos.cycle - 1, pos.set);
    }
    let set = if pos.set > 1 { pos.set - 1 } else { total_sets };
    Position::new(total_cycles, set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_advances_cycle() {
        assert_eq!(next(Position::new(1, 2), 3, 4), Position::new(2, 2));
    }

    #[test]
    fn test_next_wraps_cycle_and_advances_set() {
        assert_eq!(next(Position::new(1, 1), 1, 3), Position::new(1, 2));
        assert_eq!(next(Position::new(3, 2), 3, 4), Position::new(1, 3));
    }

    #[test]
    fn test_next_wraps_set_at_end() {
        assert_eq!(next(Position::new(1, 3), 1, 3), Position::new(1, 1));
    }

    #[test]
    fn test_previous_steps_cycle_back() {
        assert_eq!(previous(Position::new(3, 2), 3, 4), Position::new(2, 2));
    }

    #[test]
    fn test_previous_wraps_to_last_cycle() {
        assert_eq!(previous(Position::new(1, 3), 3, 4), Position::new(3, 2));
        assert_eq!(previous(Position::new(1, 1), 3, 4), Position::new(3, 4));
    }

    #[test]
    fn test_previous_inverts_next() {
        for total_cycles in 1..=4 {
            for total_sets in 1..=4 {
                for cycle in 1..=total_cycles {
                    for set in 1..=total_sets {
                        let start = Position::new(cycle, set);
                        let moved = next(start, total_cycles, total_sets);
                        assert_eq!(
                            previous(moved, total_cycles, total_sets),
                            start,
                            "cycles={} sets={} start={:?}",
                            total_cycles,
                            total_sets,
                            start
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_totals_do_not_panic() {
        assert_eq!(next(Position::new(1, 1), 0, 0), Position::new(1, 1));
        assert_eq!(previous(Position::new(1, 1), 0, 0), Position::new(0, 0));
    }
}
