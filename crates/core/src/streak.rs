//! Streak and attempt-number math.

/// Count consecutive complete days starting from day 1.
///
/// `day_complete[0]` is day 1. The walk stops at the first incomplete
/// day, so days complete on {1, 2, 4} yield a streak of 2.
pub fn current_streak(day_complete: &[bool]) -> i32 {
    day_complete.iter().take_while(|&&c| c).count() as i32
}

/// 1-based attempt number derived from the user's lifetime restart count.
pub fn attempt_number(lifetime_restart_count: i32) -> i32 {
    lifetime_restart_count + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_zero_streak() {
        assert_eq!(current_streak(&[]), 0);
    }

    #[test]
    fn streak_stops_at_first_gap() {
        // Complete on days 1, 2, 4 -- streak is 2, not 3.
        assert_eq!(current_streak(&[true, true, false, true]), 2);
    }

    #[test]
    fn incomplete_day_one_means_no_streak() {
        assert_eq!(current_streak(&[false, true, true]), 0);
    }

    #[test]
    fn unbroken_run_counts_every_day() {
        assert_eq!(current_streak(&[true; 75]), 75);
    }

    #[test]
    fn first_attempt_has_number_one() {
        assert_eq!(attempt_number(0), 1);
        assert_eq!(attempt_number(4), 5);
    }
}
