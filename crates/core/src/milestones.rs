//! Fixed milestone day set announced on the explicit-advance path.

/// Days that earn a milestone feed event when completed.
pub const MILESTONE_DAYS: &[i32] = &[7, 14, 21, 30, 45, 60];

/// Whether completing `day` crosses a milestone.
pub fn is_milestone(day: i32) -> bool {
    MILESTONE_DAYS.contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_days_recognized() {
        for day in [7, 14, 21, 30, 45, 60] {
            assert!(is_milestone(day), "day {day} should be a milestone");
        }
    }

    #[test]
    fn other_days_are_not_milestones() {
        for day in [1, 6, 8, 50, 74, 75] {
            assert!(!is_milestone(day), "day {day} should not be a milestone");
        }
    }
}
