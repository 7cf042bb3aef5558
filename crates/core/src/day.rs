//! Calendar-day arithmetic: day numbers, the editable window, and
//! grace-period expiry.
//!
//! All functions work on calendar dates (`NaiveDate`) with the timezone
//! passed explicitly; [`today_in_zone`] is the single wall-clock entry
//! point, so everything else stays unit-testable without mocking time.

use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::CoreError;

/// Total length of a challenge in days.
pub const CHALLENGE_DAYS: i32 = 75;

/// Number of calendar days after a given day during which its log may
/// still be edited (the day itself plus this many following days).
pub const GRACE_DAYS: i32 = 2;

/// Fallback zone used when a user has no stored timezone preference.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::UTC;

/// Resolve the current calendar date (no time-of-day) in an IANA timezone.
pub fn today_in_zone(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Parse an IANA timezone string (e.g. `"America/New_York"`).
pub fn parse_timezone(tz: &str) -> Result<Tz, CoreError> {
    tz.parse::<Tz>()
        .map_err(|_| CoreError::Validation(format!("Unknown IANA timezone: '{tz}'")))
}

/// 1-based day number of `today` within a challenge starting on
/// `start_date`.
///
/// Whole-calendar-day difference, +1. Calendar-day arithmetic (not
/// elapsed 24-hour periods) means DST transitions never shift a day
/// boundary.
pub fn day_number(start_date: NaiveDate, today: NaiveDate) -> i32 {
    (today - start_date).num_days() as i32 + 1
}

/// A day remains editable through the end of the second calendar day
/// after it.
pub fn is_editable(day: i32, today_day: i32) -> bool {
    today_day <= day + GRACE_DAYS
}

/// The grace period for `day` has expired once `today_day` is more than
/// [`GRACE_DAYS`] past it.
pub fn grace_period_expired(day: i32, today_day: i32) -> bool {
    today_day > day + GRACE_DAYS
}

/// Inclusive `(from, through)` range of day numbers still editable today.
pub fn editable_window(today_day: i32) -> (i32, i32) {
    ((today_day - GRACE_DAYS).max(1), today_day)
}

/// Calendar date on which the given 1-based challenge day falls.
pub fn date_for_day(start_date: NaiveDate, day: i32) -> NaiveDate {
    start_date + Duration::days(i64::from(day - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- day_number -----------------------------------------------------------

    #[test]
    fn start_date_is_day_one() {
        let d = date(2025, 1, 1);
        assert_eq!(day_number(d, d), 1);
    }

    #[test]
    fn fifth_calendar_day_is_day_five() {
        assert_eq!(day_number(date(2025, 1, 1), date(2025, 1, 5)), 5);
    }

    #[test]
    fn day_number_across_month_boundary() {
        assert_eq!(day_number(date(2025, 1, 31), date(2025, 2, 1)), 2);
    }

    #[test]
    fn day_number_across_dst_transition() {
        // US spring-forward happened on 2025-03-09; calendar-day
        // arithmetic must not care.
        assert_eq!(day_number(date(2025, 3, 8), date(2025, 3, 10)), 3);
    }

    #[test]
    fn day_number_before_start_is_non_positive() {
        assert_eq!(day_number(date(2025, 1, 10), date(2025, 1, 9)), 0);
    }

    // -- editable window ------------------------------------------------------

    #[test]
    fn day_is_editable_through_second_following_day() {
        assert!(is_editable(5, 5));
        assert!(is_editable(5, 6));
        assert!(is_editable(5, 7));
        assert!(!is_editable(5, 8));
    }

    #[test]
    fn grace_expires_on_third_following_day() {
        assert!(!grace_period_expired(5, 7));
        assert!(grace_period_expired(5, 8));
    }

    #[test]
    fn editable_window_clamps_to_day_one() {
        assert_eq!(editable_window(1), (1, 1));
        assert_eq!(editable_window(2), (1, 2));
        assert_eq!(editable_window(3), (1, 3));
        assert_eq!(editable_window(10), (8, 10));
    }

    // -- date_for_day ---------------------------------------------------------

    #[test]
    fn date_for_day_one_is_start_date() {
        assert_eq!(date_for_day(date(2025, 1, 1), 1), date(2025, 1, 1));
    }

    #[test]
    fn date_for_final_day() {
        assert_eq!(date_for_day(date(2025, 1, 1), 75), date(2025, 3, 16));
    }

    // -- parse_timezone -------------------------------------------------------

    #[test]
    fn known_timezones_parse() {
        assert!(parse_timezone("UTC").is_ok());
        assert!(parse_timezone("America/New_York").is_ok());
        assert!(parse_timezone("Europe/Warsaw").is_ok());
    }

    #[test]
    fn unknown_timezone_rejected() {
        assert!(parse_timezone("Mars/Olympus_Mons").is_err());
    }
}
