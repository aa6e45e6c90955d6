//! Day index calculation
//!
//! The puzzle boundary is midnight in a fixed reference offset (UTC-05:00),
//! chosen once per deployment and never derived from the host clock's zone.
//! Every instant inside the same reference-zone civil day maps to the same
//! index, so all players roll over together.

use time::{Date, Month, OffsetDateTime, UtcOffset};

/// Fixed reference offset for the daily boundary
///
/// Deliberately a constant offset, not a named time zone: DST would move the
/// puzzle boundary for some players and not others.
pub const BOUNDARY_OFFSET: UtcOffset = match UtcOffset::from_hms(-5, 0, 0) {
    Ok(offset) => offset,
    Err(_) => panic!("boundary offset is a valid constant"),
};

/// Civil date of puzzle 001 in the reference zone
pub const EPOCH: Date = match Date::from_calendar_date(2025, Month::October, 17) {
    Ok(date) => date,
    Err(_) => panic!("epoch date is a valid constant"),
};

/// Compute the day index for an instant
///
/// Converts the instant to the reference offset, truncates to a civil date,
/// and counts whole days since the epoch. `test_offset` is the volatile
/// skip-day offset; it is process state only and must never be persisted.
///
/// # Examples
/// ```
/// use bossdle::daily::day_index;
/// use time::macros::datetime;
///
/// // Both ends of the epoch day in the reference zone map to index 0
/// assert_eq!(day_index(datetime!(2025-10-17 00:00 -5), 0), 0);
/// assert_eq!(day_index(datetime!(2025-10-17 23:59 -5), 0), 0);
/// assert_eq!(day_index(datetime!(2025-10-18 00:00 -5), 0), 1);
/// ```
#[must_use]
pub fn day_index(now: OffsetDateTime, test_offset: i64) -> i64 {
    let civil = now.to_offset(BOUNDARY_OFFSET).date();
    (civil - EPOCH).whole_days() + test_offset
}

/// Human-facing puzzle ordinal (`Bossdle 001` is day index 0)
#[inline]
#[must_use]
pub const fn puzzle_number(day_index: i64) -> i64 {
    day_index + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn same_civil_day_same_index() {
        let morning = datetime!(2025-11-02 06:30 -5);
        let night = datetime!(2025-11-02 23:59:59 -5);
        assert_eq!(day_index(morning, 0), day_index(night, 0));
    }

    #[test]
    fn crossing_reference_midnight_increments_by_one() {
        let before = datetime!(2025-11-02 23:59:59 -5);
        let after = datetime!(2025-11-03 00:00:00 -5);
        assert_eq!(day_index(after, 0), day_index(before, 0) + 1);
    }

    #[test]
    fn boundary_is_utc_minus_five() {
        // 04:59 UTC is still the previous reference-zone day; 05:00 is not
        let before = datetime!(2025-11-03 04:59 UTC);
        let after = datetime!(2025-11-03 05:00 UTC);
        assert_eq!(day_index(after, 0), day_index(before, 0) + 1);
    }

    #[test]
    fn local_offset_does_not_change_index() {
        // The same instant expressed in three different zones
        let utc = datetime!(2025-10-20 12:00 UTC);
        let tokyo = datetime!(2025-10-20 21:00 +9);
        let pacific = datetime!(2025-10-20 04:00 -8);
        assert_eq!(day_index(utc, 0), day_index(tokyo, 0));
        assert_eq!(day_index(utc, 0), day_index(pacific, 0));
    }

    #[test]
    fn epoch_day_is_zero() {
        assert_eq!(day_index(datetime!(2025-10-17 12:00 -5), 0), 0);
        assert_eq!(puzzle_number(0), 1);
    }

    #[test]
    fn test_offset_shifts_index() {
        let now = datetime!(2025-10-20 12:00 -5);
        assert_eq!(day_index(now, 0), 3);
        assert_eq!(day_index(now, 2), 5);
    }

    #[test]
    fn before_epoch_is_negative() {
        assert_eq!(day_index(datetime!(2025-10-16 12:00 -5), 0), -1);
    }
}
