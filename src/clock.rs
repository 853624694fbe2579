//! Queries relative to the local system date (requires the `chrono` feature).
//!
//! Each function reads the clock once. The `_from` variants take the base
//! date explicitly.

use chrono::{Datelike, Days, Local, NaiveDate};

use crate::convert::convert_gregorian_to_hijri;
use crate::date::{GregorianDate, HijriDate};

/// One day of a rolling window, in both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEntry {
    pub gregorian: GregorianDate,
    pub hijri: HijriDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn from_naive(date: NaiveDate) -> GregorianDate {
    GregorianDate::new(date.year(), date.month(), date.day())
}

/// Shift `base` by `days`, saturating at chrono's supported range.
fn shift(base: NaiveDate, days: i64) -> NaiveDate {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        base.checked_add_days(delta).unwrap_or(NaiveDate::MAX)
    } else {
        base.checked_sub_days(delta).unwrap_or(NaiveDate::MIN)
    }
}

/// Today's local date.
pub fn today_gregorian() -> GregorianDate {
    from_naive(local_today())
}

/// Today's local date converted to Hijri.
pub fn today_hijri() -> HijriDate {
    convert_gregorian_to_hijri(&today_gregorian())
}

/// The Hijri date `days_offset` days from today (negative for the past).
pub fn hijri_date_with_offset(days_offset: i64) -> HijriDate {
    hijri_date_with_offset_from(local_today(), days_offset)
}

/// The Hijri date `days_offset` days from `base`.
///
/// Offsets past chrono's date range stop at its first or last day.
pub fn hijri_date_with_offset_from(base: NaiveDate, days_offset: i64) -> HijriDate {
    convert_gregorian_to_hijri(&from_naive(shift(base, days_offset)))
}

/// `count` consecutive days starting today.
pub fn upcoming_days(count: usize) -> Vec<DayEntry> {
    upcoming_days_from(local_today(), count)
}

/// `count` consecutive days starting at `base`.
pub fn upcoming_days_from(base: NaiveDate, count: usize) -> Vec<DayEntry> {
    (0..count)
        .map(|offset| {
            let gregorian = from_naive(shift(base, offset as i64));
            DayEntry {
                gregorian,
                hijri: convert_gregorian_to_hijri(&gregorian),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_both_directions() {
        let base = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(shift(base, 1), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(shift(base, -28), NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        assert_eq!(shift(base, 0), base);
    }

    #[test]
    fn test_shift_saturates() {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(shift(base, i64::MAX), NaiveDate::MAX);
        assert_eq!(shift(base, i64::MIN), NaiveDate::MIN);
    }
}
