//! Julian Day Number conversion for the proleptic Gregorian calendar.
//!
//! A Julian Day Number (JDN) is a continuous count of days. Both calendars
//! convert through it, so it is the common coordinate for the civil Hijri
//! algorithm and for weekday calculation.
//!
//! For reference, January 1, 2000 is JDN 2451545.

use crate::date::GregorianDate;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year.
///
/// Returns 0 for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// JDN of January 1 of the earliest representable year (`i32::MIN`)
pub const MIN_JDN: i64 = gregorian_to_jdn(&GregorianDate::new(i32::MIN, 1, 1));

/// JDN of December 31 of the latest representable year (`i32::MAX`)
pub const MAX_JDN: i64 = gregorian_to_jdn(&GregorianDate::new(i32::MAX, 12, 31));

/// Convert a Gregorian date to a Julian Day Number.
///
/// Callers are expected to pass validated dates; out-of-range fields produce
/// a number but not a meaningful one. No input overflows.
pub const fn gregorian_to_jdn(date: &GregorianDate) -> i64 {
    let year = date.year as i64;
    let month = date.month as i64;
    let day = date.day as i64;

    // Shift the year to start in March so February's length only affects the tail
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Convert a Julian Day Number back to a Gregorian date.
///
/// Day numbers outside `MIN_JDN..=MAX_JDN` saturate to the first or last
/// representable date.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let a = jdn.clamp(MIN_JDN, MAX_JDN) + 32044;
    let b = (4 * a + 3).div_euclid(146097);
    let c = a - (146097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);

    GregorianDate::new(
        year.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
        month.clamp(1, 12) as u32,
        day.clamp(1, 31) as u32,
    )
}
