//! Civil (tabular) Hijri calendar
//!
//! This module implements the arithmetic Islamic calendar: months alternate
//! between 30 and 29 days, and 11 years in every 30-year cycle add a 30th day
//! to Dhu al-Hijjah. It is deterministic and total, which makes it the
//! fallback when the astronomical converter cannot be trusted.
//!
//! ## Accuracy
//!
//! The tabular calendar approximates the lunar cycle and may differ by ±1 day
//! from observational or Umm al-Qura dates. The two functions below are each
//! other's exact inverse, which is the property the fallback relies on.

use crate::date::HijriDate;

/// Julian Day Number of 1 Muharram 1 AH in the civil calendar (July 18, 622 CE proleptic Gregorian)
pub const CIVIL_EPOCH: i64 = 1948439;

/// Days in one 30-year cycle of the tabular calendar
const CYCLE_DAYS: i64 = 10631;

/// Integer ceiling division for a positive divisor.
const fn ceil_div(a: i64, b: i64) -> i64 {
    -((-a).div_euclid(b))
}

/// Returns true if the year has 355 days in the civil calendar
pub const fn is_civil_leap_year(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

/// Returns the number of days in a civil Hijri month.
///
/// Returns 0 for a month outside 1-12.
pub const fn civil_month_length(year: i32, month: u32) -> u32 {
    match month {
        12 if is_civil_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// JDN of 1 Muharram of the earliest representable year (`i32::MIN`)
pub const CIVIL_MIN_JDN: i64 = hijri_to_jdn_civil(&HijriDate::new(i32::MIN, 1, 1));

/// JDN of the last day of the latest representable year (`i32::MAX`)
pub const CIVIL_MAX_JDN: i64 = hijri_to_jdn_civil(&HijriDate::new(i32::MAX, 12, 1))
    + civil_month_length(i32::MAX, 12) as i64
    - 1;

/// Convert a Hijri date to a Julian Day Number using the civil calendar.
///
/// No input overflows; out-of-range fields produce a number but not a
/// meaningful one.
pub const fn hijri_to_jdn_civil(date: &HijriDate) -> i64 {
    let year = date.year as i64;
    let month = date.month as i64;
    let day = date.day as i64;

    // ceil(29.5 * (month - 1)) lays out alternating 30/29 day months
    let month_offset = ceil_div(59 * (month - 1), 2);
    let year_offset = (year - 1) * 354 + (3 + 11 * year).div_euclid(30);

    day + month_offset + year_offset + CIVIL_EPOCH - 1
}

/// Convert a Julian Day Number to a Hijri date using the civil calendar.
///
/// Day numbers outside `CIVIL_MIN_JDN..=CIVIL_MAX_JDN` saturate to the first
/// or last representable date.
pub fn jdn_to_hijri_civil(jdn: i64) -> HijriDate {
    let jdn = jdn.clamp(CIVIL_MIN_JDN, CIVIL_MAX_JDN);
    let year = (30 * (jdn - CIVIL_EPOCH) + 10646).div_euclid(CYCLE_DAYS);
    let year = year.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    let year_start = hijri_to_jdn_civil(&HijriDate::new(year, 1, 1));
    let month = ceil_div(2 * (jdn - (29 + year_start)), 59) + 1;
    let month = month.clamp(1, 12) as u32;

    let month_start = hijri_to_jdn_civil(&HijriDate::new(year, month, 1));
    let day = jdn - month_start + 1;

    HijriDate::new(year, month, day.clamp(1, 30) as u32)
}
