//! Range and plausibility checks.
//!
//! The `is_valid_*_result` checks decide whether a primary converter's output
//! can be trusted. The `validate_*` functions back form input: they report the
//! first failing rule, checking year, then month, then day.

use crate::date::{GregorianDate, HijriDate, RawDate};
use crate::error::ValidationError;
use crate::jdn::days_in_month;

/// Largest day number any Hijri month may have
pub const MAX_HIJRI_DAY: u32 = 30;

/// Returns true if a converter's Hijri output is structurally usable.
pub fn is_valid_hijri_result(raw: &RawDate) -> bool {
    match raw.to_parts() {
        Some((_, month, day)) => (1..=12).contains(&month) && (1..=MAX_HIJRI_DAY).contains(&day),
        None => false,
    }
}

/// Returns true if a converter's Gregorian output is a real calendar date.
pub fn is_valid_gregorian_result(raw: &RawDate) -> bool {
    match raw.to_parts() {
        Some((year, month, day)) => is_valid_gregorian_date(&GregorianDate::new(year, month, day)),
        None => false,
    }
}

/// Returns true if the date exists in the proleptic Gregorian calendar.
///
/// Years before 1 CE are rejected.
pub fn is_valid_gregorian_date(date: &GregorianDate) -> bool {
    date.year >= 1
        && (1..=12).contains(&date.month)
        && date.day >= 1
        && date.day <= days_in_month(date.year, date.month)
}

/// Hijri years start at 1 AH.
pub fn is_valid_hijri_year(year: i32) -> bool {
    year >= 1
}

/// Returns true for 1 (Muharram) through 12 (Dhu al-Hijjah).
pub fn is_valid_hijri_month(month: u32) -> bool {
    (1..=12).contains(&month)
}

/// Largest day accepted for a Hijri month by input validation.
///
/// Dhu al-Hijjah (month 12) always accepts 30, whether or not the year is a
/// leap year.
pub fn max_hijri_day(month: u32) -> u32 {
    if month % 2 == 1 || month == 12 {
        MAX_HIJRI_DAY
    } else {
        29
    }
}

/// Returns true if `day` fits `month`, see [`max_hijri_day`].
pub fn is_valid_hijri_day(day: u32, month: u32) -> bool {
    day >= 1 && day <= max_hijri_day(month)
}

/// Validate a Hijri date, returning the first failing rule.
pub fn validate_hijri_date(date: &HijriDate) -> Result<(), ValidationError> {
    if !is_valid_hijri_year(date.year) {
        return Err(ValidationError::InvalidYear { year: date.year });
    }
    if !is_valid_hijri_month(date.month) {
        return Err(ValidationError::InvalidMonth { month: date.month });
    }
    if !is_valid_hijri_day(date.day, date.month) {
        return Err(ValidationError::InvalidDay {
            day: date.day,
            max: max_hijri_day(date.month),
        });
    }
    Ok(())
}

/// Validate a Gregorian date, returning the first failing rule.
pub fn validate_gregorian_date(date: &GregorianDate) -> Result<(), ValidationError> {
    if date.year < 1 {
        return Err(ValidationError::InvalidYear { year: date.year });
    }
    if !(1..=12).contains(&date.month) {
        return Err(ValidationError::InvalidMonth { month: date.month });
    }
    let max = days_in_month(date.year, date.month);
    if date.day < 1 || date.day > max {
        return Err(ValidationError::InvalidDay { day: date.day, max });
    }
    Ok(())
}
