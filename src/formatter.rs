//! Display formatting and weekday calculation

use crate::date::{GregorianDate, HijriDate};
use crate::jdn::gregorian_to_jdn;
use crate::locale::{GregorianLayout, Locale};
use crate::options::FormatOptions;

/// Placeholder for a month number with no name
const UNKNOWN_MONTH: &str = "Unknown";

/// Day of the week: 0 = Sunday, 1 = Monday, ..., 6 = Saturday
pub fn weekday(date: &GregorianDate) -> u32 {
    // JDN 0 fell on a Monday, so JDN + 1 counts from Sunday
    (gregorian_to_jdn(date) + 1).rem_euclid(7) as u32
}

/// English name of the day of the week.
pub fn day_name(date: &GregorianDate) -> &'static str {
    day_name_in(date, &Locale::default())
}

fn day_name_in(date: &GregorianDate, locale: &Locale) -> &'static str {
    locale.day_names[weekday(date) as usize]
}

/// Format as `"{day} {MonthName} {year} AH"`, e.g. `"1 Ramadan 1445 AH"`.
pub fn format_hijri_date(date: &HijriDate) -> String {
    format_hijri_date_with(date, &FormatOptions::default())
}

/// Like [`format_hijri_date`], with names and era suffix from `opts.locale`.
pub fn format_hijri_date_with(date: &HijriDate, opts: &FormatOptions) -> String {
    let locale = &opts.locale;
    let month = locale.hijri_month(date.month).unwrap_or(UNKNOWN_MONTH);
    format!("{} {} {} {}", date.day, month, date.year, locale.hijri_era)
}

/// Format as `"{MonthName} {day}, {year}"`, optionally prefixed by the weekday.
///
/// `format_gregorian_date(&GregorianDate::new(2024, 3, 5), true)` gives
/// `"Tuesday, March 5, 2024"`.
pub fn format_gregorian_date(date: &GregorianDate, include_weekday: bool) -> String {
    format_gregorian_date_with(date, include_weekday, &FormatOptions::default())
}

/// Like [`format_gregorian_date`], using the names, field order and weekday
/// separator of `opts.locale`.
///
/// With [`Locale::ar`], January 1, 2024 renders as `"الاثنين، 1 يناير 2024"`.
pub fn format_gregorian_date_with(
    date: &GregorianDate,
    include_weekday: bool,
    opts: &FormatOptions,
) -> String {
    let locale = &opts.locale;
    let month = locale.gregorian_month(date.month).unwrap_or(UNKNOWN_MONTH);
    let body = match locale.gregorian_layout {
        GregorianLayout::MonthDayYear => format!("{} {}, {}", month, date.day, date.year),
        GregorianLayout::DayMonthYear => format!("{} {} {}", date.day, month, date.year),
    };

    if include_weekday {
        format!("{}{}{}", day_name_in(date, locale), locale.weekday_separator, body)
    } else {
        body
    }
}

/// Zero-padded `YYYY-MM-DD`.
pub fn format_gregorian_date_short(date: &GregorianDate) -> String {
    date.to_string()
}

/// Zero-padded `YYYY-MM-DD AH`.
pub fn format_hijri_date_short(date: &HijriDate) -> String {
    date.to_string()
}
