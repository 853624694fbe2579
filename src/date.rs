//! Date value types.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::validate::{validate_gregorian_date, validate_hijri_date};

/// A date in the Hijri (Islamic) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriDate {
    pub year: i32,
    /// 1 = Muharram ... 12 = Dhu al-Hijjah
    pub month: u32,
    pub day: u32,
}

/// A date in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        HijriDate { year, month, day }
    }
}

impl GregorianDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        GregorianDate { year, month, day }
    }
}

/// The unchecked result of a primary converter.
///
/// Fields are floating point so that a misbehaving converter can report
/// non-finite or fractional values; the plausibility checks in
/// [`crate::validate`] decide whether the result is usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDate {
    pub year: f64,
    pub month: f64,
    pub day: f64,
}

impl RawDate {
    pub fn new(year: f64, month: f64, day: f64) -> Self {
        RawDate { year, month, day }
    }

    /// Returns the fields as integers if all three are finite whole numbers
    /// that fit the date types.
    pub(crate) fn to_parts(self) -> Option<(i32, u32, u32)> {
        let fields = [self.year, self.month, self.day];
        if fields.iter().any(|f| !f.is_finite() || f.fract() != 0.0) {
            return None;
        }
        if self.year < i32::MIN as f64 || self.year > i32::MAX as f64 {
            return None;
        }
        if self.month < 0.0 || self.month > u32::MAX as f64 {
            return None;
        }
        if self.day < 0.0 || self.day > u32::MAX as f64 {
            return None;
        }
        Some((self.year as i32, self.month as u32, self.day as u32))
    }
}

impl From<HijriDate> for RawDate {
    fn from(h: HijriDate) -> Self {
        RawDate::new(h.year as f64, h.month as f64, h.day as f64)
    }
}

impl From<GregorianDate> for RawDate {
    fn from(g: GregorianDate) -> Self {
        RawDate::new(g.year as f64, g.month as f64, g.day as f64)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02} AH", self.year, self.month, self.day)
    }
}

/// Split `YYYY-MM-DD` into its three numeric fields.
fn parse_ymd(s: &str) -> Result<(i32, u32, u32), ParseError> {
    let parts: Vec<&str> = s.split('-').map(str::trim).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(ParseError::InvalidFormat(s.to_string()));
    }

    let year = parts[0]
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber {
            field: "year",
            value: parts[0].to_string(),
        })?;
    let month = parts[1]
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber {
            field: "month",
            value: parts[1].to_string(),
        })?;
    let day = parts[2]
        .parse::<u32>()
        .map_err(|_| ParseError::InvalidNumber {
            field: "day",
            value: parts[2].to_string(),
        })?;

    Ok((year, month, day))
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD` and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (year, month, day) = parse_ymd(s)?;
        let date = GregorianDate::new(year, month, day);
        validate_gregorian_date(&date)?;
        Ok(date)
    }
}

impl FromStr for HijriDate {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`, optionally followed by `AH`, and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix("AH").map(str::trim_end).unwrap_or(s);
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let (year, month, day) = parse_ymd(s)?;
        let date = HijriDate::new(year, month, day);
        validate_hijri_date(&date)?;
        Ok(date)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = crate::error::ValidationError;

    fn try_from(d: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let date = GregorianDate::new(d.year(), d.month(), d.day());
        validate_gregorian_date(&date)?;
        Ok(date)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<GregorianDate> for chrono::NaiveDate {
    type Error = crate::error::ValidationError;

    fn try_from(g: GregorianDate) -> Result<Self, Self::Error> {
        validate_gregorian_date(&g)?;
        // chrono's year range is narrower than i32
        chrono::NaiveDate::from_ymd_opt(g.year, g.month, g.day)
            .ok_or(crate::error::ValidationError::InvalidYear { year: g.year })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_parts_rejects_non_finite() {
        assert_eq!(RawDate::new(f64::NAN, 1.0, 1.0).to_parts(), None);
        assert_eq!(RawDate::new(1445.0, f64::INFINITY, 1.0).to_parts(), None);
        assert_eq!(RawDate::new(1445.0, 9.0, 1.5).to_parts(), None);
        assert_eq!(RawDate::new(1445.0, -1.0, 1.0).to_parts(), None);
        assert_eq!(
            RawDate::new(1445.0, 9.0, 1.0).to_parts(),
            Some((1445, 9, 1))
        );
    }

    #[test]
    fn test_display_short_forms() {
        assert_eq!(GregorianDate::new(2024, 3, 5).to_string(), "2024-03-05");
        assert_eq!(HijriDate::new(1445, 9, 1).to_string(), "1445-09-01 AH");
    }

    #[test]
    fn test_parse_ymd_shapes() {
        assert_eq!(parse_ymd("2024-03-05"), Ok((2024, 3, 5)));
        assert!(matches!(
            parse_ymd("2024-03"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ymd("2024--05"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_ymd("2024-xx-05"),
            Err(ParseError::InvalidNumber { field: "month", .. })
        ));
    }
}
