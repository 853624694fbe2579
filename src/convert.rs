//! Hijri <-> Gregorian conversion with a civil-calendar fallback.
//!
//! Conversions first ask a primary converter (by default the Umm al-Qura
//! tables from the `hijri_date` crate). Its output is treated as untrusted:
//! if the converter fails, or returns something that is not a structurally
//! valid date, the civil algorithm in [`crate::hijri`] answers instead.
//! The conversion functions are therefore total and never panic.

use std::fmt;

use hijri_date::HijriDate as UmmAlQuraDate;
use tracing::debug;

use crate::date::{GregorianDate, HijriDate, RawDate};
use crate::error::ConversionError;
use crate::hijri::{hijri_to_jdn_civil, jdn_to_hijri_civil};
use crate::jdn::{gregorian_to_jdn, jdn_to_gregorian};
use crate::options::Algorithm;
use crate::validate::{is_valid_gregorian_date, is_valid_gregorian_result, is_valid_hijri_result};

/// A source of Hijri <-> Gregorian conversions.
///
/// Implementations may fail or return implausible values; callers of
/// [`convert_hijri_to_gregorian_with`] and [`convert_gregorian_to_hijri_with`]
/// never see either.
pub trait HijriConverter {
    fn to_gregorian(&self, date: &HijriDate) -> Result<RawDate, ConversionError>;
    fn to_hijri(&self, date: &GregorianDate) -> Result<RawDate, ConversionError>;

    /// Short identifier used in log events.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Hijri years covered by the Umm al-Qura tables
const UMM_AL_QURA_HIJRI_YEARS: (i32, i32) = (1357, 1499);

/// Gregorian years covered by the Umm al-Qura tables
const UMM_AL_QURA_GREGORIAN_YEARS: (i32, i32) = (1938, 2076);

/// Astronomical Umm al-Qura calendar, backed by the `hijri_date` crate.
///
/// Only a window of roughly 1938-2076 CE is used. Inputs outside it, or
/// inputs that are not valid dates, are refused before the library is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UmmAlQura;

impl HijriConverter for UmmAlQura {
    fn to_gregorian(&self, date: &HijriDate) -> Result<RawDate, ConversionError> {
        let (min, max) = UMM_AL_QURA_HIJRI_YEARS;
        if date.year < min || date.year > max {
            return Err(ConversionError::OutOfRange {
                year: date.year,
                min,
                max,
            });
        }
        // Umm al-Qura months may have 30 days in either parity, so only the
        // structural bounds are checked here
        if !is_valid_hijri_result(&RawDate::from(*date)) {
            return Err(ConversionError::InvalidInput {
                year: date.year,
                month: date.month,
                day: date.day,
            });
        }

        let hd = UmmAlQuraDate::from_hijri(
            date.year as usize,
            date.month as usize,
            date.day as usize,
        )
        .map_err(|e| ConversionError::Library(e.to_string()))?;

        Ok(RawDate::new(
            hd.year_gr() as f64,
            hd.month_gr() as f64,
            hd.day_gr() as f64,
        ))
    }

    fn to_hijri(&self, date: &GregorianDate) -> Result<RawDate, ConversionError> {
        let (min, max) = UMM_AL_QURA_GREGORIAN_YEARS;
        if date.year < min || date.year > max {
            return Err(ConversionError::OutOfRange {
                year: date.year,
                min,
                max,
            });
        }
        if !is_valid_gregorian_date(date) {
            return Err(ConversionError::InvalidInput {
                year: date.year,
                month: date.month,
                day: date.day,
            });
        }

        let hd = UmmAlQuraDate::from_gr(date.year as usize, date.month as usize, date.day as usize)
            .map_err(|e| ConversionError::Library(e.to_string()))?;

        Ok(RawDate::new(hd.year() as f64, hd.month() as f64, hd.day() as f64))
    }

    fn name(&self) -> &'static str {
        "umm-al-qura"
    }
}

/// The civil (tabular) calendar presented as a converter.
///
/// Useful when results must be reproducible regardless of the astronomical
/// tables, e.g. for dates far outside the Umm al-Qura window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Civil;

impl HijriConverter for Civil {
    fn to_gregorian(&self, date: &HijriDate) -> Result<RawDate, ConversionError> {
        Ok(civil_to_gregorian(date).into())
    }

    fn to_hijri(&self, date: &GregorianDate) -> Result<RawDate, ConversionError> {
        Ok(civil_to_hijri(date).into())
    }

    fn name(&self) -> &'static str {
        "civil"
    }
}

impl HijriConverter for Algorithm {
    fn to_gregorian(&self, date: &HijriDate) -> Result<RawDate, ConversionError> {
        match self {
            Algorithm::UmmAlQura => UmmAlQura.to_gregorian(date),
            Algorithm::Civil => Civil.to_gregorian(date),
        }
    }

    fn to_hijri(&self, date: &GregorianDate) -> Result<RawDate, ConversionError> {
        match self {
            Algorithm::UmmAlQura => UmmAlQura.to_hijri(date),
            Algorithm::Civil => Civil.to_hijri(date),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Algorithm::UmmAlQura => UmmAlQura.name(),
            Algorithm::Civil => Civil.name(),
        }
    }
}

fn civil_to_gregorian(date: &HijriDate) -> GregorianDate {
    jdn_to_gregorian(hijri_to_jdn_civil(date))
}

fn civil_to_hijri(date: &GregorianDate) -> HijriDate {
    jdn_to_hijri_civil(gregorian_to_jdn(date))
}

/// Use the primary result if `accept` takes it, otherwise compute `fallback`.
fn primary_or_fallback<T>(
    direction: &'static str,
    converter: &'static str,
    input: &dyn fmt::Display,
    primary: Result<RawDate, ConversionError>,
    accept: impl FnOnce(&RawDate) -> Option<T>,
    fallback: impl FnOnce() -> T,
) -> T {
    match primary {
        Ok(raw) => match accept(&raw) {
            Some(value) => value,
            None => {
                debug!(
                    direction,
                    converter,
                    %input,
                    ?raw,
                    "implausible primary result, using civil calendar"
                );
                fallback()
            }
        },
        Err(e) => {
            debug!(
                direction,
                converter,
                %input,
                error = %e,
                "primary converter failed, using civil calendar"
            );
            fallback()
        }
    }
}

/// Convert a Hijri date to Gregorian using the default algorithm.
pub fn convert_hijri_to_gregorian(date: &HijriDate) -> GregorianDate {
    convert_hijri_to_gregorian_with(&Algorithm::default(), date)
}

/// Convert a Hijri date to Gregorian, trying `converter` first.
pub fn convert_hijri_to_gregorian_with<C>(converter: &C, date: &HijriDate) -> GregorianDate
where
    C: HijriConverter + ?Sized,
{
    primary_or_fallback(
        "hijri->gregorian",
        converter.name(),
        date,
        converter.to_gregorian(date),
        |raw| {
            if !is_valid_gregorian_result(raw) {
                return None;
            }
            raw.to_parts()
                .map(|(year, month, day)| GregorianDate::new(year, month, day))
        },
        || civil_to_gregorian(date),
    )
}

/// Convert a Gregorian date to Hijri using the default algorithm.
pub fn convert_gregorian_to_hijri(date: &GregorianDate) -> HijriDate {
    convert_gregorian_to_hijri_with(&Algorithm::default(), date)
}

/// Convert a Gregorian date to Hijri, trying `converter` first.
pub fn convert_gregorian_to_hijri_with<C>(converter: &C, date: &GregorianDate) -> HijriDate
where
    C: HijriConverter + ?Sized,
{
    primary_or_fallback(
        "gregorian->hijri",
        converter.name(),
        date,
        converter.to_hijri(date),
        |raw| {
            if !is_valid_hijri_result(raw) {
                return None;
            }
            raw.to_parts()
                .map(|(year, month, day)| HijriDate::new(year, month, day))
        },
        || civil_to_hijri(date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl HijriConverter for Failing {
        fn to_gregorian(&self, _: &HijriDate) -> Result<RawDate, ConversionError> {
            Err(ConversionError::Library("boom".to_string()))
        }

        fn to_hijri(&self, _: &GregorianDate) -> Result<RawDate, ConversionError> {
            Err(ConversionError::Library("boom".to_string()))
        }
    }

    #[test]
    fn test_failing_converter_uses_civil() {
        let g = GregorianDate::new(2000, 1, 1);
        assert_eq!(
            convert_gregorian_to_hijri_with(&Failing, &g),
            HijriDate::new(1420, 9, 25)
        );

        let h = HijriDate::new(1, 1, 1);
        assert_eq!(
            convert_hijri_to_gregorian_with(&Failing, &h),
            GregorianDate::new(622, 7, 18)
        );
    }

    #[test]
    fn test_umm_al_qura_refuses_out_of_window() {
        let err = UmmAlQura
            .to_hijri(&GregorianDate::new(1500, 6, 1))
            .unwrap_err();
        assert!(matches!(err, ConversionError::OutOfRange { year: 1500, .. }));

        let err = UmmAlQura
            .to_gregorian(&HijriDate::new(900, 1, 1))
            .unwrap_err();
        assert!(matches!(err, ConversionError::OutOfRange { year: 900, .. }));
    }

    #[test]
    fn test_umm_al_qura_refuses_invalid_input() {
        let err = UmmAlQura
            .to_hijri(&GregorianDate::new(2023, 2, 29))
            .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));

        let err = UmmAlQura
            .to_gregorian(&HijriDate::new(1445, 2, 31))
            .unwrap_err();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
    }

    #[test]
    fn test_converter_names() {
        assert_eq!(UmmAlQura.name(), "umm-al-qura");
        assert_eq!(Civil.name(), "civil");
        assert_eq!(Algorithm::default().name(), "umm-al-qura");
        assert_eq!(Failing.name(), "custom");
    }

    #[test]
    fn test_civil_converter_matches_fallback() {
        let g = GregorianDate::new(1066, 10, 14);
        assert_eq!(
            convert_gregorian_to_hijri_with(&Civil, &g),
            convert_gregorian_to_hijri_with(&Failing, &g)
        );
    }
}
