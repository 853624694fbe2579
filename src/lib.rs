//! hijri-cal - Hijri and Gregorian calendar conversion
//!
//! Conversions prefer the Umm al-Qura tables and fall back to the civil
//! (tabular) Hijri calendar whenever the primary result is missing or
//! implausible, so every conversion returns a usable date. Validation,
//! weekday and display helpers sit on top of the conversion layer.

pub mod convert;
pub mod date;
pub mod error;
pub mod formatter;
pub mod hijri;
pub mod jdn;
pub mod options;
pub mod validate;

#[cfg(feature = "chrono")]
pub mod clock;

mod locale;

pub use convert::{
    convert_gregorian_to_hijri, convert_gregorian_to_hijri_with, convert_hijri_to_gregorian,
    convert_hijri_to_gregorian_with, Civil, HijriConverter, UmmAlQura,
};
pub use date::{GregorianDate, HijriDate, RawDate};
pub use error::{ConversionError, ParseError, ValidationError};
pub use formatter::{
    day_name, format_gregorian_date, format_gregorian_date_short, format_gregorian_date_with,
    format_hijri_date, format_hijri_date_short, format_hijri_date_with, weekday,
};
pub use locale::{GregorianLayout, Locale};
pub use options::{Algorithm, FormatOptions};
pub use validate::{validate_gregorian_date, validate_hijri_date};

#[cfg(feature = "chrono")]
pub use clock::{
    hijri_date_with_offset, today_gregorian, today_hijri, upcoming_days, DayEntry,
};
