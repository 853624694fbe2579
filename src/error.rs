//! Error types for validation, parsing and conversion.

use thiserror::Error;

/// The first rule a date failed during validation.
///
/// The `Display` output is the message shown next to the offending form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("year must be a positive whole number (got {year})")]
    InvalidYear { year: i32 },

    #[error("month must be between 1 and 12 (got {month})")]
    InvalidMonth { month: u32 },

    #[error("day must be between 1 and {max} (got {day})")]
    InvalidDay { day: u32, max: u32 },
}

/// Errors that can occur when parsing a date from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty date string")]
    EmptyInput,

    #[error("invalid date format: '{0}' (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    #[error("invalid {field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors reported by a primary converter.
///
/// These never reach callers of the conversion functions; any of them makes
/// the converter fall back to the civil algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("year {year} is outside the supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    #[error("input {year}-{month:02}-{day:02} is not a valid date")]
    InvalidInput { year: i32, month: u32, day: u32 },

    #[error("converter failed: {0}")]
    Library(String),
}
