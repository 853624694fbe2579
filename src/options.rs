//! Conversion and formatting options.

use crate::locale::Locale;

/// The primary conversion algorithm.
///
/// Whatever is chosen, implausible results still fall back to the civil
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Umm al-Qura astronomical tables (about 1938-2076 CE)
    #[default]
    UmmAlQura,
    /// Arithmetic 30-year-cycle calendar, valid for any date
    Civil,
}

/// Options for formatting dates.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Month, weekday and era names.
    pub locale: Locale,
}
