//! Built-in locale data.

/// Field order of a long Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GregorianLayout {
    /// `March 5, 2024`
    MonthDayYear,
    /// `5 March 2024`
    DayMonthYear,
}

/// Names and layout used when rendering dates.
#[derive(Debug, Clone)]
pub struct Locale {
    pub gregorian_months: [&'static str; 12],
    pub hijri_months: [&'static str; 12],
    /// Sunday first
    pub day_names: [&'static str; 7],
    /// Appended to long Hijri dates
    pub hijri_era: &'static str,
    pub gregorian_layout: GregorianLayout,
    /// Between the weekday and the rest of a long Gregorian date
    pub weekday_separator: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            gregorian_months: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            hijri_months: [
                "Muharram",
                "Safar",
                "Rabi al-Awwal",
                "Rabi al-Thani",
                "Jumada al-Awwal",
                "Jumada al-Thani",
                "Rajab",
                "Shaban",
                "Ramadan",
                "Shawwal",
                "Dhu al-Qadah",
                "Dhu al-Hijjah",
            ],
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            hijri_era: "AH",
            gregorian_layout: GregorianLayout::MonthDayYear,
            weekday_separator: ", ",
        }
    }

    /// Arabic locale.
    pub fn ar() -> Self {
        Locale {
            gregorian_months: [
                "يناير",
                "فبراير",
                "مارس",
                "أبريل",
                "مايو",
                "يونيو",
                "يوليو",
                "أغسطس",
                "سبتمبر",
                "أكتوبر",
                "نوفمبر",
                "ديسمبر",
            ],
            hijri_months: [
                "محرم",
                "صفر",
                "ربيع الأول",
                "ربيع الآخر",
                "جمادى الأولى",
                "جمادى الآخرة",
                "رجب",
                "شعبان",
                "رمضان",
                "شوال",
                "ذو القعدة",
                "ذو الحجة",
            ],
            day_names: [
                "الأحد",
                "الاثنين",
                "الثلاثاء",
                "الأربعاء",
                "الخميس",
                "الجمعة",
                "السبت",
            ],
            hijri_era: "هـ",
            gregorian_layout: GregorianLayout::DayMonthYear,
            // Arabic comma
            weekday_separator: "، ",
        }
    }

    /// Name of a Gregorian month (1-12), or `None` if out of range.
    pub fn gregorian_month(&self, month: u32) -> Option<&'static str> {
        month_index(month).map(|i| self.gregorian_months[i])
    }

    /// Name of a Hijri month (1-12), or `None` if out of range.
    pub fn hijri_month(&self, month: u32) -> Option<&'static str> {
        month_index(month).map(|i| self.hijri_months[i])
    }
}

fn month_index(month: u32) -> Option<usize> {
    match month {
        1..=12 => Some((month - 1) as usize),
        _ => None,
    }
}
