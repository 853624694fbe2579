use hijri_cal::{Algorithm, FormatOptions, HijriConverter};

#[test]
fn test_default_options() {
    assert_eq!(Algorithm::default(), Algorithm::UmmAlQura);

    let opts = FormatOptions::default();
    assert_eq!(opts.locale.hijri_era, "AH");
}

#[test]
fn test_algorithm_name() {
    assert_eq!(Algorithm::UmmAlQura.name(), "umm-al-qura");
    assert_eq!(Algorithm::Civil.name(), "civil");
}

#[test]
fn test_locale_month_lookup() {
    let locale = FormatOptions::default().locale;
    assert_eq!(locale.hijri_month(9), Some("Ramadan"));
    assert_eq!(locale.gregorian_month(12), Some("December"));
    assert_eq!(locale.hijri_month(0), None);
    assert_eq!(locale.gregorian_month(13), None);
}
