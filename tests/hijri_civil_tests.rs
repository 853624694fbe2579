use hijri_cal::hijri::{
    civil_month_length, hijri_to_jdn_civil, is_civil_leap_year, jdn_to_hijri_civil, CIVIL_EPOCH,
};
use hijri_cal::HijriDate;

#[test]
fn test_roundtrip_years_1_to_1500() {
    for year in 1..=1500 {
        for month in 1..=12 {
            for day in 1..=civil_month_length(year, month) {
                let date = HijriDate::new(year, month, day);
                assert_eq!(
                    jdn_to_hijri_civil(hijri_to_jdn_civil(&date)),
                    date,
                    "roundtrip failed for {}",
                    date
                );
            }
        }
    }
}

#[test]
fn test_days_are_contiguous() {
    // Consecutive civil dates map to consecutive day numbers
    let mut expected = CIVIL_EPOCH;
    for year in 1..=90 {
        for month in 1..=12 {
            for day in 1..=civil_month_length(year, month) {
                assert_eq!(hijri_to_jdn_civil(&HijriDate::new(year, month, day)), expected);
                expected += 1;
            }
        }
    }
}

#[test]
fn test_dhu_al_hijjah_30_in_common_year() {
    // 30 Dhu al-Hijjah does not exist in a common civil year; it lands on
    // 1 Muharram of the following year.
    assert!(!is_civil_leap_year(1444));
    let jdn = hijri_to_jdn_civil(&HijriDate::new(1444, 12, 30));
    assert_eq!(jdn_to_hijri_civil(jdn), HijriDate::new(1445, 1, 1));
}

#[test]
fn test_thirty_year_cycle_length() {
    let start = hijri_to_jdn_civil(&HijriDate::new(1411, 1, 1));
    let end = hijri_to_jdn_civil(&HijriDate::new(1441, 1, 1));
    assert_eq!(end - start, 10631);
}
