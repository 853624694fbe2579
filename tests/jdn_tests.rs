use hijri_cal::jdn::{days_in_month, gregorian_to_jdn, is_leap_year, jdn_to_gregorian};
use hijri_cal::validate::is_valid_gregorian_date;
use hijri_cal::GregorianDate;

#[test]
fn test_known_jdn() {
    // January 1, 2000 is JDN 2451545
    assert_eq!(gregorian_to_jdn(&GregorianDate::new(2000, 1, 1)), 2451545);
    assert_eq!(jdn_to_gregorian(2451545), GregorianDate::new(2000, 1, 1));
}

#[test]
fn test_roundtrip_years_1_to_9999() {
    let first = gregorian_to_jdn(&GregorianDate::new(1, 1, 1));
    let last = gregorian_to_jdn(&GregorianDate::new(9999, 12, 31));

    let mut previous = jdn_to_gregorian(first - 1);
    for jdn in first..=last {
        let date = jdn_to_gregorian(jdn);
        assert!(is_valid_gregorian_date(&date), "invalid date for JDN {}", jdn);
        assert_eq!(gregorian_to_jdn(&date), jdn, "roundtrip failed for {}", date);
        assert!(date > previous, "{} does not follow {}", date, previous);
        previous = date;
    }
}

#[test]
fn test_every_day_of_a_leap_cycle() {
    // Walk 400 years day by day and compare with the leap rule
    let mut jdn = gregorian_to_jdn(&GregorianDate::new(1600, 1, 1));
    for year in 1600..2000 {
        for month in 1..=12 {
            for day in 1..=days_in_month(year, month) {
                assert_eq!(jdn_to_gregorian(jdn), GregorianDate::new(year, month, day));
                jdn += 1;
            }
        }
    }
    assert_eq!(jdn, gregorian_to_jdn(&GregorianDate::new(2000, 1, 1)));
}

#[test]
fn test_leap_year_rule() {
    assert!(is_leap_year(1600));
    assert!(!is_leap_year(1700));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2100));
}
