//! Holiday rules and the delay allow-list.

use chrono::{Datelike, NaiveDate};
use curbside_core::holiday::{
    DELAY_HOLIDAYS, ExceptionEntry, ExceptionTable, delay_reason, holiday_name, is_delay_holiday,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn recognizes_2026_holidays() {
    let cases = [
        (date(2026, 1, 1), "New Year's Day"),
        (date(2026, 5, 25), "Memorial Day"),
        (date(2026, 7, 4), "Independence Day"),
        (date(2026, 9, 7), "Labor Day"),
        (date(2026, 11, 26), "Thanksgiving"),
        (date(2026, 12, 25), "Christmas Day"),
    ];
    for (day, expected) in cases {
        assert_eq!(holiday_name(day), Some(expected), "{day}");
        assert!(is_delay_holiday(expected));
    }
}

#[test]
fn ordinary_days_and_other_holidays_are_not_recognized() {
    for day in [
        date(2026, 1, 19),  // MLK Day
        date(2026, 2, 16),  // Presidents' Day
        date(2026, 10, 12), // Columbus Day
        date(2026, 11, 11), // Veterans Day
        date(2026, 9, 14),  // second Monday of September
        date(2026, 11, 27), // day after Thanksgiving
    ] {
        assert_eq!(holiday_name(day), None, "{day}");
    }
}

#[test]
fn allow_list_has_six_names() {
    assert_eq!(DELAY_HOLIDAYS.len(), 6);
}

#[test]
fn every_day_of_the_year_is_handled() {
    let mut day = date(2026, 1, 1);
    let mut found = 0;
    while day.year() == 2026 {
        if holiday_name(day).is_some() {
            found += 1;
        }
        day = day.succ_opt().unwrap();
    }
    assert_eq!(found, 6);
}

#[test]
fn exception_lookup_is_exact_date() {
    let table = ExceptionTable::new([ExceptionEntry {
        date: date(2026, 3, 3),
        reason: "Hurricane".to_owned(),
    }]);
    assert_eq!(delay_reason(date(2026, 3, 3), &table).as_deref(), Some("Hurricane"));
    assert_eq!(delay_reason(date(2026, 3, 4), &table), None);
    assert_eq!(delay_reason(date(2026, 3, 2), &ExceptionTable::default()), None);
}
