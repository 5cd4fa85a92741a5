//! Export encoders fed with a generated schedule.

use chrono::{TimeZone, Utc};
use curbside_core::export::csv;
use curbside_core::export::ics::IcsCalendar;
use curbside_core::holiday::ExceptionTable;
use curbside_core::reminder::{ReminderOptions, ReminderTiming, build_reminders, parse_time};
use curbside_core::schedule::generate_schedule;
use curbside_core::{ReminderEvent, SeasonConfig, Zone};

fn monday_reminders(options: &ReminderOptions) -> Vec<ReminderEvent> {
    let weeks = generate_schedule(
        Zone::Monday,
        &SeasonConfig::default(),
        &ExceptionTable::default(),
    );
    build_reminders(&weeks, options)
}

#[test]
fn night_reminders_include_two_holiday_warnings() {
    let events = monday_reminders(&ReminderOptions::default());
    assert_eq!(events.len(), 54);
    let warnings = events
        .iter()
        .filter(|event| event.subject.starts_with("Reminder: Recycling Holiday"))
        .count();
    assert_eq!(warnings, 2);
}

#[test]
fn csv_has_header_plus_one_line_per_event() {
    let events = monday_reminders(&ReminderOptions::default());
    let encoded = csv::encode(&events).unwrap();
    assert!(encoded.ends_with('\n'));
    assert_eq!(encoded.lines().count(), events.len() + 1);
    assert_eq!(
        encoded.lines().next(),
        Some("Subject,Start Date,Start Time,End Time,Private")
    );
    assert_eq!(
        encoded.lines().nth(1),
        Some("Recycling (Commingled),2026-01-04,8:00 PM,9:0 PM,False")
    );
}

#[test]
fn csv_morning_reminders_use_configured_time() {
    let options = ReminderOptions {
        timing: ReminderTiming::Morning,
        time: parse_time("06:45").unwrap(),
    };
    let events = monday_reminders(&options);
    assert_eq!(events.len(), 52);
    let encoded = csv::encode(&events).unwrap();
    assert_eq!(
        encoded.lines().nth(1),
        Some("Recycling (Commingled),2026-01-05,6:45 AM,7:45 AM,False")
    );
}

#[test]
fn csv_end_time_keeps_minutes_unpadded() {
    let options = ReminderOptions {
        timing: ReminderTiming::Morning,
        time: parse_time("07:05").unwrap(),
    };
    let encoded = csv::encode(&monday_reminders(&options)).unwrap();
    assert_eq!(
        encoded.lines().nth(1),
        Some("Recycling (Commingled),2026-01-05,7:05 AM,8:5 AM,False")
    );
}

#[test]
fn ics_wraps_one_block_per_event() {
    let events = monday_reminders(&ReminderOptions::default());
    let created = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
    let encoded = IcsCalendar::default().encode(&events, created);
    let lines: Vec<&str> = encoded.split("\r\n").collect();

    let begins = lines.iter().filter(|line| **line == "BEGIN:VEVENT").count();
    let ends = lines.iter().filter(|line| **line == "END:VEVENT").count();
    assert_eq!(begins, events.len());
    assert_eq!(ends, events.len());

    assert_eq!(lines.iter().filter(|line| **line == "BEGIN:VCALENDAR").count(), 1);
    assert_eq!(lines.iter().filter(|line| **line == "END:VCALENDAR").count(), 1);
    assert_eq!(
        &lines[..7],
        &[
            "BEGIN:VCALENDAR",
            "VERSION:2.0",
            "PRODID:-//Maplewood Recycling//NONSGML v1.0//EN",
            "CALSCALE:GREGORIAN",
            "METHOD:PUBLISH",
            "X-WR-CALNAME:Maplewood Recycling",
            "X-WR-TIMEZONE:America/New_York",
        ]
    );
    assert!(lines.contains(&"DESCRIPTION:Pickup for Fibers."));
    assert!(!encoded.ends_with("\r\n"));
}

#[test]
fn empty_event_list_still_produces_calendar() {
    let created = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let encoded = IcsCalendar::default().encode(&[], created);
    assert!(encoded.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(encoded.ends_with("X-WR-TIMEZONE:America/New_York\r\nEND:VCALENDAR"));
    assert_eq!(
        csv::encode(&[]).unwrap(),
        "Subject,Start Date,Start Time,End Time,Private\n"
    );
}
