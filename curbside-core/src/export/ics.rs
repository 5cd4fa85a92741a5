//! iCalendar (RFC 5545 style) encoding for Apple Calendar and friends.

use chrono::{DateTime, NaiveDate, Timelike, Utc};
use uuid::Uuid;

use crate::model::ReminderEvent;

const LINE_BREAK: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixed calendar metadata written around the events.
pub struct IcsCalendar {
    /// `PRODID` value.
    pub product_id: String,
    /// `X-WR-CALNAME` value.
    pub calendar_name: String,
    /// `X-WR-TIMEZONE` value.
    pub timezone: String,
    /// Domain appended to every generated `UID`.
    pub uid_domain: String,
}

impl Default for IcsCalendar {
    fn default() -> Self {
        Self {
            product_id: "-//Maplewood Recycling//NONSGML v1.0//EN".to_owned(),
            calendar_name: "Maplewood Recycling".to_owned(),
            timezone: "America/New_York".to_owned(),
            uid_domain: "maplewoodrecycling.com".to_owned(),
        }
    }
}

impl IcsCalendar {
    /// Encode events into a single `VCALENDAR`, stamping each with `created`.
    ///
    /// Start and end carry the reminder's wall-clock fields with a `Z` suffix. The end hour is
    /// the start hour plus one with no day rollover, so a 23:xx start ends at hour 24.
    #[must_use]
    pub fn encode(&self, events: &[ReminderEvent], created: DateTime<Utc>) -> String {
        let stamp = created.format("%Y%m%dT%H%M%SZ").to_string();

        let mut lines = vec![
            "BEGIN:VCALENDAR".to_owned(),
            "VERSION:2.0".to_owned(),
            format!("PRODID:{}", self.product_id),
            "CALSCALE:GREGORIAN".to_owned(),
            "METHOD:PUBLISH".to_owned(),
            format!("X-WR-CALNAME:{}", self.calendar_name),
            format!("X-WR-TIMEZONE:{}", self.timezone),
        ];

        for event in events {
            let hour = event.time.hour();
            let minute = event.time.minute();
            lines.extend([
                "BEGIN:VEVENT".to_owned(),
                format!("UID:{}@{}", Uuid::new_v4().simple(), self.uid_domain),
                format!("DTSTAMP:{stamp}"),
                format!("DTSTART:{}", basic_timestamp(event.date, hour, minute)),
                format!("DTEND:{}", basic_timestamp(event.date, hour + 1, minute)),
                format!("SUMMARY:{}", event.subject),
                format!("DESCRIPTION:{}", event.description.as_deref().unwrap_or("")),
                "END:VEVENT".to_owned(),
            ]);
        }

        lines.push("END:VCALENDAR".to_owned());
        lines.join(LINE_BREAK)
    }
}

/// `YYYYMMDDThhmmssZ` built from raw fields; `hour` is not range checked.
fn basic_timestamp(date: NaiveDate, hour: u32, minute: u32) -> String {
    format!("{}T{hour:02}{minute:02}00Z", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveTime, TimeZone};

    use super::*;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous timestamp")
    }

    fn event(hour: u32) -> ReminderEvent {
        ReminderEvent {
            date: NaiveDate::from_ymd_opt(2026, 5, 24).expect("valid date"),
            time: NaiveTime::from_hms_opt(hour, 15, 0).expect("valid time"),
            subject: "Reminder: Recycling Holiday (Memorial Day)".to_owned(),
            description: None,
        }
    }

    #[test]
    fn event_block_carries_timestamps_and_summary() {
        let ics = IcsCalendar::default().encode(&[event(20)], created());
        let lines: Vec<&str> = ics.split("\r\n").collect();

        assert_eq!(lines.first(), Some(&"BEGIN:VCALENDAR"));
        assert_eq!(lines.last(), Some(&"END:VCALENDAR"));
        assert!(lines.contains(&"DTSTAMP:20260102T030405Z"));
        assert!(lines.contains(&"DTSTART:20260524T201500Z"));
        assert!(lines.contains(&"DTEND:20260524T211500Z"));
        assert!(lines.contains(&"SUMMARY:Reminder: Recycling Holiday (Memorial Day)"));
        assert!(lines.contains(&"DESCRIPTION:"));
        assert!(
            lines
                .iter()
                .any(|line| line.starts_with("UID:") && line.ends_with("@maplewoodrecycling.com"))
        );
    }

    #[test]
    fn late_start_keeps_hour_24_end() {
        let ics = IcsCalendar::default().encode(&[event(23)], created());
        assert!(ics.contains("DTEND:20260524T241500Z"), "got {ics}");
    }

    #[test]
    fn long_properties_stay_on_one_line() {
        let mut long = event(20);
        long.subject =
            "Reminder: Recycling Holiday (Township offices closed for the regional snow emergency)"
                .to_owned();
        let ics = IcsCalendar::default().encode(&[long.clone()], created());
        let summary = format!("SUMMARY:{}", long.subject);
        assert!(summary.len() > 75);
        assert!(ics.split("\r\n").any(|line| line == summary), "got {ics}");
        assert!(!ics.contains("\r\n "));
    }

    #[test]
    fn uids_are_unique_per_event() {
        let ics = IcsCalendar::default().encode(&[event(8), event(9)], created());
        let uids: Vec<&str> = ics.split("\r\n").filter(|line| line.starts_with("UID:")).collect();
        assert_eq!(uids.len(), 2);
        assert_ne!(uids.first(), uids.last());
    }
}
