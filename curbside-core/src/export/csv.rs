//! Spreadsheet-import encoding understood by Google Calendar.
//!
//! Fields are written unquoted; subjects must not contain commas.

use ::csv::{QuoteStyle, Terminator, WriterBuilder};
use chrono::{NaiveTime, TimeDelta, Timelike};

use super::ExportError;
use crate::model::ReminderEvent;

/// Column header record.
pub const HEADER: [&str; 5] = ["Subject", "Start Date", "Start Time", "End Time", "Private"];

/// 12-hour `h:mm AM/PM` rendering.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// End-time rendering, minutes unpadded (`9:0 PM`, `8:5 AM`, `12:30 AM`).
#[must_use]
pub fn format_end_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{hour}:{} {meridiem}", time.minute())
}

/// Encode events as newline-terminated records under [`HEADER`].
///
/// Each event lasts one hour; an end time past midnight wraps to the early morning.
///
/// # Errors
///
/// Returns [`ExportError`] if the writer fails to emit a record.
pub fn encode(events: &[ReminderEvent]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for event in events {
        let (end, _) = event.time.overflowing_add_signed(TimeDelta::hours(1));
        let date = event.date.format("%Y-%m-%d").to_string();
        let start = format_time(event.time);
        let end = format_end_time(end);
        writer.write_record([
            event.subject.as_str(),
            date.as_str(),
            start.as_str(),
            end.as_str(),
            "False",
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
