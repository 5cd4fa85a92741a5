//! Derivation of calendar reminders from a pickup schedule.

use chrono::{Days, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::model::{PickupWeek, ReminderEvent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// When a reminder fires relative to the pickup.
pub enum ReminderTiming {
    /// Evening before the pickup day.
    #[default]
    #[serde(alias = "night_before")]
    Night,
    /// Morning of the pickup day.
    #[serde(alias = "morning_of")]
    Morning,
}

impl ReminderTiming {
    /// Suggested reminder time for this timing: 20:00 at night, 07:00 in the morning.
    #[must_use]
    pub fn default_time(self) -> NaiveTime {
        let hour = match self {
            ReminderTiming::Night => 20,
            ReminderTiming::Morning => 7,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid reminder time {0:?}, expected HH:MM")]
/// Returned when a reminder time is not a 24-hour `HH:MM` value.
pub struct ParseTimeError(pub String);

/// Parse a 24-hour `HH:MM` wall-clock time.
///
/// # Errors
///
/// Returns [`ParseTimeError`] when the input is not a valid `HH:MM` time.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ParseTimeError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_err| ParseTimeError(raw.to_owned()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// User choices that shape the exported reminders.
pub struct ReminderOptions {
    /// Night before or morning of.
    pub timing: ReminderTiming,
    /// Wall-clock time every reminder starts at.
    pub time: NaiveTime,
}

impl ReminderOptions {
    /// Options for `timing` at its suggested time.
    #[must_use]
    pub fn with_timing(timing: ReminderTiming) -> Self {
        Self {
            timing,
            time: timing.default_time(),
        }
    }
}

impl Default for ReminderOptions {
    fn default() -> Self {
        Self::with_timing(ReminderTiming::default())
    }
}

/// Subject of the regular pickup reminder.
#[must_use]
pub fn pickup_subject(week: &PickupWeek) -> String {
    format!("Recycling ({})", week.material)
}

/// Turn a schedule into reminder events.
///
/// With night-before timing a delayed week also yields a "no pickup" warning dated the night
/// before the originally scheduled day; it precedes the pickup reminder.
#[must_use]
pub fn build_reminders(weeks: &[PickupWeek], options: &ReminderOptions) -> Vec<ReminderEvent> {
    let mut events = Vec::with_capacity(weeks.len());

    for week in weeks {
        if options.timing == ReminderTiming::Night
            && let Some(reason) = week.delay_reason.as_deref()
            && let Some(date) = week.scheduled_date.checked_sub_days(Days::new(1))
        {
            events.push(ReminderEvent {
                date,
                time: options.time,
                subject: format!("Reminder: Recycling Holiday ({reason})"),
                description: None,
            });
        }

        let date = match options.timing {
            ReminderTiming::Night => week
                .pickup_date
                .checked_sub_days(Days::new(1))
                .unwrap_or(week.pickup_date),
            ReminderTiming::Morning => week.pickup_date,
        };

        events.push(ReminderEvent {
            date,
            time: options.time,
            subject: pickup_subject(week),
            description: Some(format!("Pickup for {}.", week.material)),
        });
    }

    events
}
