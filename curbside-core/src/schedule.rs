//! Full-year pickup schedule generation.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::holiday::delay_reason;
use crate::model::{PickupWeek, SeasonConfig, Zone};
use crate::ports::ExceptionSource;

/// Number of upcoming weeks shown before the full year is expanded.
pub const PREVIEW_WEEKS: usize = 4;

/// First Monday on or after January 1 of `year`.
#[must_use]
pub fn first_monday(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 1, Weekday::Mon, 1)
}

/// Generate every pickup week for `zone` in the configured season.
///
/// Weeks are anchored on the first Monday of the year and stop once the anchor leaves the year.
/// A delay moves the pickup by exactly one day and never cascades.
#[must_use]
pub fn generate_schedule(
    zone: Zone,
    season: &SeasonConfig,
    exceptions: &dyn ExceptionSource,
) -> Vec<PickupWeek> {
    let Some(mut anchor) = first_monday(season.year) else {
        return Vec::new();
    };
    let offset = Days::new(u64::from(zone.day_index() - 1));

    let mut weeks = Vec::with_capacity(53);
    let mut material = season.starting_material;

    while anchor.year() == season.year {
        let Some(scheduled_date) = anchor.checked_add_days(offset) else {
            break;
        };

        let reason = delay_reason(scheduled_date, exceptions);
        let pickup_date = if reason.is_some() {
            scheduled_date.succ_opt().unwrap_or(scheduled_date)
        } else {
            scheduled_date
        };

        weeks.push(PickupWeek {
            scheduled_date,
            pickup_date,
            material,
            delay_reason: reason,
        });

        material = material.next();
        match anchor.checked_add_days(Days::new(7)) {
            Some(next) => anchor = next,
            None => break,
        }
    }

    weeks
}

/// Index of the first week whose pickup falls on or after `today`.
#[must_use]
pub fn next_pickup_index(weeks: &[PickupWeek], today: NaiveDate) -> Option<usize> {
    weeks.iter().position(|week| week.pickup_date >= today)
}

/// Weeks whose pickup is no earlier than yesterday, paired with their index in `weeks`.
///
/// Only the first [`PREVIEW_WEEKS`] are returned unless `show_all` is set.
#[must_use]
pub fn visible_weeks(
    weeks: &[PickupWeek],
    today: NaiveDate,
    show_all: bool,
) -> Vec<(usize, &PickupWeek)> {
    let yesterday = today.pred_opt().unwrap_or(today);
    let visible = weeks
        .iter()
        .enumerate()
        .filter(|(_, week)| week.pickup_date >= yesterday);

    if show_all {
        visible.collect()
    } else {
        visible.take(PREVIEW_WEEKS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::ExceptionTable;

    #[test]
    fn first_monday_of_2026_is_january_fifth() {
        assert_eq!(first_monday(2026), NaiveDate::from_ymd_opt(2026, 1, 5));
        assert_eq!(first_monday(2024), NaiveDate::from_ymd_opt(2024, 1, 1));
    }

    #[test]
    fn leap_year_with_monday_new_year_has_53_weeks() {
        let season = SeasonConfig {
            year: 2024,
            ..SeasonConfig::default()
        };
        let weeks = generate_schedule(Zone::Monday, &season, &ExceptionTable::default());
        assert_eq!(weeks.len(), 53);
        let first = weeks.first().expect("non-empty schedule");
        assert_eq!(first.delay_reason.as_deref(), Some("New Year's Day"));
    }

    #[test]
    fn visible_weeks_starts_at_yesterday() {
        let weeks = generate_schedule(
            Zone::Tuesday,
            &SeasonConfig::default(),
            &ExceptionTable::default(),
        );
        let today = NaiveDate::from_ymd_opt(2026, 1, 14).expect("valid date");
        let visible = visible_weeks(&weeks, today, false);
        assert_eq!(visible.len(), PREVIEW_WEEKS);
        let (index, week) = visible.first().copied().expect("at least one week");
        assert_eq!(index, 1);
        assert_eq!(week.pickup_date, NaiveDate::from_ymd_opt(2026, 1, 13).expect("valid date"));
        assert_eq!(next_pickup_index(&weeks, today), Some(2));
    }
}
