//! Near-term "pickup changed this week" notice.

use chrono::{Datelike, Days, NaiveDate};

use crate::holiday::delay_reason;
use crate::model::{Notice, Zone};
use crate::ports::ExceptionSource;

/// Days before a shifted pickup that the notice starts showing.
pub const NOTICE_WINDOW_DAYS: i64 = 3;

/// Notice for a delayed pickup of `zone` that is due within the display window.
///
/// The most recent pickup day on or before `today` is checked first, then the next one on or
/// after `today`. A notice is shown from three days before the shifted pickup through the
/// shifted pickup day itself.
#[must_use]
pub fn current_notice(
    zone: Zone,
    today: NaiveDate,
    exceptions: &dyn ExceptionSource,
) -> Option<Notice> {
    let today_index = today.weekday().num_days_from_monday();
    let zone_index = zone.weekday().num_days_from_monday();

    let days_back = (today_index + 7 - zone_index) % 7;
    let days_ahead = (zone_index + 7 - today_index) % 7;

    let recent = today.checked_sub_days(Days::new(u64::from(days_back)));
    let upcoming = today.checked_add_days(Days::new(u64::from(days_ahead)));

    [recent, upcoming].into_iter().flatten().find_map(|original_date| {
        let reason = delay_reason(original_date, exceptions)?;
        let new_date = original_date.succ_opt()?;
        let days_until_pickup = (new_date - today).num_days();
        (0..=NOTICE_WINDOW_DAYS)
            .contains(&days_until_pickup)
            .then(|| Notice {
                zone,
                original_date,
                new_date,
                reason,
            })
    })
}
