//! Recognized holidays, ad hoc exceptions, and the combined delay lookup.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ports::ExceptionSource;

/// Holidays that push a pickup back by one day.
pub const DELAY_HOLIDAYS: [&str; 6] = [
    "New Year's Day",
    "Memorial Day",
    "Independence Day",
    "Labor Day",
    "Thanksgiving",
    "Christmas Day",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Predicate recognizing a single named holiday.
pub enum HolidayRule {
    /// Same month and day every year.
    Fixed {
        /// Holiday name.
        name: &'static str,
        /// Month, 1-based.
        month: u32,
        /// Day of month.
        day: u32,
    },
    /// The `nth` occurrence of a weekday within a month.
    NthWeekday {
        /// Holiday name.
        name: &'static str,
        /// Month, 1-based.
        month: u32,
        /// Weekday the holiday falls on.
        weekday: Weekday,
        /// Occurrence, 1-based.
        nth: u32,
    },
    /// The last occurrence of a weekday within a month.
    LastWeekday {
        /// Holiday name.
        name: &'static str,
        /// Month, 1-based.
        month: u32,
        /// Weekday the holiday falls on.
        weekday: Weekday,
    },
}

impl HolidayRule {
    /// Holiday name when `date` satisfies the rule.
    #[must_use]
    pub fn matches(&self, date: NaiveDate) -> Option<&'static str> {
        let hit = match *self {
            HolidayRule::Fixed { month, day, .. } => date.month() == month && date.day() == day,
            HolidayRule::NthWeekday {
                month,
                weekday,
                nth,
                ..
            } => {
                date.month() == month
                    && date.weekday() == weekday
                    && (date.day() - 1) / 7 + 1 == nth
            }
            HolidayRule::LastWeekday { month, weekday, .. } => {
                date.month() == month
                    && date.weekday() == weekday
                    && date
                        .checked_add_days(Days::new(7))
                        .is_none_or(|next| next.month() != month)
            }
        };
        hit.then_some(self.name())
    }

    /// Name of the holiday this rule recognizes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match *self {
            HolidayRule::Fixed { name, .. }
            | HolidayRule::NthWeekday { name, .. }
            | HolidayRule::LastWeekday { name, .. } => name,
        }
    }
}

/// Holiday rules in evaluation order: fixed dates first, then floating dates.
pub const HOLIDAY_RULES: [HolidayRule; 6] = [
    HolidayRule::Fixed {
        name: "New Year's Day",
        month: 1,
        day: 1,
    },
    HolidayRule::Fixed {
        name: "Independence Day",
        month: 7,
        day: 4,
    },
    HolidayRule::Fixed {
        name: "Christmas Day",
        month: 12,
        day: 25,
    },
    HolidayRule::LastWeekday {
        name: "Memorial Day",
        month: 5,
        weekday: Weekday::Mon,
    },
    HolidayRule::NthWeekday {
        name: "Labor Day",
        month: 9,
        weekday: Weekday::Mon,
        nth: 1,
    },
    HolidayRule::NthWeekday {
        name: "Thanksgiving",
        month: 11,
        weekday: Weekday::Thu,
        nth: 4,
    },
];

/// Name of the recognized holiday falling on `date`, if any.
#[must_use]
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    HOLIDAY_RULES.iter().find_map(|rule| rule.matches(date))
}

/// Whether a holiday name is on the delay allow-list.
#[must_use]
pub fn is_delay_holiday(name: &str) -> bool {
    DELAY_HOLIDAYS.contains(&name)
}

/// Reason a pickup scheduled on `date` is pushed back one day.
///
/// Allow-listed holidays take precedence over exception entries.
#[must_use]
pub fn delay_reason(date: NaiveDate, exceptions: &dyn ExceptionSource) -> Option<String> {
    if let Some(name) = holiday_name(date).filter(|name| is_delay_holiday(name)) {
        return Some(name.to_owned());
    }
    exceptions.exception_reason(date).map(str::to_owned)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Explicit override for a disruption not derivable from a holiday rule.
pub struct ExceptionEntry {
    /// Affected scheduled pickup date.
    pub date: NaiveDate,
    /// Reason shown to residents, e.g. "Snow Storm".
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// In-memory exception table with one entry per date.
pub struct ExceptionTable {
    entries: BTreeMap<NaiveDate, String>,
}

impl ExceptionTable {
    /// Build a table from entries. When a date repeats, the first entry wins.
    #[must_use]
    pub fn new<I: IntoIterator<Item = ExceptionEntry>>(entries: I) -> Self {
        let mut table = BTreeMap::new();
        for entry in entries {
            if table.contains_key(&entry.date) {
                warn!(date = %entry.date, reason = %entry.reason, "duplicate exception date ignored");
                continue;
            }
            table.insert(entry.date, entry.reason);
        }
        Self { entries: table }
    }

    /// Number of dates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExceptionSource for ExceptionTable {
    fn exception_reason(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn memorial_day_is_last_monday_of_may() {
        assert_eq!(holiday_name(date(2026, 5, 25)), Some("Memorial Day"));
        assert_eq!(holiday_name(date(2026, 5, 18)), None);
        assert_eq!(holiday_name(date(2027, 5, 31)), Some("Memorial Day"));
        assert_eq!(holiday_name(date(2027, 5, 24)), None);
    }

    #[test]
    fn thanksgiving_is_fourth_thursday() {
        assert_eq!(holiday_name(date(2026, 11, 26)), Some("Thanksgiving"));
        assert_eq!(holiday_name(date(2026, 11, 19)), None);
        assert_eq!(holiday_name(date(2025, 11, 27)), Some("Thanksgiving"));
    }

    #[test]
    fn fixed_rule_checks_month_and_day() {
        let rule = HolidayRule::Fixed {
            name: "Test Day",
            month: 3,
            day: 3,
        };
        assert_eq!(rule.matches(date(2026, 3, 3)), Some("Test Day"));
        assert_eq!(rule.matches(date(2026, 4, 3)), None);
    }

    #[test]
    fn non_allow_listed_names_do_not_delay() {
        assert!(!is_delay_holiday("Columbus Day"));
        assert!(is_delay_holiday("Labor Day"));
    }

    #[test]
    fn duplicate_exception_dates_keep_first_reason() {
        let table = ExceptionTable::new([
            ExceptionEntry {
                date: date(2026, 2, 9),
                reason: "Snow Storm".to_owned(),
            },
            ExceptionEntry {
                date: date(2026, 2, 9),
                reason: "Ice".to_owned(),
            },
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.exception_reason(date(2026, 2, 9)), Some("Snow Storm"));
        assert_eq!(table.exception_reason(date(2026, 2, 10)), None);
    }

    #[test]
    fn holiday_beats_exception_on_same_date() {
        let table = ExceptionTable::new([ExceptionEntry {
            date: date(2026, 9, 7),
            reason: "Flooding".to_owned(),
        }]);
        assert_eq!(
            delay_reason(date(2026, 9, 7), &table).as_deref(),
            Some("Labor Day")
        );
    }
}
