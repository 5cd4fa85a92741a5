use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime, Utc};
use curbside_core::{
    Notice, PickupWeek, Zone, ZoneMatch,
    reminder::{ReminderOptions, ReminderTiming},
    service::CurbsideService,
};
use tracing::warn;

use crate::preference::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    ZoneSelect,
    AddressSearch,
    ScheduleView,
    Guidelines,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Status {
    Info(String),
    Error(String),
}

pub(crate) struct App {
    pub service: Arc<CurbsideService>,
    pub preference: PreferenceStore,
    pub export_dir: PathBuf,

    pub screen: Screen,
    /// Screen to go back to when the guidelines close.
    pub guidelines_return: Screen,
    pub zone_list_index: usize,
    pub zone: Zone,

    pub address_input: String,
    pub matches: Vec<ZoneMatch>,
    pub match_index: usize,

    pub weeks: Vec<PickupWeek>,
    pub notice: Option<Notice>,
    pub show_all: bool,
    pub reminder: ReminderOptions,
    /// Time from `[reminders] time`; survives timing toggles.
    pub pinned_time: Option<NaiveTime>,

    pub is_loading: bool,
    pub status: Option<Status>,
}

impl App {
    pub(crate) fn new(
        service: Arc<CurbsideService>,
        preference: PreferenceStore,
        export_dir: PathBuf,
        reminder: ReminderOptions,
        pinned_time: Option<NaiveTime>,
    ) -> Self {
        let zone = preference.load(Utc::now());
        let zone_list_index = Zone::ALL
            .iter()
            .position(|candidate| *candidate == zone)
            .unwrap_or_default();

        let mut app = Self {
            service,
            preference,
            export_dir,
            screen: Screen::ZoneSelect,
            guidelines_return: Screen::ZoneSelect,
            zone_list_index,
            zone,
            address_input: String::new(),
            matches: Vec::new(),
            match_index: 0,
            weeks: Vec::new(),
            notice: None,
            show_all: false,
            reminder,
            pinned_time,
            is_loading: false,
            status: None,
        };
        app.reload_schedule();
        app
    }

    pub(crate) fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Switch to `zone`, remember it, and show its schedule.
    pub(crate) fn choose_zone(&mut self, zone: Zone) {
        self.zone = zone;
        if let Some(index) = Zone::ALL.iter().position(|candidate| *candidate == zone) {
            self.zone_list_index = index;
        }
        if let Err(err) = self.preference.save(zone, Utc::now()) {
            warn!(error = %err, "failed to save zone preference");
        }
        self.reload_schedule();
        self.show_all = false;
        self.screen = Screen::ScheduleView;
    }

    pub(crate) fn select_current_zone(&mut self) {
        if let Some(zone) = Zone::ALL.get(self.zone_list_index).copied() {
            self.choose_zone(zone);
        }
    }

    /// Use the highlighted geocoding match. Returns `false` when it lies outside every zone.
    pub(crate) fn select_current_match(&mut self) -> bool {
        let Some(found) = self.matches.get(self.match_index).cloned() else {
            self.status = Some(Status::Error(
                "No address selected (search and pick one first)".into(),
            ));
            return false;
        };

        match found.zone {
            Some(zone) => {
                self.status = Some(Status::Info(format!(
                    "{} is in the {zone} zone",
                    found.candidate.label
                )));
                self.choose_zone(zone);
                true
            }
            None => {
                self.status = Some(Status::Error(
                    "Address found, but it is outside the known recycling zones. \
                     Please select your zone manually."
                        .into(),
                ));
                false
            }
        }
    }

    pub(crate) fn toggle_timing(&mut self) {
        let timing = match self.reminder.timing {
            ReminderTiming::Night => ReminderTiming::Morning,
            ReminderTiming::Morning => ReminderTiming::Night,
        };
        self.reminder = ReminderOptions {
            timing,
            time: self.pinned_time.unwrap_or_else(|| timing.default_time()),
        };
    }

    pub(crate) fn open_guidelines(&mut self) {
        if self.screen != Screen::Guidelines {
            self.guidelines_return = self.screen;
            self.screen = Screen::Guidelines;
        }
    }

    pub(crate) fn close_guidelines(&mut self) {
        self.screen = self.guidelines_return;
    }

    fn reload_schedule(&mut self) {
        self.weeks = self.service.schedule(self.zone);
        self.notice = self.service.notice(self.zone, Self::today());
    }
}
