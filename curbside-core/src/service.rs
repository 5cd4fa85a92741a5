//! High-level service facade combining the engines with a town's data.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::export::{
    DEFAULT_FILE_PREFIX, ExportError, ExportFile, ExportFormat, csv, export_file_name,
};
use crate::model::{GeoPoint, Notice, PickupWeek, ReminderEvent, SeasonConfig, Zone};
use crate::notice::current_notice;
use crate::plugin::TownPlugin;
use crate::ports::{GeocodeCandidate, PortError};
use crate::reminder::{ReminderOptions, build_reminders};
use crate::schedule::generate_schedule;

#[derive(Debug, Clone, PartialEq)]
/// Geocoded address together with the zone it falls in.
pub struct ZoneMatch {
    /// Address returned by the geocoder.
    pub candidate: GeocodeCandidate,
    /// Owning zone, or `None` when outside every polygon.
    pub zone: Option<Zone>,
}

/// Public entry point for schedules, notices, zone lookup, and exports.
pub struct CurbsideService {
    town: Arc<TownPlugin>,
    season: SeasonConfig,
    file_prefix: String,
}

impl CurbsideService {
    /// Create a new service bound to the provided town and season.
    #[must_use]
    pub fn new(town: Arc<TownPlugin>, season: SeasonConfig) -> Self {
        Self {
            town,
            season,
            file_prefix: DEFAULT_FILE_PREFIX.to_owned(),
        }
    }

    /// Override the prefix used for export file names.
    #[must_use]
    pub fn with_file_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Town the service answers for.
    #[must_use]
    pub fn town(&self) -> &TownPlugin {
        &self.town
    }

    /// Season schedules are generated for.
    #[must_use]
    pub fn season(&self) -> &SeasonConfig {
        &self.season
    }

    /// Full-year schedule for a zone.
    #[must_use]
    pub fn schedule(&self, zone: Zone) -> Vec<PickupWeek> {
        let weeks = generate_schedule(zone, &self.season, self.town.exceptions.as_ref());
        debug!(
            %zone,
            year = self.season.year,
            weeks = weeks.len(),
            delayed = weeks.iter().filter(|week| week.is_delayed()).count(),
            "generated schedule"
        );
        weeks
    }

    /// Full-year schedule for a zone given by name. Unknown names yield an empty schedule.
    #[must_use]
    pub fn schedule_by_name(&self, zone: &str) -> Vec<PickupWeek> {
        match zone.parse::<Zone>() {
            Ok(zone) => self.schedule(zone),
            Err(err) => {
                warn!(%err, "schedule requested for unknown zone");
                Vec::new()
            }
        }
    }

    /// Banner for a pickup shifted within the next few days.
    #[must_use]
    pub fn notice(&self, zone: Zone, today: NaiveDate) -> Option<Notice> {
        current_notice(zone, today, self.town.exceptions.as_ref())
    }

    /// Banner for a zone given by name. Unknown names never have a notice.
    #[must_use]
    pub fn notice_by_name(&self, zone: &str, today: NaiveDate) -> Option<Notice> {
        let zone = zone.parse::<Zone>().ok()?;
        self.notice(zone, today)
    }

    /// Zone whose polygon contains the point.
    #[must_use]
    pub fn resolve_zone(&self, point: GeoPoint) -> Option<Zone> {
        let zone = self.town.zones.resolve(point);
        debug!(lat = point.lat, lng = point.lng, ?zone, "resolved zone");
        zone
    }

    /// Geocode an address and resolve each candidate to a zone.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the geocoding request fails.
    pub async fn locate(&self, query: &str, limit: usize) -> Result<Vec<ZoneMatch>, PortError> {
        let candidates = self.town.geocoder.search(query, limit).await?;
        info!(query, candidates = candidates.len(), "geocoded address");

        Ok(candidates
            .into_iter()
            .map(|candidate| ZoneMatch {
                zone: self.resolve_zone(candidate.point),
                candidate,
            })
            .collect())
    }

    /// Reminder events for a zone's full-year schedule.
    #[must_use]
    pub fn reminders(&self, zone: Zone, options: &ReminderOptions) -> Vec<ReminderEvent> {
        build_reminders(&self.schedule(zone), options)
    }

    /// Encode a zone's reminders in the requested format.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the spreadsheet writer fails.
    pub fn export(
        &self,
        zone: Zone,
        options: &ReminderOptions,
        format: ExportFormat,
        created: DateTime<Utc>,
    ) -> Result<ExportFile, ExportError> {
        let events = self.reminders(zone, options);
        let contents = match format {
            ExportFormat::Csv => csv::encode(&events)?,
            ExportFormat::Ics => self.town.calendar.encode(&events, created),
        };
        let file_name = export_file_name(&self.file_prefix, zone, self.season.year, format);
        info!(%zone, file_name, events = events.len(), "encoded export");

        Ok(ExportFile {
            file_name,
            format,
            contents,
        })
    }
}
