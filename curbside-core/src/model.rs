//! Domain data structures for zones, pickups, reminders, and season settings.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
/// Weekday-keyed collection area.
pub enum Zone {
    /// Zones 1 & 2, collected on Mondays.
    #[default]
    Monday,
    /// Zones 3 & 4, collected on Tuesdays.
    Tuesday,
    /// Zones 5 & 6, collected on Wednesdays.
    Wednesday,
}

impl Zone {
    /// All zones in resolution priority order.
    pub const ALL: [Zone; 3] = [Zone::Monday, Zone::Tuesday, Zone::Wednesday];

    /// Day of week the zone is collected on.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Zone::Monday => Weekday::Mon,
            Zone::Tuesday => Weekday::Tue,
            Zone::Wednesday => Weekday::Wed,
        }
    }

    /// Weekday index counted from Monday = 1.
    #[must_use]
    pub const fn day_index(self) -> u32 {
        match self {
            Zone::Monday => 1,
            Zone::Tuesday => 2,
            Zone::Wednesday => 3,
        }
    }

    /// Human-friendly label naming the zone numbers and pickup day.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Zone::Monday => "Zone 1 & 2 (Monday Pickup)",
            Zone::Tuesday => "Zone 3 & 4 (Tuesday Pickup)",
            Zone::Wednesday => "Zone 5 & 6 (Wednesday Pickup)",
        }
    }

    /// Identifier used in file names and persisted preferences.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Monday => "Monday",
            Zone::Tuesday => "Tuesday",
            Zone::Wednesday => "Wednesday",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown zone: {0}")]
/// Returned when a zone identifier does not name a known zone.
pub struct ParseZoneError(pub String);

impl FromStr for Zone {
    type Err = ParseZoneError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Zone::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseZoneError(raw.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Material collected in a given week. Weeks alternate strictly.
pub enum Material {
    /// Bottles, cans, and containers.
    Commingled,
    /// Paper and cardboard.
    Fibers,
}

impl Material {
    /// The material collected the following week.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Material::Commingled => Material::Fibers,
            Material::Fibers => Material::Commingled,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Material::Commingled => "Commingled",
            Material::Fibers => "Fibers",
        }
    }

    /// Heading used on the sorting guidelines.
    #[must_use]
    pub const fn guideline_title(self) -> &'static str {
        match self {
            Material::Commingled => "Commingled Week: Glass, Metal & Plastic",
            Material::Fibers => "Fiber Week: Cardboard & Paper",
        }
    }

    /// Items that go out in this material's week.
    #[must_use]
    pub const fn accepted_items(self) -> &'static [&'static str] {
        match self {
            Material::Commingled => COMMINGLED_ACCEPTED,
            Material::Fibers => FIBERS_ACCEPTED,
        }
    }

    /// Items never accepted at the curb, whatever the week.
    #[must_use]
    pub const fn rejected_items() -> &'static [&'static str] {
        REJECTED_ITEMS
    }
}

const FIBERS_ACCEPTED: &[&str] = &[
    "Corrugated Cardboard (Flattened, no packing materials)",
    "Boxboard (Flattened cereal boxes, etc)",
    "Paper Bags",
    "Junk Mail (Including window envelopes)",
    "Office Paper",
    "Newspapers & Magazines",
    "Only Corrugated Brown Pizza Boxes (No grease, food & liner removed)",
];

const COMMINGLED_ACCEPTED: &[&str] = &[
    "#1, 2, & 5 Plastic Containers & Bottles with Caps",
    "Glass Bottles (Any Color) & Jars with Lids",
    "Aluminum cans, pie tins, & catering trays",
    "Steel/tin Food Cans",
    "Gable Top cartons (OJ, Milk, aseptic packaging)",
    "Juice Boxes (TetraPak)",
];

/// Contaminants. Anything not on an accepted list belongs in the trash.
const REJECTED_ITEMS: &[&str] = &[
    "Any materials with food or greasy residues",
    "Pizza Boxes (other than clean corrugated brown)",
    "Wax Cardboard (Produce protection)",
    "Paper/cardboard egg cartons",
    "Cardboard tubes and packaging padding",
    "Plastics #3, 4, 6, & 7 and plastics without numbers",
    "Plastic Bags & Plastic Film",
    "Polystyrene Foam (Styrofoam)",
    "Batteries, especially lithium",
    "Aerosol Cans (Under Pressure)",
    "Aluminum foil",
    "Electronics",
    "Hoses",
    "Ropes",
    "Wires",
    "Wood",
    "Stickers",
    "Corks",
    "Clothing",
    "Motor Oil Containers",
    "Light Bulbs",
    "Mirrors",
    "Window Glass",
    "Ceramic Plates",
    "Cups & Mugs",
    "Food Waste",
    "Medical Waste",
    "Hazardous Waste",
];

impl fmt::Display for Material {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One computed pickup occurrence in a zone's annual schedule.
pub struct PickupWeek {
    /// Nominal pickup date before any shift.
    pub scheduled_date: NaiveDate,
    /// Actual pickup date, one day later when delayed.
    pub pickup_date: NaiveDate,
    /// Material collected this week.
    pub material: Material,
    /// Holiday name or exception reason that shifted the pickup.
    pub delay_reason: Option<String>,
}

impl PickupWeek {
    /// Whether the pickup was shifted off its scheduled date.
    #[must_use]
    pub fn is_delayed(&self) -> bool {
        self.delay_reason.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Timed calendar entry derived from a pickup week for export.
pub struct ReminderEvent {
    /// Calendar date of the reminder.
    pub date: NaiveDate,
    /// Wall-clock start time.
    pub time: NaiveTime,
    /// Event title. Must not contain commas for spreadsheet export.
    pub subject: String,
    /// Optional longer description.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Short-lived banner announcing a shifted pickup.
pub struct Notice {
    /// Zone the notice applies to.
    pub zone: Zone,
    /// Date the pickup would normally have happened.
    pub original_date: NaiveDate,
    /// Date the pickup happens instead.
    pub new_date: NaiveDate,
    /// Holiday name or exception reason.
    pub reason: String,
}

impl Notice {
    /// Display label of the affected zone.
    #[must_use]
    pub fn zone_label(&self) -> &'static str {
        self.zone.label()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Geographic coordinate in decimal degrees.
pub struct GeoPoint {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Calendar season the schedule is generated for.
pub struct SeasonConfig {
    /// Target calendar year.
    pub year: i32,
    /// Material collected in the first week of the year.
    pub starting_material: Material,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            year: 2026,
            starting_material: Material::Commingled,
        }
    }
}
