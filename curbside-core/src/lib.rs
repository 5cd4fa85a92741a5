//! Core engines and service wiring for the curbside recycling calendar.

/// Calendar export encoders (spreadsheet import and iCalendar).
pub mod export;
/// Zone polygons and point-in-polygon resolution.
pub mod geometry;
/// Recognized holidays and the delay allow-list.
pub mod holiday;
/// Domain models and identifiers shared by all components.
pub mod model;
/// Near-term "pickup changed" notice evaluation.
pub mod notice;
/// Bundle of data sources and ports describing a single town.
pub mod plugin;
/// Traits describing injectable data sources and external collaborators.
pub mod ports;
/// Derivation of calendar reminders from a pickup schedule.
pub mod reminder;
/// Full-year pickup schedule generation.
pub mod schedule;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
