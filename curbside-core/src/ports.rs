//! Traits describing injectable data sources, external collaborators, and shared helper types.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Error as ReqwestError;

use crate::model::GeoPoint;

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to external collaborators.
pub enum PortError {
    /// Network layer failed.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// Provider returned a coordinate that is not a decimal number.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Source of ad hoc pickup disruptions keyed by exact calendar date.
pub trait ExceptionSource: Send + Sync {
    /// Reason pickups are delayed on `date`, if any.
    fn exception_reason(&self, date: NaiveDate) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq)]
/// Address candidate returned by a geocoding lookup.
pub struct GeocodeCandidate {
    /// Short human-readable address.
    pub label: String,
    /// Coordinate of the address.
    pub point: GeoPoint,
}

#[async_trait]
/// Trait for address-to-coordinate lookup backends.
pub trait GeocodePort: Send + Sync {
    /// Look up candidates for a free-text address.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the provider request fails or returns malformed data.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<GeocodeCandidate>, PortError>;
}
