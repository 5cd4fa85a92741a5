//! Bundle of the data sources and ports describing one town.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::export::ics::IcsCalendar;
use crate::geometry::ZoneMap;
use crate::model::GeoPoint;
use crate::ports::{ExceptionSource, GeocodePort};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a town known to curbside.
pub struct TownId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a town and its human-friendly name.
pub struct TownMeta {
    /// Unique identifier.
    pub id: TownId,
    /// Display name.
    pub name: String,
    /// Point maps are centred on.
    pub center: GeoPoint,
}

/// Everything the service needs to answer questions about one town.
pub struct TownPlugin {
    /// Static metadata describing the town.
    pub meta: TownMeta,
    /// Zone polygons.
    pub zones: ZoneMap,
    /// Ad hoc pickup disruptions.
    pub exceptions: Arc<dyn ExceptionSource>,
    /// Address lookup collaborator.
    pub geocoder: Arc<dyn GeocodePort>,
    /// Calendar export metadata.
    pub calendar: IcsCalendar,
}
