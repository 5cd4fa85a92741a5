//! Provider implementation for Maplewood, NJ: hand-drawn zone boundaries and Nominatim lookup.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use curbside_core::{
    export::ics::IcsCalendar,
    geometry::{Polygon, ZoneMap},
    holiday::ExceptionTable,
    model::GeoPoint,
    plugin::{TownId, TownMeta, TownPlugin},
    ports::{ExceptionSource, GeocodeCandidate, GeocodePort, PortError},
};

const BASE_URL: &str = "https://nominatim.openstreetmap.org";

// West, north, east, south. Biases results towards the township.
const VIEWBOX: &str = "-74.33,40.78,-74.20,40.68";
const QUERY_SUFFIX: &str = "Maplewood NJ";
const MIN_QUERY_LEN: usize = 3;

/// Map centre of the township.
pub const MAP_CENTER: GeoPoint = GeoPoint::new(40.730, -74.270);

/// South of Springfield Avenue plus the Elmwood strip.
pub const MONDAY_BOUNDARY: [(f64, f64); 8] = [
    (40.736, -74.242),
    (40.736, -74.252),
    (40.724, -74.254),
    (40.721, -74.275),
    (40.710, -74.278),
    (40.708, -74.265),
    (40.715, -74.240),
    (40.736, -74.242),
];

/// Centre wedge around Valley Street and Prospect Street.
pub const TUESDAY_BOUNDARY: [(f64, f64); 6] = [
    (40.748, -74.265),
    (40.736, -74.252),
    (40.724, -74.254),
    (40.721, -74.275),
    (40.742, -74.275),
    (40.748, -74.265),
];

/// West of Ridgewood Road up to the reservation.
pub const WEDNESDAY_BOUNDARY: [(f64, f64); 7] = [
    (40.760, -74.282),
    (40.748, -74.270),
    (40.742, -74.275),
    (40.721, -74.275),
    (40.718, -74.285),
    (40.735, -74.298),
    (40.760, -74.282),
];

/// Search result from /search?format=json
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    address: Option<PlaceAddress>,
}

/// Nested address details, present with addressdetails=1
#[derive(Debug, Deserialize)]
struct PlaceAddress {
    house_number: Option<String>,
    road: Option<String>,
}

/// Address lookup backed by the OpenStreetMap Nominatim API.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    /// Create a geocoder bound to the given HTTP client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    /// Create a geocoder talking to a different Nominatim instance.
    #[must_use]
    pub fn with_base_url<S: Into<String>>(client: Client, base_url: S) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl GeocodePort for NominatimGeocoder {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<GeocodeCandidate>, PortError> {
        let address = query.trim();
        if limit == 0 || address.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let full_query = format!("{address} {QUERY_SUFFIX}");
        let limit_s = limit.to_string();

        let req = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("format", "json"),
                ("q", full_query.as_str()),
                ("addressdetails", "1"),
                ("limit", limit_s.as_str()),
                ("countrycodes", "us"),
                ("viewbox", VIEWBOX),
                ("bounded", "1"),
            ]);

        debug!(query = %full_query, "querying nominatim");
        let places = fetch_json::<Vec<Place>>(req).await.inspect_err(|err| {
            warn!(%err, "nominatim request failed");
        })?;

        places
            .into_iter()
            .take(limit)
            .map(|place| -> Result<GeocodeCandidate, PortError> {
                let point = GeoPoint::new(parse_degrees(&place.lat)?, parse_degrees(&place.lon)?);
                Ok(GeocodeCandidate {
                    label: short_label(&place),
                    point,
                })
            })
            .collect()
    }
}

/// Build the plugin bundle for Maplewood with no ad hoc exceptions.
#[must_use]
pub fn plugin(client: Client) -> TownPlugin {
    plugin_with_exceptions(client, Arc::new(ExceptionTable::default()))
}

/// Build the plugin bundle for Maplewood with an injected exception source.
#[must_use]
pub fn plugin_with_exceptions(client: Client, exceptions: Arc<dyn ExceptionSource>) -> TownPlugin {
    TownPlugin {
        meta: town_meta(),
        zones: zone_map(),
        exceptions,
        geocoder: Arc::new(NominatimGeocoder::new(client)),
        calendar: IcsCalendar::default(),
    }
}

/// Maplewood zone boundaries.
#[must_use]
pub fn zone_map() -> ZoneMap {
    ZoneMap::new(
        Polygon::from_pairs(&MONDAY_BOUNDARY),
        Polygon::from_pairs(&TUESDAY_BOUNDARY),
        Polygon::from_pairs(&WEDNESDAY_BOUNDARY),
    )
}

fn town_meta() -> TownMeta {
    TownMeta {
        id: TownId(String::from("maplewood")),
        name: String::from("Maplewood"),
        center: MAP_CENTER,
    }
}

/// "123 Road" when Nominatim split the address, else the first segment of the display name.
fn short_label(place: &Place) -> String {
    if let Some(address) = &place.address {
        let parts: Vec<&str> = [address.house_number.as_deref(), address.road.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if !parts.is_empty() {
            return parts.join(" ");
        }
    }

    place
        .display_name
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_owned()
}

fn parse_degrees(raw: &str) -> Result<f64, PortError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_err| PortError::InvalidCoordinate(raw.to_owned()))
}

// Small helper to fetch and decode JSON with status handling.
async fn fetch_json<T: DeserializeOwned>(req: RequestBuilder) -> Result<T, PortError> {
    req.send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .json()
        .await
        .map_err(PortError::from)
}

#[cfg(test)]
mod tests {
    use curbside_core::model::Zone;

    use super::*;

    fn place(display_name: &str, house_number: Option<&str>, road: Option<&str>) -> Place {
        Place {
            lat: "40.7".to_owned(),
            lon: "-74.2".to_owned(),
            display_name: display_name.to_owned(),
            address: Some(PlaceAddress {
                house_number: house_number.map(str::to_owned),
                road: road.map(str::to_owned),
            }),
        }
    }

    #[test]
    fn label_prefers_house_number_and_road() {
        let found = place("Town Hall, 574, Valley Street", Some("574"), Some("Valley Street"));
        assert_eq!(short_label(&found), "574 Valley Street");
    }

    #[test]
    fn label_falls_back_to_display_name() {
        let found = place("Maplewood Train Station, Dunnell Road, Maplewood", None, None);
        assert_eq!(short_label(&found), "Maplewood Train Station");
    }

    #[test]
    fn interior_points_resolve_to_their_zone() {
        let zones = zone_map();
        let cases = [
            (GeoPoint::new(40.7214, -74.2580), Zone::Monday),
            (GeoPoint::new(40.7342, -74.2642), Zone::Tuesday),
            (GeoPoint::new(40.7373, -74.2808), Zone::Wednesday),
            (MAP_CENTER, Zone::Tuesday),
        ];
        for (point, zone) in cases {
            assert_eq!(zones.resolve(point), Some(zone), "{point:?}");
        }
    }

    #[test]
    fn mid_ocean_resolves_to_nothing() {
        assert_eq!(zone_map().resolve(GeoPoint::new(30.0, -40.0)), None);
        assert_eq!(zone_map().resolve(GeoPoint::new(0.0, 0.0)), None);
    }

    #[test]
    fn invalid_degrees_are_reported() {
        let err = parse_degrees("north").unwrap_err();
        assert_eq!(err.to_string(), "Invalid coordinate: north");
    }
}
