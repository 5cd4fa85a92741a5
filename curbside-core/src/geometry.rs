//! Zone polygons and point-in-polygon resolution.

use crate::model::{GeoPoint, Zone};

#[derive(Debug, Clone, PartialEq)]
/// Closed ring of vertices. The last vertex may repeat the first.
pub struct Polygon {
    vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Build a polygon from `(latitude, longitude)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self {
            vertices: pairs
                .iter()
                .map(|&(lat, lng)| GeoPoint::new(lat, lng))
                .collect(),
        }
    }

    /// Polygon vertices in ring order.
    #[must_use]
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Ray-casting parity test.
    ///
    /// Each edge whose longitude span strictly straddles the point toggles the result when the
    /// crossing lies beyond the point's latitude. Points on an edge have no defined membership.
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        let Some(&last) = self.vertices.last() else {
            return false;
        };

        let mut inside = false;
        let mut prev = last;
        for &current in &self.vertices {
            let straddles = (current.lng > point.lng) != (prev.lng > point.lng);
            if straddles {
                let crossing_lat = (prev.lat - current.lat) * (point.lng - current.lng)
                    / (prev.lng - current.lng)
                    + current.lat;
                if point.lat < crossing_lat {
                    inside = !inside;
                }
            }
            prev = current;
        }
        inside
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Polygon for each zone, resolved in priority order.
pub struct ZoneMap {
    monday: Polygon,
    tuesday: Polygon,
    wednesday: Polygon,
}

impl ZoneMap {
    /// Build a map from one polygon per zone.
    #[must_use]
    pub fn new(monday: Polygon, tuesday: Polygon, wednesday: Polygon) -> Self {
        Self {
            monday,
            tuesday,
            wednesday,
        }
    }

    /// Polygon owned by `zone`.
    #[must_use]
    pub fn polygon(&self, zone: Zone) -> &Polygon {
        match zone {
            Zone::Monday => &self.monday,
            Zone::Tuesday => &self.tuesday,
            Zone::Wednesday => &self.wednesday,
        }
    }

    /// First zone, in Monday → Tuesday → Wednesday order, whose polygon contains the point.
    #[must_use]
    pub fn resolve(&self, point: GeoPoint) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.polygon(zone).contains(point))
    }
}
