mod note;

pub use note::{format_date, short_id, Note};

use serde::{Deserialize, Serialize};

use crate::error::{GeonotesError, Result};

/// A validated latitude/longitude pair.
///
/// Serialized as a two-element array `[lat, lng]`, which is the shape the
/// persisted note collection uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    lat: f64,
    lng: f64,
}

impl Coordinates {
    /// Map center used when no position is known.
    pub const NEW_YORK: Coordinates = Coordinates {
        lat: 40.795,
        lng: -73.957,
    };

    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeonotesError::validation(format!(
                "Coordinates must be finite numbers, got ({}, {})",
                lat, lng
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GeonotesError::validation(format!(
                "Latitude {} is outside [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(GeonotesError::validation(format!(
                "Longitude {} is outside [-180, 180]",
                lng
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl TryFrom<[f64; 2]> for Coordinates {
    type Error = GeonotesError;

    fn try_from(value: [f64; 2]) -> Result<Self> {
        Coordinates::new(value[0], value[1])
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

impl std::str::FromStr for Coordinates {
    type Err = GeonotesError;

    /// Parses `"lat,lng"`.
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeonotesError::validation(format!("Expected 'lat,lng', got '{}'", s)))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| GeonotesError::validation(format!("Invalid latitude: {}", lat.trim())))?;
        let lng: f64 = lng
            .trim()
            .parse()
            .map_err(|_| GeonotesError::validation(format!("Invalid longitude: {}", lng.trim())))?;
        Coordinates::new(lat, lng)
    }
}

/// Opaque reference to a marker placed by a `MapView`.
///
/// Only meaningful for the rendering session that produced it; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "marker#{}", self.0)
    }
}
