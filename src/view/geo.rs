use crate::entity::Coordinates;
use crate::error::{GeonotesError, Result};

/// Environment variable read by [`EnvGeolocator`], formatted `lat,lng`.
pub const POSITION_ENV: &str = "GEONOTES_POSITION";

const LOCATION_UNAVAILABLE: &str =
    "Could not get your location. Check your location services and try again later!";

/// Source of the device's current position.
pub trait Geolocator {
    fn current_position(&self) -> Result<Coordinates>;
}

/// A geolocator with a known answer. `None` behaves like a denied request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedGeolocator(pub Option<Coordinates>);

impl Geolocator for FixedGeolocator {
    fn current_position(&self) -> Result<Coordinates> {
        self.0
            .ok_or_else(|| GeonotesError::Location(LOCATION_UNAVAILABLE.to_string()))
    }
}

/// Reads the position from `GEONOTES_POSITION`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvGeolocator;

impl Geolocator for EnvGeolocator {
    fn current_position(&self) -> Result<Coordinates> {
        let raw = std::env::var(POSITION_ENV)
            .map_err(|_| GeonotesError::Location(LOCATION_UNAVAILABLE.to_string()))?;
        raw.parse().map_err(|e| {
            tracing::warn!(value = %raw, error = %e, "unparseable position");
            GeonotesError::Location(LOCATION_UNAVAILABLE.to_string())
        })
    }
}
