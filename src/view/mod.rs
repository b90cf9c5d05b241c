//! Interfaces to the rendering layer.
//!
//! The note store never touches rendering internals. It issues requests
//! through [`MapView`] and [`ListView`] and receives user input as
//! [`crate::notes::UiEvent`]s.

mod console;
mod geo;

pub use console::{format_entry, ConsoleList, ConsoleMap};
pub use geo::{EnvGeolocator, FixedGeolocator, Geolocator, POSITION_ENV};

use uuid::Uuid;

use crate::config::Config;
use crate::entity::{Coordinates, MarkerHandle, Note};
use crate::error::Result;

/// How a pan/fly request should be carried out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub zoom: u8,
    pub animated: bool,
    pub duration_secs: f64,
}

impl From<&Config> for PanOptions {
    fn from(config: &Config) -> Self {
        Self {
            zoom: config.zoom_level,
            animated: config.animate,
            duration_secs: config.pan_duration_secs,
        }
    }
}

impl Default for PanOptions {
    fn default() -> Self {
        PanOptions::from(&Config::default())
    }
}

pub trait MapView {
    /// Place a marker and return a handle identifying it.
    fn place_marker(&mut self, coords: Coordinates, label: &str) -> Result<MarkerHandle>;

    fn remove_marker(&mut self, handle: MarkerHandle) -> Result<()>;

    fn pan_to(&mut self, coords: Coordinates, options: PanOptions) -> Result<()>;
}

/// Renders note entries. Holds no note state of its own.
pub trait ListView {
    fn render_entry(&mut self, note: &Note) -> Result<()>;

    fn remove_entry(&mut self, id: Uuid) -> Result<()>;
}
