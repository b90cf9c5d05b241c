use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::Coordinates;
use crate::error::Result;

pub const CONFIG_FILE: &str = "config.yaml";

/// Map view settings, stored as YAML next to the note database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Zoom level used when flying to a note or to the current location
    pub zoom_level: u8,
    /// Where the map starts when no position is known
    pub default_center: Coordinates,
    /// Whether pans are animated
    pub animate: bool,
    pub pan_duration_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_level: 15,
            default_center: Coordinates::NEW_YORK,
            animate: true,
            pan_duration_secs: 1.0,
        }
    }
}

impl Config {
    /// Load the config from `dir`, falling back to defaults when the file is absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        let raw = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.zoom_level, 15);
        assert_eq!(config.default_center.lat(), 40.795);
        assert_eq!(config.default_center.lng(), -73.957);
        assert!(config.animate);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(Config::load(tmp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            zoom_level: 12,
            animate: false,
            ..Config::default()
        };
        config.save(tmp.path()).unwrap();

        assert_eq!(Config::load(tmp.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "zoom_level: 9\n").unwrap();

        let config = Config::load(tmp.path()).unwrap();
        assert_eq!(config.zoom_level, 9);
        assert_eq!(config.pan_duration_secs, 1.0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "zoom_level: [nope").unwrap();

        assert!(Config::load(tmp.path()).is_err());
    }
}
