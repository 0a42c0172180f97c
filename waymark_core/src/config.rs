//! Configuration file support for Waymark.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/waymark/config.toml`.

use crate::{Error, Result, SpeedFormula};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub geolocation: GeolocationConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Map view configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
        }
    }
}

/// Where the start position comes from when no CLI override is given
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GeolocationConfig {
    /// JSON position file maintained by an external locator
    #[serde(default)]
    pub position_file: Option<PathBuf>,

    /// Fixed fallback position used when no locator is available
    #[serde(default)]
    pub fallback: Option<FallbackPosition>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct FallbackPosition {
    pub lat: f64,
    pub lng: f64,
}

/// Display configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Use the unit-consistent km/h speed formula instead of the
    /// historical one. Off by default: existing displays expect the
    /// historical values.
    #[serde(default)]
    pub corrected_speed_units: bool,
}

// Default value functions
fn default_zoom() -> u8 {
    15
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("waymark").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// The speed formula selected by this configuration
    pub fn speed_formula(&self) -> SpeedFormula {
        if self.display.corrected_speed_units {
            SpeedFormula::KmPerHour
        } else {
            SpeedFormula::Legacy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.map.zoom, 15);
        assert!(config.geolocation.position_file.is_none());
        assert!(config.geolocation.fallback.is_none());
        assert!(!config.display.corrected_speed_units);
        assert_eq!(config.speed_formula(), SpeedFormula::Legacy);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.map.zoom = 13;
        config.geolocation.fallback = Some(FallbackPosition { lat: 59.91, lng: 10.75 });

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.map.zoom, 13);
        let fallback = parsed.geolocation.fallback.unwrap();
        assert_eq!(fallback.lat, 59.91);
        assert_eq!(fallback.lng, 10.75);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[display]
corrected_speed_units = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.display.corrected_speed_units);
        assert_eq!(config.speed_formula(), SpeedFormula::KmPerHour);
        assert_eq!(config.map.zoom, 15); // default
    }

    #[test]
    fn test_save_and_load_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.geolocation.position_file = Some(temp_dir.path().join("position.json"));
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.geolocation.position_file,
            Some(temp_dir.path().join("position.json"))
        );
    }
}
