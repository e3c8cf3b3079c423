//! Session configuration, read from an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CtaError;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "cta-analyzer.toml";
pub const DEFAULT_DATABASE: &str = "CTA2_L_daily_ridership.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// SQLite dataset with the Stations/Stops/Lines/StopDetails/Ridership tables
    pub database: PathBuf,
    pub charts: ChartConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from(DEFAULT_DATABASE),
            charts: ChartConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, CtaError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CtaError> {
        let text = fs::read_to_string(path).map_err(|e| {
            CtaError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&text)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

/// Chart output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Directory displayed charts are written to
    pub output_dir: PathBuf,
    /// Map image drawn behind the nearby-stations plot
    pub map_background: PathBuf,
    /// Where the nearby-stations plot is always saved
    pub map_output: PathBuf,
    /// Area covered by the background map
    pub map_extent: MapExtent,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            map_background: PathBuf::from("chicago.png"),
            map_output: PathBuf::from("stations_map.svg"),
            map_extent: MapExtent::default(),
            width: 1000,
            height: 600,
        }
    }
}

/// Longitude/latitude rectangle covered by the background map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapExtent {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Default for MapExtent {
    fn default() -> Self {
        Self {
            lon_min: -87.9277,
            lon_max: -87.5569,
            lat_min: 41.7012,
            lat_max: 42.0868,
        }
    }
}
