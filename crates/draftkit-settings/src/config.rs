//! Board configuration persisted between sessions.
//!
//! Supports JSON and TOML files selected by extension, stored in the
//! platform config directory by default.

use draftkit_core::constants::{
    DEFAULT_BASE_THICKNESS_MM, DEFAULT_GRID_STEP, DEFAULT_ZOOM, MAX_BASE_THICKNESS_MM, MAX_ZOOM,
    MIN_BASE_THICKNESS_MM, MIN_ZOOM,
};
use draftkit_core::units::{AngleUnit, CoordinateSystem};
use draftkit_core::{Color, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas color choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Canvas background
    pub background: Color,
    /// Grid lines
    pub grid: Color,
    /// Default segment color
    pub segment: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            grid: Color::LIGHT_GRAY,
            segment: Color::BLACK,
        }
    }
}

/// Persistent board settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Canvas colors
    pub colors: ColorSettings,
    /// World-unit grid spacing
    pub grid_step: f64,
    /// Base line thickness S in millimeters, GOST range 0.5..=1.4
    pub base_thickness_mm: f64,
    /// Zoom applied on startup and reset
    pub default_zoom: f64,
    /// Angle unit for polar entry and readouts
    pub angle_unit: AngleUnit,
    /// Second-point entry interpretation
    pub coordinate_system: CoordinateSystem,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            colors: ColorSettings::default(),
            grid_step: DEFAULT_GRID_STEP,
            base_thickness_mm: DEFAULT_BASE_THICKNESS_MM,
            default_zoom: DEFAULT_ZOOM,
            angle_unit: AngleUnit::Degrees,
            coordinate_system: CoordinateSystem::Cartesian,
        }
    }
}

impl BoardSettings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default settings file location:
    /// `<platform config dir>/draftkit/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("draftkit").join("settings.json"))
    }

    /// Loads settings from the default location, falling back to
    /// defaults when the file does not exist yet.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("no platform config directory; using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "settings load failed; using defaults");
                Self::default()
            }
        }
    }

    /// Loads settings from a JSON or TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let settings: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| Error::Config {
                message: format!("invalid JSON settings: {}", e),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content).map_err(|e| Error::Config {
                message: format!("invalid TOML settings: {}", e),
            })?
        } else {
            return Err(Error::Config {
                message: "settings file must be .json or .toml".to_string(),
            });
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Saves settings to a JSON or TOML file, creating parent
    /// directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self).map_err(|e| Error::Config {
                message: format!("settings serialization failed: {}", e),
            })?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self).map_err(|e| Error::Config {
                message: format!("settings serialization failed: {}", e),
            })?
        } else {
            return Err(Error::Config {
                message: "settings file must be .json or .toml".to_string(),
            });
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Saves to the default location.
    pub fn save_default(&self) -> Result<()> {
        let path = Self::default_path().ok_or_else(|| Error::Config {
            message: "no platform config directory".to_string(),
        })?;
        self.save_to_file(&path)
    }

    /// Validates value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.grid_step > 0.0) {
            return Err(Error::InvalidGridStep {
                value: self.grid_step,
            });
        }
        if !(MIN_BASE_THICKNESS_MM..=MAX_BASE_THICKNESS_MM).contains(&self.base_thickness_mm) {
            return Err(Error::Config {
                message: format!(
                    "base thickness {} mm outside {}..={} mm",
                    self.base_thickness_mm, MIN_BASE_THICKNESS_MM, MAX_BASE_THICKNESS_MM
                ),
            });
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.default_zoom) {
            return Err(Error::Config {
                message: format!("default zoom {} outside {}..={}", self.default_zoom, MIN_ZOOM, MAX_ZOOM),
            });
        }
        Ok(())
    }

    /// Base thickness converted to device pixels at 100% zoom.
    pub fn base_thickness_px(&self) -> f64 {
        (self.base_thickness_mm * draftkit_core::units::MM_TO_PX).max(1.0)
    }
}
