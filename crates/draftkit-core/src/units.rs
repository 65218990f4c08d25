//! Unit handling: millimeter/pixel conversion and angle representations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pixels per millimeter at the standard 96 DPI screen.
/// 1 inch = 25.4 mm = 96 px, so 1 mm is roughly 3.78 px.
pub const MM_TO_PX: f64 = 96.0 / 25.4;

/// Angle representation used by polar input fields and status readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Degrees
    Degrees,
    /// Radians
    Radians,
}

impl Default for AngleUnit {
    fn default() -> Self {
        Self::Degrees
    }
}

impl AngleUnit {
    /// Converts a value expressed in this unit to radians.
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => value,
        }
    }

    /// Converts a value in radians to this unit.
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            Self::Degrees => radians.to_degrees(),
            Self::Radians => radians,
        }
    }

    /// Suffix appended to status readouts.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Degrees => "\u{b0}",
            Self::Radians => " rad",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrees => write!(f, "degrees"),
            Self::Radians => write!(f, "radians"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "degrees" | "deg" => Ok(Self::Degrees),
            "radians" | "rad" => Ok(Self::Radians),
            _ => Err(format!("Unknown angle unit: {}", s)),
        }
    }
}

/// Interpretation of the second-point input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Absolute x/y fields
    Cartesian,
    /// Radius/angle fields, relative to the first point
    Polar,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::Cartesian
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cartesian => write!(f, "cartesian"),
            Self::Polar => write!(f, "polar"),
        }
    }
}

impl FromStr for CoordinateSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cartesian" | "xy" => Ok(Self::Cartesian),
            "polar" => Ok(Self::Polar),
            _ => Err(format!("Unknown coordinate system: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_unit_round_trip() {
        let deg = AngleUnit::Degrees;
        assert!((deg.to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((deg.from_radians(std::f64::consts::PI) - 180.0).abs() < 1e-12);

        let rad = AngleUnit::Radians;
        assert_eq!(rad.to_radians(1.25), 1.25);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("deg".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!(
            "POLAR".parse::<CoordinateSystem>().unwrap(),
            CoordinateSystem::Polar
        );
        assert!("gradians".parse::<AngleUnit>().is_err());
    }
}
