//! RGBA color with `#rrggbb` / `#rrggbbaa` text form.
//!
//! Settings files and the host UI exchange colors as hex strings, so the
//! serde representation is the hex form rather than a struct.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    /// Default grid line color.
    pub const LIGHT_GRAY: Color = Color::rgb(224, 224, 224);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        // Fixed-offset slicing below requires one byte per digit
        if !hex.is_ascii() {
            return Err(format!("Invalid color '{}': expected #rrggbb", s));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("Invalid color '{}': {}", s, e))
        };
        match hex.len() {
            6 => Ok(Color::rgb(parse(0..2)?, parse(2..4)?, parse(4..6)?)),
            8 => Ok(Color::rgba(
                parse(0..2)?,
                parse(2..4)?,
                parse(4..6)?,
                parse(6..8)?,
            )),
            _ => Err(format!("Invalid color '{}': expected #rrggbb", s)),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c: Color = "#e0e0e0".parse().unwrap();
        assert_eq!(c, Color::LIGHT_GRAY);
        assert_eq!(c.to_hex(), "#e0e0e0");

        let translucent = Color::rgba(0, 255, 255, 128);
        assert_eq!(translucent.to_hex().parse::<Color>().unwrap(), translucent);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("blue".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn rejects_non_ascii_without_panicking() {
        // Multi-byte characters can match the expected byte length
        assert!("\u{2603}\u{2603}".parse::<Color>().is_err());
        assert!("#caf\u{e9}caf\u{e9}".parse::<Color>().is_err());
        assert!(serde_json::from_str::<Color>("\"\u{2603}\u{2603}\"").is_err());
    }
}
