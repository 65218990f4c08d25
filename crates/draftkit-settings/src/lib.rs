//! DraftKit settings crate.
//!
//! Persistent board configuration: colors, grid, base line thickness,
//! default zoom, and coordinate entry preferences. Files live in the
//! platform config directory and may be JSON or TOML.

pub mod config;

pub use config::{BoardSettings, ColorSettings};
