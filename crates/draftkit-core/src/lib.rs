//! # DraftKit Core
//!
//! Leaf types shared by every DraftKit crate: Cartesian geometry,
//! colors, measurement units, and error handling. Nothing in here knows
//! about cameras, styles, or rendering.

pub mod color;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod units;

pub use color::Color;
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Point, Segment};
pub use units::{AngleUnit, CoordinateSystem};
