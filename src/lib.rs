//! # DraftKit
//!
//! A 2D drafting board for straight line segments with GOST-style line
//! rendering: solid, dashed, dash-dot, and the wavy and zigzag break
//! lines, all generated procedurally and stable under pan, zoom, and
//! view rotation.
//!
//! ## Architecture
//!
//! DraftKit is organized as a workspace with multiple crates:
//!
//! 1. **draftkit-core** - Geometry, colors, units, shared errors
//! 2. **draftkit-board** - Canvas, viewport, styles, stroke generation,
//!    selection, interaction controller, rendering
//! 3. **draftkit-settings** - Persistent configuration
//! 4. **draftkit** - Binary that ties the crates together

pub use draftkit_board as board;
pub use draftkit_board::{
    Canvas, Controller, DrawSurface, Field, Key, Mode, Modifiers, Outcome, PointerButton,
    PointerEvent, PointerKind, RasterSurface, StatusInfo, Viewport,
};
pub use draftkit_core::{BoundingBox, Color, Error, Point, Result, Segment};
pub use draftkit_settings::BoardSettings;

/// Application version from the workspace manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Build timestamp stamped by build.rs.
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initializes tracing with an env-filter, INFO by default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
