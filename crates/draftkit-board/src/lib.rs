//! # DraftKit Board
//!
//! The interactive drafting surface: a world of line segments, a
//! pan/zoom/rotate camera, a catalog of GOST line styles with procedural
//! stroke geometry, nearest-segment picking, and the pointer-driven
//! interaction state machine that ties them together.
//!
//! ## Architecture
//!
//! ```text
//! Controller (Idle / Creating / Panning state machine)
//!   ├── Canvas (segments, preview, selection, defaults)
//!   │     ├── Viewport (world <-> screen transform)
//!   │     ├── StyleCatalog (GOST + custom line styles)
//!   │     └── SelectionManager (nearest-segment picking)
//!   └── renderer (grid, overlays, strokes -> DrawSurface)
//!         └── stroke (dash / wave / zigzag primitives)
//! ```
//!
//! The host environment owns the window, feeds raw pointer/keyboard
//! events into [`Controller`], and supplies a [`DrawSurface`] to render
//! onto. A headless tiny-skia surface is bundled in [`raster`].

pub mod canvas;
pub mod controller;
pub mod fonts;
pub mod raster;
pub mod renderer;
pub mod selection;
pub mod stroke;
pub mod styles;
pub mod surface;
pub mod viewport;

pub use canvas::{Canvas, SegmentObject};
pub use controller::{
    Controller, Field, Key, Mode, Modifiers, Outcome, PointerButton, PointerEvent, PointerKind,
    StatusInfo,
};
pub use raster::RasterSurface;
pub use selection::SelectionManager;
pub use stroke::{DrawPrimitive, StrokeParams};
pub use styles::{BaseType, DashLimits, DashPattern, LineStyle, StyleCatalog, DEFAULT_STYLE_ID};
pub use surface::{DrawSurface, TextAnchor};
pub use viewport::Viewport;
