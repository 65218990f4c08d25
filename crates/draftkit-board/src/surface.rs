//! Backend-independent drawing surface.
//!
//! The renderer emits calls against this trait; the raster backend in
//! [`crate::raster`] is the bundled implementation, and a host GUI can
//! supply its own to draw straight into its widget toolkit.

use draftkit_core::Color;

/// Horizontal anchoring for [`DrawSurface::draw_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A surface the renderer can draw a frame onto. All coordinates are in
/// screen pixels.
pub trait DrawSurface {
    /// Surface size in pixels.
    fn size(&self) -> (f64, f64);

    /// Fills the whole surface with one color.
    fn clear(&mut self, color: Color);

    /// Draws a straight stroked line with round caps.
    fn draw_line(&mut self, p1: (f64, f64), p2: (f64, f64), width: f64, color: Color);

    /// Draws a connected stroked polyline. With `smooth` set the
    /// segments are rounded into a spline instead of sharp joints.
    fn draw_polyline(&mut self, points: &[(f64, f64)], width: f64, color: Color, smooth: bool);

    /// Draws a filled oval inside the given bounding rectangle.
    fn draw_oval(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, fill: Color);

    /// Draws a text label. Backends without font support may ignore
    /// this.
    fn draw_text(&mut self, x: f64, y: f64, text: &str, size: f32, color: Color, anchor: TextAnchor);
}
