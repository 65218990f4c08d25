//! Viewport and coordinate transformation for the drafting board.
//!
//! Handles conversion between pixel coordinates (screen space) and world
//! coordinates (drawing space). Manages pan, zoom, and view rotation with
//! proper coordinate mapping; the screen origin sits at the view center
//! and the Y axis is flipped (screen Y grows downward, world Y upward).

use std::fmt;

use draftkit_core::constants::{
    DEFAULT_ZOOM, FIT_MARGIN, MAX_ZOOM, MIN_ZOOM, ROTATE_SNAP_DEG, ROTATE_SNAP_TOLERANCE_DEG,
};
use draftkit_core::{BoundingBox, Point};

/// Camera state plus the drawable size it maps onto.
#[derive(Debug, Clone)]
pub struct Viewport {
    pan_x: f64,
    pan_y: f64,
    zoom: f64,
    rotation: f64,
    view_width: f64,
    view_height: f64,
}

impl Viewport {
    /// Creates a viewport for a drawable of the given size, at the
    /// default zoom with no pan and no rotation.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: DEFAULT_ZOOM,
            rotation: 0.0,
            view_width,
            view_height,
        }
    }

    /// Gets the drawable width.
    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    /// Gets the drawable height.
    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Sets the drawable dimensions (typically called when the window resizes).
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Gets the current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the legal range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zoom as a percentage of the default level for status display.
    pub fn zoom_percent(&self) -> f64 {
        self.zoom / DEFAULT_ZOOM * 100.0
    }

    /// Gets the pan offset (X component, screen pixels).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y component, screen pixels).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Gets the view rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Gets the view rotation in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    /// Sets the view rotation in radians.
    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = radians;
    }

    /// Converts world coordinates to screen coordinates.
    ///
    /// In order: rotate about the world origin, scale by zoom, then
    /// translate by pan and re-center on the view center, flipping Y.
    ///
    /// ```text
    /// screen_x = cx + pan_x + (rx * zoom)
    /// screen_y = cy + pan_y - (ry * zoom)
    /// ```
    pub fn world_to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let cx = self.view_width / 2.0;
        let cy = self.view_height / 2.0;

        let (sin, cos) = self.rotation.sin_cos();
        let rx = world_x * cos - world_y * sin;
        let ry = world_x * sin + world_y * cos;

        (cx + self.pan_x + rx * self.zoom, cy + self.pan_y - ry * self.zoom)
    }

    /// Converts a world point to screen coordinates.
    pub fn world_point_to_screen(&self, point: &Point) -> (f64, f64) {
        self.world_to_screen(point.x, point.y)
    }

    /// Converts screen coordinates to world coordinates.
    ///
    /// Undoes the forward transform in reverse order: remove pan and
    /// zoom (negating Y), then rotate back by the negated angle.
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64) -> Point {
        let cx = self.view_width / 2.0;
        let cy = self.view_height / 2.0;

        let unscaled_x = (screen_x - cx - self.pan_x) / self.zoom;
        let unscaled_y = -(screen_y - cy - self.pan_y) / self.zoom;

        let (sin, cos) = (-self.rotation).sin_cos();
        Point::new(
            unscaled_x * cos - unscaled_y * sin,
            unscaled_x * sin + unscaled_y * cos,
        )
    }

    /// Zooms by `factor` while keeping the world point under the given
    /// screen position fixed.
    ///
    /// Captures the world point under the cursor, applies the clamped
    /// zoom, then shifts the pan by however far that point moved.
    pub fn zoom_at_point(&mut self, factor: f64, screen_x: f64, screen_y: f64) {
        let anchor = self.screen_to_world(screen_x, screen_y);

        self.set_zoom(self.zoom * factor);

        let (sx_new, sy_new) = self.world_point_to_screen(&anchor);
        self.pan_x += screen_x - sx_new;
        self.pan_y += screen_y - sy_new;
    }

    /// Zooms by `factor` about the view center.
    pub fn zoom_at_center(&mut self, factor: f64) {
        self.zoom_at_point(factor, self.view_width / 2.0, self.view_height / 2.0);
    }

    /// Frames the given bounds in the viewport, reserving `margin`
    /// (fraction per side pair) of the view as padding.
    ///
    /// `None` or an empty box resets pan to the origin and zoom to the
    /// default. A zero-extent direction is treated as 1 world unit so a
    /// single point or an axis-aligned segment still frames sensibly.
    pub fn fit_to_bounds(&mut self, bounds: Option<&BoundingBox>, margin: f64) {
        let bbox = match bounds {
            Some(b) if !b.is_empty() => b,
            _ => {
                self.pan_x = 0.0;
                self.pan_y = 0.0;
                self.zoom = DEFAULT_ZOOM;
                return;
            }
        };

        let world_w = if bbox.width() == 0.0 { 1.0 } else { bbox.width() };
        let world_h = if bbox.height() == 0.0 { 1.0 } else { bbox.height() };

        let scale_x = self.view_width * (1.0 - margin) / world_w;
        let scale_y = self.view_height * (1.0 - margin) / world_h;
        self.set_zoom(scale_x.min(scale_y));

        // Place the bbox center on the view center. From the forward
        // transform with rotation ignored:
        //   screen_x = cx + pan_x + wx * zoom  =>  pan_x = -wx * zoom
        //   screen_y = cy + pan_y - wy * zoom  =>  pan_y = +wy * zoom
        let center = bbox.center();
        self.pan_x = -center.x * self.zoom;
        self.pan_y = center.y * self.zoom;
    }

    /// Frames bounds with the standard margin.
    pub fn fit_to_view(&mut self, bounds: Option<&BoundingBox>) {
        self.fit_to_bounds(bounds, FIT_MARGIN);
    }

    /// Rotates the view by `delta_deg` degrees.
    ///
    /// With `snap` enabled the rotation moves in whole 90-degree
    /// increments: an unaligned angle first snaps to the nearest
    /// multiple, an already-aligned one (within 1 degree) steps to the
    /// next multiple in the requested direction.
    pub fn rotate_by(&mut self, delta_deg: f64, snap: bool) {
        if !snap {
            self.rotation += delta_deg.to_radians();
            return;
        }

        let current_deg = self.rotation.to_degrees();
        let snapped_deg = (current_deg / ROTATE_SNAP_DEG).round() * ROTATE_SNAP_DEG;

        let target_deg = if (snapped_deg - current_deg).abs() < ROTATE_SNAP_TOLERANCE_DEG {
            snapped_deg + ROTATE_SNAP_DEG.copysign(delta_deg)
        } else {
            snapped_deg
        };
        self.rotation = target_deg.to_radians();
    }

    /// Resets pan, zoom, and rotation to their defaults.
    pub fn reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom = DEFAULT_ZOOM;
        self.rotation = 0.0;
    }

    /// World-space bounds of the visible area: the four screen corners
    /// mapped back to world space. Used by the grid renderer.
    pub fn visible_world_bounds(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        for (sx, sy) in [
            (0.0, 0.0),
            (self.view_width, 0.0),
            (self.view_width, self.view_height),
            (0.0, self.view_height),
        ] {
            bbox.expand(&self.screen_to_world(sx, sy));
        }
        bbox
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.0}% | Pan: ({:.1}, {:.1}) | Rotation: {:.1}\u{b0}",
            self.zoom_percent(),
            self.pan_x,
            self.pan_y,
            self.rotation_degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_view_center() {
        let vp = Viewport::new(800.0, 600.0);
        let (sx, sy) = vp.world_to_screen(0.0, 0.0);
        assert_eq!((sx, sy), (400.0, 300.0));
    }

    #[test]
    fn y_axis_is_inverted() {
        let vp = Viewport::new(800.0, 600.0);
        let (_, sy_up) = vp.world_to_screen(0.0, 10.0);
        let (_, sy_down) = vp.world_to_screen(0.0, -10.0);
        assert!(sy_up < 300.0);
        assert!(sy_down > 300.0);
    }

    #[test]
    fn snap_rotation_steps_in_whole_quarters() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.rotate_by(90.0, true);
        vp.rotate_by(90.0, true);
        assert!((vp.rotation() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn snap_rotation_first_aligns_an_odd_angle() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_rotation(13.0f64.to_radians());
        vp.rotate_by(1.0, true);
        assert!((vp.rotation_degrees() - 0.0).abs() < 1e-9);
        // Now aligned, the next snap steps a full quarter
        vp.rotate_by(1.0, true);
        assert!((vp.rotation_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_without_snap_accumulates() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.rotate_by(1.0, false);
        vp.rotate_by(1.0, false);
        assert!((vp.rotation_degrees() - 2.0).abs() < 1e-9);
    }
}
