//! Scene rendering.
//!
//! Draws one complete frame of a [`Canvas`] onto a [`DrawSurface`] in a
//! fixed back-to-front order: background, grid and axes, selection
//! overlays, committed segments, the in-progress preview, and finally
//! the construction point markers.

use draftkit_core::constants::{POINT_MARKER_RADIUS_PX, SELECTION_OVERLAY_WIDTH_PX};
use draftkit_core::{Color, Point};

use crate::canvas::{Canvas, SegmentObject};
use crate::stroke::{self, DrawPrimitive, StrokeParams};
use crate::surface::{DrawSurface, TextAnchor};

/// Selection overlay color.
const SELECTION_COLOR: Color = Color::CYAN;
/// Preview segment color.
const PREVIEW_COLOR: Color = Color::BLUE;
/// Construction point markers.
const MARKER_COLOR: Color = Color::BLACK;
/// World axes.
const AXIS_COLOR: Color = Color::BLACK;
/// X axis label.
const X_LABEL_COLOR: Color = Color::RED;
/// Y axis label.
const Y_LABEL_COLOR: Color = Color::GREEN;
/// Axis label text size, pixels.
const AXIS_LABEL_SIZE: f32 = 12.0;
/// Below this on-screen spacing only the axes are drawn.
const MIN_GRID_SPACING_PX: f64 = 4.0;

/// Renders one frame.
///
/// `active_points` are the construction or selection endpoints to mark,
/// as reported by [`crate::Controller::active_points`].
pub fn render_scene(
    canvas: &Canvas,
    active_points: (Option<Point>, Option<Point>),
    surface: &mut dyn DrawSurface,
) {
    surface.clear(canvas.background());
    draw_grid(canvas, surface);

    let params = StrokeParams::new(canvas.viewport().zoom(), canvas.base_thickness_px());

    // Overlays go under the geometry they highlight, drawn with the
    // segment's own stroke geometry at an oversized width
    for obj in canvas.segments() {
        if canvas.selection().contains(obj.id) {
            draw_segment(
                canvas,
                obj,
                SELECTION_COLOR,
                Some(SELECTION_OVERLAY_WIDTH_PX),
                &params,
                surface,
            );
        }
    }

    for obj in canvas.segments() {
        draw_segment(canvas, obj, obj.color, None, &params, surface);
    }

    if let Some(preview) = canvas.preview() {
        draw_segment(canvas, preview, PREVIEW_COLOR, None, &params, surface);
    }

    let (p1, p2) = active_points;
    if let Some(p1) = p1 {
        draw_marker(canvas, &p1, MARKER_COLOR, surface);
    }
    if let Some(p2) = p2 {
        draw_marker(canvas, &p2, MARKER_COLOR, surface);
    }
}

/// Expands one segment into stroke primitives and emits them.
fn draw_segment(
    canvas: &Canvas,
    obj: &SegmentObject,
    color: Color,
    width_override: Option<f64>,
    params: &StrokeParams,
    surface: &mut dyn DrawSurface,
) {
    let Some(style) = canvas.styles().get(&obj.style_id) else {
        tracing::warn!(id = obj.id, style = %obj.style_id, "segment references a missing style");
        return;
    };
    let p1 = canvas.viewport().world_point_to_screen(&obj.segment.start);
    let p2 = canvas.viewport().world_point_to_screen(&obj.segment.end);
    for primitive in stroke::generate(p1, p2, style, color, params) {
        emit(&primitive, width_override, surface);
    }
}

fn emit(primitive: &DrawPrimitive, width_override: Option<f64>, surface: &mut dyn DrawSurface) {
    match primitive {
        DrawPrimitive::Line {
            p1,
            p2,
            width,
            color,
        } => surface.draw_line(*p1, *p2, width_override.unwrap_or(*width), *color),
        DrawPrimitive::Polyline {
            points,
            width,
            color,
            smooth,
        } => surface.draw_polyline(points, width_override.unwrap_or(*width), *color, *smooth),
    }
}

fn draw_marker(canvas: &Canvas, world: &Point, color: Color, surface: &mut dyn DrawSurface) {
    let (sx, sy) = canvas.viewport().world_point_to_screen(world);
    let r = POINT_MARKER_RADIUS_PX;
    surface.draw_oval(sx - r, sy - r, sx + r, sy + r, color);
}

/// Draws the world-aligned grid, the X/Y axes, and the axis labels.
///
/// Grid lines sit on multiples of the grid step across the visible
/// world bounds; they rotate with the view because both endpoints go
/// through the world-to-screen transform. Line extents overshoot the
/// visible bounds so a rotated grid line never ends mid-screen. When
/// the grid is too dense to read, only the axes are drawn.
fn draw_grid(canvas: &Canvas, surface: &mut dyn DrawSurface) {
    let viewport = canvas.viewport();
    let bounds = viewport.visible_world_bounds();
    let step = canvas.grid_step();
    let grid_color = canvas.grid_color();

    if step <= 0.0 {
        return;
    }
    let axes_only = step * viewport.zoom() < MIN_GRID_SPACING_PX;
    let overshoot = (bounds.width().max(bounds.height())) * 2.0 + 1000.0;

    let first_x = (bounds.min_x / step).floor() as i64;
    let last_x = (bounds.max_x / step).ceil() as i64;
    for i in first_x..=last_x {
        let on_axis = i == 0;
        if axes_only && !on_axis {
            continue;
        }
        let x = i as f64 * step;
        let a = viewport.world_to_screen(x, -overshoot);
        let b = viewport.world_to_screen(x, overshoot);
        let (width, color) = if on_axis { (2.0, AXIS_COLOR) } else { (1.0, grid_color) };
        surface.draw_line(a, b, width, color);
    }
    let first_y = (bounds.min_y / step).floor() as i64;
    let last_y = (bounds.max_y / step).ceil() as i64;
    for i in first_y..=last_y {
        let on_axis = i == 0;
        if axes_only && !on_axis {
            continue;
        }
        let y = i as f64 * step;
        let a = viewport.world_to_screen(-overshoot, y);
        let b = viewport.world_to_screen(overshoot, y);
        let (width, color) = if on_axis { (2.0, AXIS_COLOR) } else { (1.0, grid_color) };
        surface.draw_line(a, b, width, color);
    }

    // Labels sit 5% in from the far edge of each visible axis, but
    // never closer to the origin than two grid steps
    if bounds.min_y < 0.0 && bounds.max_y > 0.0 && bounds.max_x > 0.0 {
        let label_x = (bounds.max_x - bounds.width() * 0.05).max(step * 2.0);
        let (sx, sy) = viewport.world_to_screen(label_x, 0.0);
        surface.draw_text(sx, sy + 5.0, "X", AXIS_LABEL_SIZE, X_LABEL_COLOR, TextAnchor::Start);
    }
    if bounds.min_x < 0.0 && bounds.max_x > 0.0 && bounds.max_y > 0.0 {
        let label_y = (bounds.max_y - bounds.height() * 0.05).max(step * 2.0);
        let (sx, sy) = viewport.world_to_screen(0.0, label_y);
        surface.draw_text(sx + 5.0, sy, "Y", AXIS_LABEL_SIZE, Y_LABEL_COLOR, TextAnchor::Start);
    }
}
