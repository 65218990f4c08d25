//! The drafting canvas: committed segments, the construction preview,
//! camera, style catalog, selection, and the drawing defaults new
//! segments inherit.
//!
//! Single-threaded by design: every mutation runs to completion inside
//! the event handler that invoked it, so the canvas is plain shared
//! mutable state owned by the interaction layer.

use draftkit_core::constants::{DEFAULT_GRID_STEP, HIT_THRESHOLD_PX};
use draftkit_core::units::MM_TO_PX;
use draftkit_core::{BoundingBox, Color, Error, Point, Result, Segment};
use serde::{Deserialize, Serialize};

use crate::selection::SelectionManager;
use crate::styles::{StyleCatalog, DEFAULT_STYLE_ID};
use crate::viewport::Viewport;

/// A committed segment with its drawing attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentObject {
    pub id: u64,
    pub segment: Segment,
    pub style_id: String,
    pub color: Color,
}

/// The drawing surface state
#[derive(Debug, Clone)]
pub struct Canvas {
    segments: Vec<SegmentObject>,
    next_id: u64,
    preview: Option<SegmentObject>,
    viewport: Viewport,
    styles: StyleCatalog,
    selection: SelectionManager,
    current_style_id: String,
    current_color: Color,
    base_thickness_px: f64,
    grid_step: f64,
    background: Color,
    grid_color: Color,
}

impl Canvas {
    /// Creates an empty canvas with the given drawable size.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            segments: Vec::new(),
            next_id: 1,
            preview: None,
            viewport: Viewport::new(view_width, view_height),
            styles: StyleCatalog::new(),
            selection: SelectionManager::new(),
            current_style_id: DEFAULT_STYLE_ID.to_string(),
            current_color: Color::BLACK,
            base_thickness_px: (draftkit_core::constants::DEFAULT_BASE_THICKNESS_MM * MM_TO_PX)
                .round()
                .max(1.0),
            grid_step: DEFAULT_GRID_STEP,
            background: Color::WHITE,
            grid_color: Color::LIGHT_GRAY,
        }
    }

    /// The camera.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Mutable camera access for pan/zoom/rotate operations.
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The style catalog.
    pub fn styles(&self) -> &StyleCatalog {
        &self.styles
    }

    /// Mutable catalog access for style edits.
    pub fn styles_mut(&mut self) -> &mut StyleCatalog {
        &mut self.styles
    }

    /// The selection.
    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Committed segments in draw order.
    pub fn segments(&self) -> &[SegmentObject] {
        &self.segments
    }

    /// Looks up a committed segment by id.
    pub fn segment(&self, id: u64) -> Option<&SegmentObject> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// The in-progress preview segment, if any.
    pub fn preview(&self) -> Option<&SegmentObject> {
        self.preview.as_ref()
    }

    /// Style id applied to new segments.
    pub fn current_style_id(&self) -> &str {
        &self.current_style_id
    }

    /// Color applied to new segments.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Base thickness S in device pixels.
    pub fn base_thickness_px(&self) -> f64 {
        self.base_thickness_px
    }

    /// Sets the base thickness S, at least one pixel.
    pub fn set_base_thickness_px(&mut self, px: f64) {
        self.base_thickness_px = px.max(1.0);
    }

    /// Grid spacing in world units.
    pub fn grid_step(&self) -> f64 {
        self.grid_step
    }

    /// Sets the grid spacing; non-positive steps are rejected.
    pub fn set_grid_step(&mut self, step: f64) -> Result<()> {
        if !(step > 0.0) {
            return Err(Error::InvalidGridStep { value: step });
        }
        self.grid_step = step;
        Ok(())
    }

    /// Background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Sets the background color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Grid line color.
    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    /// Sets the grid line color.
    pub fn set_grid_color(&mut self, color: Color) {
        self.grid_color = color;
    }

    /// Commits a new segment with the current style and color.
    pub fn add_segment(&mut self, p1: Point, p2: Point) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.segments.push(SegmentObject {
            id,
            segment: Segment::new(p1, p2),
            style_id: self.current_style_id.clone(),
            color: self.current_color,
        });
        tracing::debug!(id, "segment committed");
        id
    }

    /// Replaces the preview with a segment from `p1` to `p2`, carrying
    /// the current style and color.
    pub fn set_preview(&mut self, p1: Point, p2: Point) {
        self.preview = Some(SegmentObject {
            id: 0,
            segment: Segment::new(p1, p2),
            style_id: self.current_style_id.clone(),
            color: self.current_color,
        });
    }

    /// Discards the preview.
    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Commits the preview as a real segment. Returns its id.
    pub fn commit_preview(&mut self) -> Option<u64> {
        let preview = self.preview.take()?;
        Some(self.add_segment(preview.segment.start, preview.segment.end))
    }

    /// Deletes the selected segments, or the most recently committed
    /// one when nothing is selected.
    pub fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            self.segments.pop();
        } else {
            let ids: Vec<u64> = self.selection.ids().to_vec();
            self.segments.retain(|s| !ids.contains(&s.id));
        }
        self.selection.retain_existing(&self.segments);
    }

    /// Deletes one segment by id. Unknown ids are a no-op.
    pub fn delete_segment(&mut self, id: u64) {
        self.segments.retain(|s| s.id != id);
        self.selection.retain_existing(&self.segments);
    }

    /// Applies a selection click at a world point. Returns the hit id.
    pub fn select_at(&mut self, world_point: &Point, multi: bool) -> Option<u64> {
        self.selection.click(
            &self.segments,
            world_point,
            HIT_THRESHOLD_PX,
            self.viewport.zoom(),
            multi,
        )
    }

    /// Hit-test without changing the selection.
    pub fn pick_at(&self, world_point: &Point) -> Option<u64> {
        SelectionManager::pick(
            &self.segments,
            world_point,
            HIT_THRESHOLD_PX,
            self.viewport.zoom(),
        )
    }

    /// Sets the current style and restyles any selected segments.
    pub fn apply_style(&mut self, style_id: &str) -> Result<()> {
        if !self.styles.contains(style_id) {
            return Err(Error::UnknownStyle {
                id: style_id.to_string(),
            });
        }
        self.current_style_id = style_id.to_string();
        let selected: Vec<u64> = self.selection.ids().to_vec();
        for seg in self.segments.iter_mut().filter(|s| selected.contains(&s.id)) {
            seg.style_id = style_id.to_string();
        }
        if let Some(preview) = &mut self.preview {
            preview.style_id = style_id.to_string();
        }
        Ok(())
    }

    /// Sets the current color and recolors any selected segments.
    pub fn apply_color(&mut self, color: Color) {
        self.current_color = color;
        let selected: Vec<u64> = self.selection.ids().to_vec();
        for seg in self.segments.iter_mut().filter(|s| selected.contains(&s.id)) {
            seg.color = color;
        }
        if let Some(preview) = &mut self.preview {
            preview.color = color;
        }
    }

    /// Removes a custom style, reassigning every segment that used it
    /// to the default style first.
    pub fn remove_style(&mut self, style_id: &str) -> Result<()> {
        let removed = self.styles.remove(style_id)?;
        let mut reassigned = 0usize;
        for seg in self.segments.iter_mut().filter(|s| s.style_id == style_id) {
            seg.style_id = DEFAULT_STYLE_ID.to_string();
            reassigned += 1;
        }
        if self.current_style_id == style_id {
            self.current_style_id = DEFAULT_STYLE_ID.to_string();
        }
        if let Some(preview) = &mut self.preview {
            if preview.style_id == style_id {
                preview.style_id = DEFAULT_STYLE_ID.to_string();
            }
        }
        tracing::info!(
            id = style_id,
            name = %removed.display_name,
            reassigned,
            "custom style removed"
        );
        Ok(())
    }

    /// Bounding box over all committed segment endpoints.
    pub fn bounds(&self) -> Option<BoundingBox> {
        if self.segments.is_empty() {
            return None;
        }
        let mut bbox = BoundingBox::empty();
        for obj in &self.segments {
            bbox.expand(&obj.segment.start);
            bbox.expand(&obj.segment.end);
        }
        Some(bbox)
    }

    /// Frames all committed segments in the viewport; an empty canvas
    /// resets pan and zoom.
    pub fn fit_all(&mut self) {
        let bounds = self.bounds();
        self.viewport.fit_to_view(bounds.as_ref());
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_with_empty_selection_pops_the_last_segment() {
        let mut canvas = Canvas::default();
        let a = canvas.add_segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let b = canvas.add_segment(Point::new(0.0, 1.0), Point::new(1.0, 1.0));
        canvas.delete_selected();
        assert!(canvas.segment(a).is_some());
        assert!(canvas.segment(b).is_none());
    }

    #[test]
    fn removing_a_style_reassigns_segments() {
        let mut canvas = Canvas::default();
        let custom = canvas.styles_mut().duplicate("dashed").unwrap();
        canvas.apply_style(&custom).unwrap();
        let id = canvas.add_segment(Point::new(0.0, 0.0), Point::new(5.0, 0.0));

        canvas.remove_style(&custom).unwrap();
        assert_eq!(canvas.segment(id).unwrap().style_id, DEFAULT_STYLE_ID);
        assert_eq!(canvas.current_style_id(), DEFAULT_STYLE_ID);
        assert!(!canvas.styles().contains(&custom));
    }

    #[test]
    fn grid_step_must_be_positive() {
        let mut canvas = Canvas::default();
        assert!(canvas.set_grid_step(0.0).is_err());
        assert!(canvas.set_grid_step(-5.0).is_err());
        canvas.set_grid_step(2.5).unwrap();
        assert_eq!(canvas.grid_step(), 2.5);
    }

    #[test]
    fn preview_commit_uses_current_attributes() {
        let mut canvas = Canvas::default();
        canvas.apply_color(Color::BLUE);
        canvas.set_preview(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let id = canvas.commit_preview().unwrap();
        assert!(canvas.preview().is_none());
        let obj = canvas.segment(id).unwrap();
        assert_eq!(obj.color, Color::BLUE);
        assert_eq!(obj.style_id, DEFAULT_STYLE_ID);
        assert!((obj.segment.length() - 5.0).abs() < 1e-12);
    }
}
