//! Segment selection state and nearest-segment hit-testing.
//!
//! The pixel hit threshold is converted to world units by dividing by
//! the zoom, so the click tolerance feels the same at every
//! magnification. Picking returns the nearest qualifying segment, not
//! the first one in storage order.

use draftkit_core::Point;

use crate::canvas::SegmentObject;

/// Tracks which segments are selected and answers pick queries.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// Selected segment ids in the order they were added.
    selected: Vec<u64>,
}

impl SelectionManager {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids, oldest first.
    pub fn ids(&self) -> &[u64] {
        &self.selected
    }

    /// Number of selected segments.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// True if the id is currently selected.
    pub fn contains(&self, id: u64) -> bool {
        self.selected.contains(&id)
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replaces the selection with a single id.
    pub fn select_only(&mut self, id: u64) {
        self.selected.clear();
        self.selected.push(id);
    }

    /// Adds or removes an id from the selection.
    pub fn toggle(&mut self, id: u64) {
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Drops ids that no longer reference a stored segment.
    pub fn retain_existing(&mut self, segments: &[SegmentObject]) {
        self.selected
            .retain(|id| segments.iter().any(|s| s.id == *id));
    }

    /// Finds the segment nearest to `world_point` within the threshold.
    ///
    /// `threshold_px / zoom` gives the world-space tolerance. Among the
    /// segments inside it, the one with the smallest distance wins.
    pub fn pick(
        segments: &[SegmentObject],
        world_point: &Point,
        threshold_px: f64,
        zoom: f64,
    ) -> Option<u64> {
        let threshold_world = threshold_px / zoom;

        let mut best: Option<(u64, f64)> = None;
        for obj in segments {
            let dist = obj.segment.distance_to_point(world_point);
            if dist < threshold_world && best.map_or(true, |(_, d)| dist < d) {
                best = Some((obj.id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Applies one selection click.
    ///
    /// A hit replaces the selection, or toggles membership when `multi`
    /// is held. A miss clears the selection unless `multi` is held.
    /// Returns the hit id, if any.
    pub fn click(
        &mut self,
        segments: &[SegmentObject],
        world_point: &Point,
        threshold_px: f64,
        zoom: f64,
        multi: bool,
    ) -> Option<u64> {
        match Self::pick(segments, world_point, threshold_px, zoom) {
            Some(id) => {
                if multi {
                    self.toggle(id);
                } else {
                    self.select_only(id);
                }
                Some(id)
            }
            None => {
                if !multi {
                    self.clear();
                }
                None
            }
        }
    }
}
