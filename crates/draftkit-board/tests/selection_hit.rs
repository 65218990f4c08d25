//! Hit-testing and selection behavior on the canvas.

use draftkit_board::{Canvas, SelectionManager};
use draftkit_core::Point;

#[test]
fn test_pick_threshold_shrinks_in_world_units_as_zoom_grows() {
    let mut canvas = Canvas::new(800.0, 600.0);
    canvas.add_segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));

    // Default zoom is 10, threshold 8 px -> 0.8 world units
    canvas.viewport_mut().set_zoom(10.0);
    assert!(canvas.pick_at(&Point::new(0.0, 0.5)).is_some());
    assert!(canvas.pick_at(&Point::new(0.0, 3.0)).is_none());

    // Zoomed out to 2, the same 8 px covers 4 world units
    canvas.viewport_mut().set_zoom(2.0);
    assert!(canvas.pick_at(&Point::new(0.0, 3.0)).is_some());
}

#[test]
fn test_pick_prefers_the_nearest_of_overlapping_candidates() {
    let mut canvas = Canvas::new(800.0, 600.0);
    canvas.viewport_mut().set_zoom(2.0);
    let far = canvas.add_segment(Point::new(-10.0, 2.0), Point::new(10.0, 2.0));
    let near = canvas.add_segment(Point::new(-10.0, 0.5), Point::new(10.0, 0.5));
    // Both are within the 4-world-unit threshold of the probe
    let picked = canvas.pick_at(&Point::new(0.0, 0.0)).unwrap();
    assert_eq!(picked, near);
    assert_ne!(picked, far);
}

#[test]
fn test_click_selection_toggles_only_with_multi() {
    let mut canvas = Canvas::new(800.0, 600.0);
    let a = canvas.add_segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
    let b = canvas.add_segment(Point::new(-10.0, 20.0), Point::new(10.0, 20.0));

    canvas.select_at(&Point::new(0.0, 0.0), false);
    assert_eq!(canvas.selection().ids(), &[a]);

    // Plain click on the other segment replaces the selection
    canvas.select_at(&Point::new(0.0, 20.0), false);
    assert_eq!(canvas.selection().ids(), &[b]);

    // Multi-click adds, then removes
    canvas.select_at(&Point::new(0.0, 0.0), true);
    assert_eq!(canvas.selection().len(), 2);
    canvas.select_at(&Point::new(0.0, 0.0), true);
    assert_eq!(canvas.selection().ids(), &[b]);
}

#[test]
fn test_plain_miss_clears_but_multi_miss_keeps_the_selection() {
    let mut canvas = Canvas::new(800.0, 600.0);
    canvas.add_segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
    canvas.select_at(&Point::new(0.0, 0.0), false);
    assert_eq!(canvas.selection().len(), 1);

    canvas.select_at(&Point::new(0.0, 200.0), true);
    assert_eq!(canvas.selection().len(), 1, "multi miss dropped the selection");

    canvas.select_at(&Point::new(0.0, 200.0), false);
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_delete_selected_removes_exactly_the_selection() {
    let mut canvas = Canvas::new(800.0, 600.0);
    let a = canvas.add_segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
    let b = canvas.add_segment(Point::new(-10.0, 20.0), Point::new(10.0, 20.0));
    canvas.select_at(&Point::new(0.0, 0.0), false);

    canvas.delete_selected();
    assert!(canvas.segment(a).is_none());
    assert!(canvas.segment(b).is_some());
    assert!(canvas.selection().is_empty(), "selection kept a dead id");
}

#[test]
fn test_delete_with_nothing_selected_pops_the_most_recent_segment() {
    let mut canvas = Canvas::new(800.0, 600.0);
    let first = canvas.add_segment(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    let last = canvas.add_segment(Point::new(0.0, 5.0), Point::new(1.0, 5.0));

    canvas.delete_selected();
    assert!(canvas.segment(last).is_none());
    assert!(canvas.segment(first).is_some());
}

#[test]
fn test_retain_existing_drops_stale_ids() {
    let mut canvas = Canvas::new(800.0, 600.0);
    let a = canvas.add_segment(Point::new(-10.0, 0.0), Point::new(10.0, 0.0));
    canvas.select_at(&Point::new(0.0, 0.0), false);
    canvas.delete_segment(a);
    assert!(canvas.selection().is_empty());
}

#[test]
fn test_pick_on_a_degenerate_segment_uses_point_distance() {
    let segments = {
        let mut canvas = Canvas::new(800.0, 600.0);
        canvas.add_segment(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        canvas.segments().to_vec()
    };
    let hit = SelectionManager::pick(&segments, &Point::new(5.2, 5.2), 8.0, 10.0);
    assert!(hit.is_some());
    let miss = SelectionManager::pick(&segments, &Point::new(9.0, 9.0), 8.0, 10.0);
    assert!(miss.is_none());
}
