//! Coordinate transform invariants across pan, zoom, and rotation.

use draftkit_board::Viewport;
use draftkit_core::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use draftkit_core::BoundingBox;
use proptest::prelude::*;

#[test]
fn test_round_trip_identity_at_defaults() {
    let vp = Viewport::new(800.0, 600.0);
    let world = vp.screen_to_world(123.0, 456.0);
    let (sx, sy) = vp.world_to_screen(world.x, world.y);
    assert!((sx - 123.0).abs() < 1e-9);
    assert!((sy - 456.0).abs() < 1e-9);
}

#[test]
fn test_zoom_clamps_to_legal_range() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(1e9);
    assert_eq!(vp.zoom(), MAX_ZOOM);
    vp.set_zoom(0.0);
    assert_eq!(vp.zoom(), MIN_ZOOM);
}

#[test]
fn test_zoom_at_point_keeps_the_anchor_fixed() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_pan(37.0, -12.0);
    vp.set_rotation(0.4);

    let anchor_screen = (200.0, 450.0);
    let before = vp.screen_to_world(anchor_screen.0, anchor_screen.1);
    vp.zoom_at_point(1.7, anchor_screen.0, anchor_screen.1);
    let after = vp.screen_to_world(anchor_screen.0, anchor_screen.1);

    assert!((before.x - after.x).abs() < 1e-9, "anchor drifted in x");
    assert!((before.y - after.y).abs() < 1e-9, "anchor drifted in y");
}

#[test]
fn test_zoom_at_point_against_the_clamp_still_holds_the_anchor() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_zoom(MAX_ZOOM);
    let before = vp.screen_to_world(100.0, 100.0);
    // Factor is swallowed by the clamp; zoom and anchor must not move
    vp.zoom_at_point(2.0, 100.0, 100.0);
    assert_eq!(vp.zoom(), MAX_ZOOM);
    let after = vp.screen_to_world(100.0, 100.0);
    assert!((before.x - after.x).abs() < 1e-9);
    assert!((before.y - after.y).abs() < 1e-9);
}

#[test]
fn test_fit_to_view_centers_the_content() {
    let mut vp = Viewport::new(800.0, 600.0);
    let bbox = BoundingBox::new(100.0, 50.0, 300.0, 150.0);
    vp.fit_to_view(Some(&bbox));

    let center = bbox.center();
    let (sx, sy) = vp.world_to_screen(center.x, center.y);
    assert!((sx - 400.0).abs() < 1e-6);
    assert!((sy - 300.0).abs() < 1e-6);
}

#[test]
fn test_fit_to_view_keeps_the_margin() {
    let mut vp = Viewport::new(800.0, 600.0);
    let bbox = BoundingBox::new(-50.0, -20.0, 50.0, 20.0);
    vp.fit_to_view(Some(&bbox));

    let (left, _) = vp.world_to_screen(bbox.min_x, 0.0);
    let (right, _) = vp.world_to_screen(bbox.max_x, 0.0);
    let (_, bottom) = vp.world_to_screen(0.0, bbox.min_y);
    let (_, top) = vp.world_to_screen(0.0, bbox.max_y);

    assert!(left >= 0.0 && right <= 800.0, "content spills horizontally");
    assert!(top >= 0.0 && bottom <= 600.0, "content spills vertically");
    // The tighter axis uses 90% of the view
    let used_w = right - left;
    let used_h = bottom - top;
    let tight = (used_w / 800.0).max(used_h / 600.0);
    assert!((tight - 0.9).abs() < 1e-6, "margin not honored: {}", tight);
}

#[test]
fn test_fit_with_no_content_resets_the_camera() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.set_pan(500.0, -500.0);
    vp.set_zoom(77.0);
    vp.fit_to_view(None);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
    assert_eq!(vp.zoom(), DEFAULT_ZOOM);
}

#[test]
fn test_fit_a_single_point_stays_finite() {
    let mut vp = Viewport::new(800.0, 600.0);
    let bbox = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
    vp.fit_to_view(Some(&bbox));
    assert!(vp.zoom().is_finite());
    let (sx, sy) = vp.world_to_screen(5.0, 5.0);
    assert!((sx - 400.0).abs() < 1e-6);
    assert!((sy - 300.0).abs() < 1e-6);
}

proptest! {
    #[test]
    fn prop_screen_world_round_trip(
        sx in -2000.0..2000.0f64,
        sy in -2000.0..2000.0f64,
        pan_x in -1000.0..1000.0f64,
        pan_y in -1000.0..1000.0f64,
        zoom in 0.1..1000.0f64,
        rotation in -6.3..6.3f64,
    ) {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.set_pan(pan_x, pan_y);
        vp.set_zoom(zoom);
        vp.set_rotation(rotation);

        let world = vp.screen_to_world(sx, sy);
        let (rx, ry) = vp.world_to_screen(world.x, world.y);
        // Tolerance widens with the round trip through the zoom factor
        prop_assert!((rx - sx).abs() < 1e-6);
        prop_assert!((ry - sy).abs() < 1e-6);
    }

    #[test]
    fn prop_rotation_preserves_distance_to_center(
        wx in -100.0..100.0f64,
        wy in -100.0..100.0f64,
        rotation in -6.3..6.3f64,
    ) {
        let mut vp = Viewport::new(800.0, 600.0);
        let (sx0, sy0) = vp.world_to_screen(wx, wy);
        let d0 = ((sx0 - 400.0).powi(2) + (sy0 - 300.0).powi(2)).sqrt();

        vp.set_rotation(rotation);
        let (sx1, sy1) = vp.world_to_screen(wx, wy);
        let d1 = ((sx1 - 400.0).powi(2) + (sy1 - 300.0).powi(2)).sqrt();

        prop_assert!((d0 - d1).abs() < 1e-6);
    }
}
