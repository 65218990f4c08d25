//! Stroke generation checked against hand-computed expectations.

use draftkit_board::stroke::{self, DrawPrimitive, StrokeParams};
use draftkit_board::StyleCatalog;
use draftkit_core::constants::DEFAULT_ZOOM;
use draftkit_core::Color;

/// Params with a 1 px/mm pattern scale, so mm values read as pixels.
fn unit_params() -> StrokeParams {
    StrokeParams {
        zoom: DEFAULT_ZOOM,
        base_zoom: DEFAULT_ZOOM,
        mm_to_px: 1.0,
        base_thickness_px: 2.0,
    }
}

fn lines(prims: &[DrawPrimitive]) -> Vec<((f64, f64), (f64, f64))> {
    prims
        .iter()
        .map(|p| match p {
            DrawPrimitive::Line { p1, p2, .. } => (*p1, *p2),
            other => panic!("expected line, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_dashed_runs_cover_5_2_over_17() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("dashed").unwrap();
    assert_eq!(style.dash_pattern.map(|p| (p.dash_mm, p.gap_mm)), Some((5.0, 2.0)));

    let prims = stroke::generate((0.0, 0.0), (17.0, 0.0), style, Color::BLACK, &unit_params());
    let runs = lines(&prims);
    assert_eq!(runs.len(), 3);
    assert_eq!(runs[0], ((0.0, 0.0), (5.0, 0.0)));
    assert_eq!(runs[1], ((7.0, 0.0), (12.0, 0.0)));
    // Final dash is clipped to the segment end
    assert_eq!(runs[2], ((14.0, 0.0), (17.0, 0.0)));
}

#[test]
fn test_dash_runs_follow_an_oblique_segment() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("dashed").unwrap();
    // 3-4-5 triangle scaled to length 10
    let prims = stroke::generate((0.0, 0.0), (6.0, 8.0), style, Color::BLACK, &unit_params());
    for (p1, p2) in lines(&prims) {
        // Every dash stays on the carrier line y = 4/3 x
        assert!((p1.1 - p1.0 * 8.0 / 6.0).abs() < 1e-9);
        assert!((p2.1 - p2.0 * 8.0 / 6.0).abs() < 1e-9);
    }
}

#[test]
fn test_dash_dot_emits_dash_and_dot_runs() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("dash_dot_main").unwrap();
    // Pattern 5/3 expands to draw 5, skip 1, draw 1, skip 1
    let prims = stroke::generate((0.0, 0.0), (8.0, 0.0), style, Color::BLACK, &unit_params());
    let runs = lines(&prims);
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0], ((0.0, 0.0), (5.0, 0.0)));
    assert_eq!(runs[1], ((6.0, 0.0), (7.0, 0.0)));
}

#[test]
fn test_dash_geometry_scales_with_zoom() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("dashed").unwrap();
    let doubled = StrokeParams {
        zoom: DEFAULT_ZOOM * 2.0,
        ..unit_params()
    };
    // At double zoom the same world segment is twice as long on screen
    // and every dash run doubles with it
    let prims = stroke::generate((0.0, 0.0), (34.0, 0.0), style, Color::BLACK, &doubled);
    let runs = lines(&prims);
    assert_eq!(runs[0], ((0.0, 0.0), (10.0, 0.0)));
    assert_eq!(runs[1], ((14.0, 0.0), (24.0, 0.0)));
}

#[test]
fn test_line_width_does_not_scale_with_zoom() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("solid_main").unwrap();
    for zoom in [0.1, 1.0, DEFAULT_ZOOM, 500.0] {
        let params = StrokeParams::new(zoom, 3.0);
        let prims = stroke::generate((0.0, 0.0), (10.0, 0.0), style, Color::BLACK, &params);
        match &prims[0] {
            DrawPrimitive::Line { width, .. } => assert_eq!(*width, 3.0, "zoom {}", zoom),
            other => panic!("expected line, got {:?}", other),
        }
    }
}

#[test]
fn test_zigzag_pulse_shape() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("solid_zigzag").unwrap();
    // One full period (40) plus one kink (12) fit exactly
    let prims = stroke::generate((0.0, 0.0), (52.0, 0.0), style, Color::BLACK, &unit_params());
    match &prims[0] {
        DrawPrimitive::Polyline { points, smooth, .. } => {
            assert!(!*smooth);
            // Straight run, then -amp at 25% of the kink, +amp at 75%,
            // back on the axis at the kink end
            assert_eq!(points[0], (0.0, 0.0));
            assert_eq!(points[1], (40.0, 0.0));
            assert_eq!(points[2], (43.0, -5.0));
            assert_eq!(points[3], (49.0, 5.0));
            assert_eq!(points[4], (52.0, 0.0));
        }
        other => panic!("expected polyline, got {:?}", other),
    }
}

#[test]
fn test_wave_amplitude_is_perpendicular_to_the_segment() {
    let catalog = StyleCatalog::new();
    let style = catalog.get("solid_wave").unwrap();
    // Vertical segment: wave offsets must appear in x only
    let prims = stroke::generate((10.0, 0.0), (10.0, 200.0), style, Color::BLACK, &unit_params());
    match &prims[0] {
        DrawPrimitive::Polyline { points, .. } => {
            assert!(points.iter().any(|p| (p.0 - 10.0).abs() > 1.0), "wave is flat");
            assert!(points.iter().all(|p| (p.0 - 10.0).abs() <= 3.0 + 1e-9));
        }
        other => panic!("expected polyline, got {:?}", other),
    }
}
