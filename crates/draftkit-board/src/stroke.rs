//! Procedural stroke geometry.
//!
//! Turns a line style plus a pair of screen endpoints into drawable
//! primitives: dash runs for the patterned styles, a smoothed sinusoidal
//! polyline for the wavy style, and a pulse polyline for the zigzag
//! style. All geometry scales with zoom relative to the default zoom so
//! the stroke shape looks the same at every magnification; line width
//! never scales.

use draftkit_core::constants::DEFAULT_ZOOM;
use draftkit_core::units::MM_TO_PX;
use draftkit_core::Color;
use smallvec::SmallVec;

use crate::styles::{BaseType, LineStyle};

/// Wave sampling step at the default zoom, pixels.
const WAVE_STEP_PX: f64 = 5.0;
/// Wave amplitude at the default zoom, pixels.
const WAVE_AMPLITUDE_PX: f64 = 3.0;
/// Wave angular frequency at the default zoom, radians per pixel.
const WAVE_FREQUENCY: f64 = 0.2;
/// Straight run between zigzag pulses at the default zoom, pixels.
const ZIGZAG_PERIOD_PX: f64 = 40.0;
/// Length of one zigzag pulse along the line at the default zoom, pixels.
const ZIGZAG_KINK_PX: f64 = 12.0;
/// Zigzag pulse height at the default zoom, pixels.
const ZIGZAG_AMPLITUDE_PX: f64 = 5.0;

/// A drawable primitive in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// A straight stroke
    Line {
        p1: (f64, f64),
        p2: (f64, f64),
        width: f64,
        color: Color,
    },
    /// A connected point sequence; `smooth` requests spline smoothing
    Polyline {
        points: Vec<(f64, f64)>,
        width: f64,
        color: Color,
        smooth: bool,
    },
}

/// Scaling and width inputs for stroke generation.
///
/// The generator never reads camera state; the zoom arrives here so the
/// geometry stays independently testable.
#[derive(Debug, Clone, Copy)]
pub struct StrokeParams {
    /// Current camera zoom.
    pub zoom: f64,
    /// Zoom level at which stroke constants are defined (100%).
    pub base_zoom: f64,
    /// Pixels per millimeter for dash patterns at the base zoom.
    pub mm_to_px: f64,
    /// Base thickness S in device pixels; main styles draw at this width.
    pub base_thickness_px: f64,
}

impl StrokeParams {
    /// Parameters for the given zoom with the standard constants.
    pub fn new(zoom: f64, base_thickness_px: f64) -> Self {
        Self {
            zoom,
            base_zoom: DEFAULT_ZOOM,
            mm_to_px: MM_TO_PX,
            base_thickness_px,
        }
    }

    /// Shape scale relative to the base zoom.
    fn scale(&self) -> f64 {
        self.zoom / self.base_zoom
    }

    /// Pixels per millimeter at the current zoom.
    fn px_per_mm(&self) -> f64 {
        self.mm_to_px * self.scale()
    }

    /// Stroke width for a style: S for main styles, max(1, S/2) for thin.
    pub fn width_for(&self, style: &LineStyle) -> f64 {
        if style.is_main {
            self.base_thickness_px
        } else {
            ((self.base_thickness_px / 2.0).round()).max(1.0)
        }
    }
}

/// Generates the drawable primitives for one segment.
///
/// `p1`/`p2` are the segment endpoints already transformed to screen
/// coordinates. A zero-length segment produces nothing for every base
/// type.
pub fn generate(
    p1: (f64, f64),
    p2: (f64, f64),
    style: &LineStyle,
    color: Color,
    params: &StrokeParams,
) -> Vec<DrawPrimitive> {
    let width = params.width_for(style);
    let length = ((p2.0 - p1.0).powi(2) + (p2.1 - p1.1).powi(2)).sqrt();
    if length == 0.0 {
        return Vec::new();
    }

    match style.base_type {
        BaseType::Solid => vec![DrawPrimitive::Line {
            p1,
            p2,
            width,
            color,
        }],
        BaseType::Dashed | BaseType::DashDot | BaseType::DashDotDot => {
            let Some(pattern) = style.dash_pattern else {
                // Patterned base type without parameters; draw solid
                return vec![DrawPrimitive::Line {
                    p1,
                    p2,
                    width,
                    color,
                }];
            };
            let pattern_px = expand_pattern(style.base_type, pattern.dash_mm, pattern.gap_mm)
                .into_iter()
                .map(|mm| mm * params.px_per_mm())
                .collect::<SmallVec<[f64; 6]>>();
            generate_dashes(p1, p2, length, &pattern_px, width, color)
        }
        BaseType::Wave => vec![generate_wave(p1, p2, length, width, color, params.scale())],
        BaseType::Zigzag => vec![generate_zigzag(p1, p2, length, width, color, params.scale())],
    }
}

/// Expands a (dash, gap) pair into the repeating draw/skip run lengths
/// for the given base type. Even indices draw, odd indices skip.
fn expand_pattern(base_type: BaseType, dash_mm: f64, gap_mm: f64) -> SmallVec<[f64; 6]> {
    match base_type {
        BaseType::Dashed => SmallVec::from_slice(&[dash_mm, gap_mm]),
        // Dash, skip, dot, skip: the gap splits into thirds with a short
        // draw run in the middle standing in for the dot
        BaseType::DashDot => {
            let part = gap_mm / 3.0;
            SmallVec::from_slice(&[dash_mm, part, part, part])
        }
        // Dash then two dots: the gap splits into fifths
        BaseType::DashDotDot => {
            let part = gap_mm / 5.0;
            SmallVec::from_slice(&[dash_mm, part, part, part, part, part])
        }
        _ => SmallVec::new(),
    }
}

fn generate_dashes(
    p1: (f64, f64),
    p2: (f64, f64),
    length: f64,
    pattern_px: &[f64],
    width: f64,
    color: Color,
) -> Vec<DrawPrimitive> {
    let (ux, uy) = ((p2.0 - p1.0) / length, (p2.1 - p1.1) / length);

    let mut primitives = Vec::new();
    let mut dist = 0.0;
    let mut index = 0usize;
    while dist < length {
        let run = pattern_px[index % pattern_px.len()];
        if index % 2 == 0 {
            // Partial final run is clipped to the remaining length
            let draw_len = run.min(length - dist);
            primitives.push(DrawPrimitive::Line {
                p1: (p1.0 + ux * dist, p1.1 + uy * dist),
                p2: (p1.0 + ux * (dist + draw_len), p1.1 + uy * (dist + draw_len)),
                width,
                color,
            });
        }
        dist += run;
        index += 1;
    }
    primitives
}

fn generate_wave(
    p1: (f64, f64),
    p2: (f64, f64),
    length: f64,
    width: f64,
    color: Color,
    scale: f64,
) -> DrawPrimitive {
    let (ux, uy) = ((p2.0 - p1.0) / length, (p2.1 - p1.1) / length);
    let (nx, ny) = (-uy, ux);

    let step = (WAVE_STEP_PX * scale).max(0.1);
    let amplitude = WAVE_AMPLITUDE_PX * scale;
    let frequency = WAVE_FREQUENCY / scale;

    let mut points = Vec::with_capacity((length / step) as usize + 2);
    let mut t = 0.0;
    while t < length {
        let offset = amplitude * (t * frequency).sin();
        points.push((p1.0 + ux * t + nx * offset, p1.1 + uy * t + ny * offset));
        t += step;
    }
    points.push(p2);

    DrawPrimitive::Polyline {
        points,
        width,
        color,
        smooth: true,
    }
}

fn generate_zigzag(
    p1: (f64, f64),
    p2: (f64, f64),
    length: f64,
    width: f64,
    color: Color,
    scale: f64,
) -> DrawPrimitive {
    let (ux, uy) = ((p2.0 - p1.0) / length, (p2.1 - p1.1) / length);
    let (nx, ny) = (-uy, ux);

    let period = ZIGZAG_PERIOD_PX * scale;
    let kink = ZIGZAG_KINK_PX * scale;
    let amplitude = ZIGZAG_AMPLITUDE_PX * scale;

    let at = |d: f64, offset: f64| (p1.0 + ux * d + nx * offset, p1.1 + uy * d + ny * offset);

    let mut points = vec![p1];
    let mut dist = 0.0;
    while dist < length {
        // Straight run up to the next pulse, or to the segment end
        let run_end = (dist + period).min(length);
        points.push(at(run_end, 0.0));
        dist = run_end;

        if dist + kink <= length {
            // One pulse: up at 25%, down at 75%, back on axis at 100%
            points.push(at(dist + kink * 0.25, -amplitude));
            points.push(at(dist + kink * 0.75, amplitude));
            points.push(at(dist + kink, 0.0));
            dist += kink;
        } else {
            // Not enough room for a full pulse; run straight to the end
            points.push(p2);
            break;
        }
    }

    DrawPrimitive::Polyline {
        points,
        width,
        color,
        smooth: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::styles::StyleCatalog;

    fn unit_params() -> StrokeParams {
        // mm scale of exactly 1 px/mm at the base zoom
        StrokeParams {
            zoom: DEFAULT_ZOOM,
            base_zoom: DEFAULT_ZOOM,
            mm_to_px: 1.0,
            base_thickness_px: 2.0,
        }
    }

    #[test]
    fn zero_length_segment_generates_nothing() {
        let catalog = StyleCatalog::new();
        for style in catalog.iter_sorted() {
            let prims = generate((10.0, 10.0), (10.0, 10.0), style, Color::BLACK, &unit_params());
            assert!(prims.is_empty(), "{} emitted primitives", style.id);
        }
    }

    #[test]
    fn dash_dot_pattern_splits_gap_in_thirds() {
        let pattern = expand_pattern(BaseType::DashDot, 5.0, 3.0);
        assert_eq!(pattern.as_slice(), &[5.0, 1.0, 1.0, 1.0]);

        let pattern = expand_pattern(BaseType::DashDotDot, 15.0, 5.0);
        assert_eq!(pattern.as_slice(), &[15.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn width_policy_halves_thin_styles() {
        let params = StrokeParams::new(DEFAULT_ZOOM, 3.0);
        let catalog = StyleCatalog::new();
        assert_eq!(params.width_for(catalog.get("solid_main").unwrap()), 3.0);
        assert_eq!(params.width_for(catalog.get("solid_thin").unwrap()), 2.0);

        // Never below one pixel
        let hairline = StrokeParams::new(DEFAULT_ZOOM, 1.0);
        assert_eq!(hairline.width_for(catalog.get("solid_thin").unwrap()), 1.0);
    }

    #[test]
    fn wave_polyline_ends_exactly_at_the_endpoint() {
        let catalog = StyleCatalog::new();
        let style = catalog.get("solid_wave").unwrap();
        let prims = generate((0.0, 0.0), (100.0, 0.0), style, Color::BLACK, &unit_params());
        assert_eq!(prims.len(), 1);
        match &prims[0] {
            DrawPrimitive::Polyline { points, smooth, .. } => {
                assert!(*smooth);
                assert_eq!(*points.last().unwrap(), (100.0, 0.0));
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn zigzag_shorter_than_one_pulse_is_straight() {
        let catalog = StyleCatalog::new();
        let style = catalog.get("solid_zigzag").unwrap();
        // 30 px < period (40), so no pulse fits
        let prims = generate((0.0, 0.0), (30.0, 0.0), style, Color::BLACK, &unit_params());
        match &prims[0] {
            DrawPrimitive::Polyline { points, smooth, .. } => {
                assert!(!*smooth);
                assert!(points.iter().all(|p| p.1 == 0.0), "unexpected pulse offset");
                assert_eq!(*points.last().unwrap(), (30.0, 0.0));
            }
            other => panic!("expected polyline, got {:?}", other),
        }
    }
}
