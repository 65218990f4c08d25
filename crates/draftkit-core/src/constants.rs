//! Shared constants for camera, hit-testing, and drawing defaults.

/// Zoom level treated as 100% on the status display.
pub const DEFAULT_ZOOM: f64 = 10.0;

/// Lower zoom clamp.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom clamp.
pub const MAX_ZOOM: f64 = 1000.0;

/// Multiplier applied per zoom step (wheel notch or +/- key).
pub const ZOOM_STEP: f64 = 1.2;

/// Fraction of the viewport reserved as margin by fit-to-bounds.
pub const FIT_MARGIN: f64 = 0.1;

/// Pixel distance within which a click counts as hitting a segment.
pub const HIT_THRESHOLD_PX: f64 = 8.0;

/// Default grid spacing in world units.
pub const DEFAULT_GRID_STEP: f64 = 10.0;

/// Default base thickness S in millimeters (GOST allows 0.5..1.4).
pub const DEFAULT_BASE_THICKNESS_MM: f64 = 0.8;

/// Lower bound of the base thickness S, millimeters.
pub const MIN_BASE_THICKNESS_MM: f64 = 0.5;

/// Upper bound of the base thickness S, millimeters.
pub const MAX_BASE_THICKNESS_MM: f64 = 1.4;

/// Rotation snap increment in degrees (Shift held).
pub const ROTATE_SNAP_DEG: f64 = 90.0;

/// Angular distance, in degrees, within which the rotation is considered
/// already snapped and steps to the next multiple instead.
pub const ROTATE_SNAP_TOLERANCE_DEG: f64 = 1.0;

/// Rotation applied per arrow-key press, degrees.
pub const ROTATE_STEP_DEG: f64 = 1.0;

/// Width of the selection highlight drawn beneath a selected segment.
pub const SELECTION_OVERLAY_WIDTH_PX: f64 = 10.0;

/// Radius of the construction point markers, pixels.
pub const POINT_MARKER_RADIUS_PX: f64 = 4.0;
