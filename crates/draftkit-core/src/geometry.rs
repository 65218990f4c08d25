//! Cartesian geometry: points, segments, and bounding boxes.
//!
//! Everything here works in world coordinates and knows nothing about
//! screens, cameras, or pixels. Zero-length segments are legal
//! throughout; the degenerate cases fall back to point semantics.

use serde::{Deserialize, Serialize};

/// A point in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Converts to polar coordinates (radius, angle in radians) about the origin.
    pub fn to_polar(&self) -> (f64, f64) {
        ((self.x * self.x + self.y * self.y).sqrt(), self.y.atan2(self.x))
    }

    /// Builds a point from polar coordinates about the origin.
    pub fn from_polar(r: f64, theta_rad: f64) -> Self {
        Self::new(r * theta_rad.cos(), r * theta_rad.sin())
    }

    /// Builds the point at distance `r` and angle `theta_rad` from `origin`.
    ///
    /// This is the polar second-point rule: `p2 = p1 + r * (cos, sin)`.
    pub fn polar_offset(origin: &Point, r: f64, theta_rad: f64) -> Self {
        Self::new(
            origin.x + r * theta_rad.cos(),
            origin.y + r * theta_rad.sin(),
        )
    }
}

/// A directed line segment between two world points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment length.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Inclination angle in radians (atan2 of the delta).
    pub fn angle(&self) -> f64 {
        (self.end.y - self.start.y).atan2(self.end.x - self.start.x)
    }

    /// Unit direction vector, or (0, 0) for a degenerate segment.
    pub fn direction(&self) -> (f64, f64) {
        let len = self.length();
        if len == 0.0 {
            return (0.0, 0.0);
        }
        ((self.end.x - self.start.x) / len, (self.end.y - self.start.y) / len)
    }

    /// Left-hand unit normal, or (0, 0) for a degenerate segment.
    pub fn normal(&self) -> (f64, f64) {
        let (ux, uy) = self.direction();
        (-uy, ux)
    }

    /// Midpoint of the segment.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Axis-aligned bounding box over both endpoints.
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bbox = BoundingBox::empty();
        bbox.expand(&self.start);
        bbox.expand(&self.end);
        bbox
    }

    /// Distance from a point to the segment, clamped to the endpoints.
    ///
    /// For the degenerate segment this is the distance to the single point.
    pub fn distance_to_point(&self, point: &Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.start.distance_to(point);
        }
        let t = ((point.x - self.start.x) * dx + (point.y - self.start.y) * dy) / len_sq;
        let t = t.clamp(0.0, 1.0);
        let proj = Point::new(self.start.x + t * dx, self.start.y + t * dy);
        proj.distance_to(point)
    }
}

/// Axis-aligned bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// An inverted box that any `expand` call will overwrite.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Builds a box from explicit corners.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// True while no point has been added.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grows the box to include `point`.
    pub fn expand(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// Box width; zero for a single point.
    pub fn width(&self) -> f64 {
        (self.max_x - self.min_x).max(0.0)
    }

    /// Box height; zero for a single point.
    pub fn height(&self) -> f64 {
        (self.max_y - self.min_y).max(0.0)
    }

    /// Center point of the box.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// True if the point lies inside the box grown by `tolerance` on every side.
    pub fn contains_with_tolerance(&self, point: &Point, tolerance: f64) -> bool {
        point.x >= self.min_x - tolerance
            && point.x <= self.max_x + tolerance
            && point.y >= self.min_y - tolerance
            && point.y <= self.max_y + tolerance
    }
}
