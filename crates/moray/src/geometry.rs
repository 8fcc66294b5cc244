//! Geometry primitives shared by routing and label placement.
//!
//! These are intentionally lightweight `Copy` values. All math is plain `f64`; callers that need
//! tolerance-aware comparisons use the `almost_*` helpers instead of `==`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::ORIGIN
    }
}

/// A size. Negative components mark the dimension as unset (no layout has happened yet).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub width: f64,
    pub height: f64,
}

impl Dimension {
    pub const EMPTY: Dimension = Dimension {
        width: -1.0,
        height: -1.0,
    };

    pub fn is_valid(self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::EMPTY
    }
}

/// Position plus size, expressed in the owning element's parent space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: -1.0,
        height: -1.0,
    };

    pub fn position(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    pub fn center(self) -> Point {
        Point {
            x: self.x + 0.5 * self.width,
            y: self.y + 0.5 * self.height,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::EMPTY
    }
}

pub fn almost_equals(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

/// Component-wise linear interpolation from `a` to `b`.
pub fn linear(a: Point, b: Point, lambda: f64) -> Point {
    Point {
        x: (1.0 - lambda) * a.x + lambda * b.x,
        y: (1.0 - lambda) * a.y + lambda * b.y,
    }
}

pub fn center_of_line(a: Point, b: Point) -> Point {
    linear(a, b, 0.5)
}

pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn manhattan_distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).abs() + (b.y - a.y).abs()
}

/// Chebyshev distance. Cheap proximity test used for "is this bend point worth keeping" checks.
pub fn max_distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).abs().max((b.y - a.y).abs())
}

/// Angle in radians between two vectors, in `[0, pi]`. `None` when either vector is
/// (almost) zero-length and the angle is undefined.
pub fn angle_between_points(a: Point, b: Point) -> Option<f64> {
    let length_product = a.magnitude() * b.magnitude();
    if almost_equals(length_product, 0.0) {
        return None;
    }
    let ratio = (a.x * b.x + a.y * b.y) / length_product;
    Some(ratio.clamp(-1.0, 1.0).acos())
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
