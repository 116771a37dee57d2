//! # Geometry Primitives
//!
//! Value types shared by the arrangement planner and the handle translator.
//!
//! ## Coordinate Convention
//!
//! All coordinates are in points, the host's native unit, with the Y axis
//! pointing down (screen space). Angles are in degrees and grow clockwise:
//! - 0° = pointing right
//! - 90° = pointing down
//! - 180° = pointing left
//! - 270° = pointing up
//!
//! With Y pointing down, the ordinary rotation matrix already turns
//! clockwise on screen, so `(cos θ, sin θ)` is the unit direction of `θ`.

use crate::error::GeometryError;
use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

/// A point in host coordinates (points, Y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The origin `(0, 0)`
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` in direction `angle_degrees`
    pub fn polar(center: Point2D, radius: f64, angle_degrees: f64) -> Self {
        let rad = angle_degrees.to_radians();
        Self::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
    }

    pub fn distance_to(&self, other: Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Translate by `(dx, dy)`
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `other`
    pub fn lerp(&self, other: Point2D, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Direction from `self` to `other` in degrees, normalized to `[0, 360)`
    pub fn angle_to(&self, other: Point2D) -> f64 {
        normalize_degrees((other.y - self.y).atan2(other.x - self.x).to_degrees())
    }

    /// Rotate around `pivot` by `angle_degrees` (clockwise on screen)
    pub fn rotate_around(&self, pivot: Point2D, angle_degrees: f64) -> Self {
        let rotation = Rotation2::new(angle_degrees.to_radians());
        let local = rotation * (self.to_vector() - pivot.to_vector());
        Self::from_vector(pivot.to_vector() + local)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }

    /// Approximate equality within `tolerance` on both axes
    pub fn approx_eq(&self, other: Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box of one or more source shapes
///
/// Invariant: `right >= left` and `bottom >= top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct BoundingBox {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl BoundingBox {
    /// Create a bounding box, rejecting inverted or non-finite edges
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self, GeometryError> {
        if ![left, top, right, bottom].iter().all(|v| v.is_finite()) {
            return Err(GeometryError::NonFinite {
                what: "bounding box edge",
            });
        }
        if right < left || bottom < top {
            return Err(GeometryError::InvertedBounds {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Bounding box from a top-left corner and a size, as hosts report shapes
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(left, top, left + width, top + height)
    }

    /// Zero-size box at `center`
    pub fn at_point(center: Point2D) -> Self {
        Self {
            left: center.x,
            top: center.y,
            right: center.x,
            bottom: center.y,
        }
    }

    /// Smallest box containing every point
    pub fn from_points<I>(points: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(GeometryError::EmptyPointSet)?;
        if !first.is_finite() {
            return Err(GeometryError::NonFinite { what: "point" });
        }
        let mut bounds = Self::at_point(first);
        for p in iter {
            if !p.is_finite() {
                return Err(GeometryError::NonFinite { what: "point" });
            }
            bounds = bounds.include(p);
        }
        Ok(bounds)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Grow to include `p`
    pub fn include(&self, p: Point2D) -> Self {
        Self {
            left: self.left.min(p.x),
            top: self.top.min(p.y),
            right: self.right.max(p.x),
            bottom: self.bottom.max(p.y),
        }
    }

    pub fn union(&self, other: &BoundingBox) -> Self {
        Self {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }

    /// Same-size box re-centered on `center`
    pub fn centered_at(&self, center: Point2D) -> Self {
        let current = self.center();
        self.translate(center.x - current.x, center.y - current.y)
    }

    /// Axis-aligned box around this box rotated by `angle_degrees` about its center
    ///
    /// Uses the four rotated corners, so the result is loose for curved shapes.
    pub fn rotated(&self, angle_degrees: f64) -> Self {
        let c = self.center();
        let corners = [
            Point2D::new(self.left, self.top),
            Point2D::new(self.right, self.top),
            Point2D::new(self.right, self.bottom),
            Point2D::new(self.left, self.bottom),
        ];
        let mut out = Self::at_point(corners[0].rotate_around(c, angle_degrees));
        for corner in &corners[1..] {
            out = out.include(corner.rotate_around(c, angle_degrees));
        }
        out
    }
}

/// Unchecked serde form of [`BoundingBox`]
#[derive(Serialize, Deserialize)]
struct RawBounds {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl TryFrom<RawBounds> for BoundingBox {
    type Error = GeometryError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        BoundingBox::new(raw.left, raw.top, raw.right, raw.bottom)
    }
}

impl From<BoundingBox> for RawBounds {
    fn from(b: BoundingBox) -> Self {
        RawBounds {
            left: b.left,
            top: b.top,
            right: b.right,
            bottom: b.bottom,
        }
    }
}

/// Placement of one generated instance
///
/// `rotation_degrees` is absolute (clockwise, 0° = right). `None` means the
/// arrangement does not rotate the instance and the shape keeps whatever
/// orientation it already has.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point2D,
    pub rotation_degrees: Option<f64>,
}

impl Transform {
    /// Transform that only moves the instance
    pub fn at(position: Point2D) -> Self {
        Self {
            position,
            rotation_degrees: None,
        }
    }

    /// Transform that moves and rotates the instance
    pub fn rotated(position: Point2D, rotation_degrees: f64) -> Self {
        Self {
            position,
            rotation_degrees: Some(rotation_degrees),
        }
    }

    /// Resolve the rotation against the source shape's own rotation
    pub fn rotation_or(&self, base_rotation_degrees: f64) -> f64 {
        self.rotation_degrees.unwrap_or(base_rotation_degrees)
    }
}

/// Normalize an angle to `[0, 360)`
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Normalize an angle to `(-180, 180]`
pub fn normalize_signed_degrees(angle: f64) -> f64 {
    let a = normalize_degrees(angle);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Smallest absolute difference between two angles, in `[0, 180]`
pub fn angle_difference(a: f64, b: f64) -> f64 {
    normalize_signed_degrees(a - b).abs()
}
