//! # Path-Following Arrays
//!
//! Copies are distributed along an open or closed polyline by arc length.
//!
//! ## Sampling
//!
//! The polyline keeps the cumulative arc length at every vertex. A sample at
//! arc length `s` finds the segment that straddles `s` and interpolates
//! linearly inside it. When `s` falls exactly on an interior vertex, the
//! *incoming* segment is used, so the tangent reported at a corner is the
//! direction the path arrived from. Zero-length segments never provide a
//! direction.
//!
//! ## Spacing Modes
//!
//! - Equal spacing: `count` samples from the first point to the last, with the
//!   endpoints returned exactly.
//! - Custom spacing: sample `i` sits at `i * custom_spacing`. A closed path
//!   (first point equals last point) wraps around; an open path stops at its
//!   end, so fewer than `count` copies may be produced.

use serde::{Deserialize, Serialize};
use slidekit_core::{normalize_degrees, ArrangementError, Point2D, Transform};

/// Tolerance for treating two path points as the same vertex
const VERTEX_EPSILON: f64 = 1e-9;

/// A point on a path together with the local direction of travel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub point: Point2D,
    /// Direction in degrees, `[0, 360)`; `None` on a path with no length
    pub tangent_degrees: Option<f64>,
}

/// Polyline with precomputed cumulative arc lengths
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2D>,
    cumulative: Vec<f64>,
}

impl Polyline {
    /// Build a polyline, rejecting empty or non-finite input
    pub fn new(points: &[Point2D]) -> Result<Self, ArrangementError> {
        if points.is_empty() {
            return Err(ArrangementError::invalid(
                "path_points",
                "path must contain at least one point",
            ));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(ArrangementError::invalid(
                "path_points",
                format!("point {i} is not finite"),
            ));
        }

        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in points.windows(2) {
            total += pair[0].distance_to(pair[1]);
            cumulative.push(total);
        }

        Ok(Self {
            points: points.to_vec(),
            cumulative,
        })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Total arc length
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Whether the path returns to its starting point
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2
            && self.length() > 0.0
            && self.points[0].approx_eq(self.points[self.points.len() - 1], VERTEX_EPSILON)
    }

    fn first(&self) -> Point2D {
        self.points[0]
    }

    fn last(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    fn segment_length(&self, end_vertex: usize) -> f64 {
        self.cumulative[end_vertex] - self.cumulative[end_vertex - 1]
    }

    fn segment_direction(&self, end_vertex: usize) -> f64 {
        let a = self.points[end_vertex - 1];
        let b = self.points[end_vertex];
        normalize_degrees((b.y - a.y).atan2(b.x - a.x).to_degrees())
    }

    /// Index of the vertex ending the segment that carries arc length `s`
    ///
    /// Prefers the incoming segment at a vertex and skips zero-length
    /// segments. Returns `None` when the path has no length.
    fn segment_at(&self, s: f64) -> Option<usize> {
        let n = self.points.len();
        if n < 2 || self.length() <= 0.0 {
            return None;
        }

        // First vertex whose cumulative length reaches s
        let mut idx = self.cumulative.partition_point(|&c| c < s).max(1);
        while idx < n && self.segment_length(idx) <= 0.0 {
            idx += 1;
        }
        if idx >= n {
            idx = (1..n).rev().find(|&k| self.segment_length(k) > 0.0)?;
        }
        Some(idx)
    }

    /// Move `s` onto a vertex when it is within rounding distance of one
    fn snap_to_vertex(&self, s: f64) -> f64 {
        let tolerance = VERTEX_EPSILON * self.length().max(1.0);
        let idx = self.cumulative.partition_point(|&c| c < s);
        [idx.checked_sub(1), Some(idx)]
            .into_iter()
            .flatten()
            .filter_map(|k| self.cumulative.get(k).copied())
            .find(|&c| (c - s).abs() <= tolerance)
            .unwrap_or(s)
    }

    /// Sample the path at arc length `s`, clamped to `[0, length]`
    ///
    /// Arc lengths within rounding distance of a vertex sample the vertex.
    pub fn sample_at(&self, s: f64) -> PathSample {
        let s = self.snap_to_vertex(s.clamp(0.0, self.length()));
        let Some(idx) = self.segment_at(s) else {
            return PathSample {
                point: self.first(),
                tangent_degrees: None,
            };
        };

        let start = self.points[idx - 1];
        let end = self.points[idx];
        let t = (s - self.cumulative[idx - 1]) / self.segment_length(idx);
        let point = if t <= 0.0 {
            start
        } else if t >= 1.0 {
            end
        } else {
            start.lerp(end, t)
        };

        PathSample {
            point,
            tangent_degrees: Some(self.segment_direction(idx)),
        }
    }

    /// `count` samples evenly spaced by arc length, endpoints exact
    pub fn resample_equal(&self, count: u32) -> Vec<PathSample> {
        let length = self.length();
        (0..count)
            .map(|i| {
                if i == 0 {
                    PathSample {
                        point: self.first(),
                        ..self.sample_at(0.0)
                    }
                } else if i == count - 1 {
                    PathSample {
                        point: self.last(),
                        ..self.sample_at(length)
                    }
                } else {
                    self.sample_at(length * i as f64 / (count - 1) as f64)
                }
            })
            .collect()
    }

    /// Samples stepped by `spacing` from the start of the path
    ///
    /// Wraps on a closed path and stops at the end of an open one.
    pub fn resample_stepped(&self, spacing: f64, count: u32) -> Vec<PathSample> {
        let length = self.length();
        let closed = self.is_closed();
        let mut samples = Vec::with_capacity(count as usize);

        for i in 0..count {
            let s = i as f64 * spacing;
            if closed {
                samples.push(self.sample_at(s.rem_euclid(length)));
            } else if s <= length + VERTEX_EPSILON {
                samples.push(self.sample_at(s));
            } else {
                break;
            }
        }

        samples
    }
}

/// Parameters for path-following arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathArrayParams {
    /// Polyline vertices in host coordinates
    pub path_points: Vec<Point2D>,
    /// Number of copies (an upper bound for custom spacing on an open path)
    pub count: u32,
    /// Spread copies evenly over the whole path
    pub equal_spacing: bool,
    /// Arc length between copies when `equal_spacing` is off (points)
    pub custom_spacing: f64,
    /// Turn each copy to the local path direction
    pub rotate_along_path: bool,
}

impl PathArrayParams {
    /// Create parameters that spread `count` copies evenly along `path_points`
    pub fn equal(path_points: Vec<Point2D>, count: u32, rotate_along_path: bool) -> Self {
        Self {
            path_points,
            count,
            equal_spacing: true,
            custom_spacing: 0.0,
            rotate_along_path,
        }
    }

    /// Create parameters that step copies by `spacing` along `path_points`
    pub fn stepped(
        path_points: Vec<Point2D>,
        count: u32,
        spacing: f64,
        rotate_along_path: bool,
    ) -> Self {
        debug_assert!(spacing.is_finite(), "spacing must be finite, got {spacing}");
        Self {
            path_points,
            count,
            equal_spacing: false,
            custom_spacing: spacing,
            rotate_along_path,
        }
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), ArrangementError> {
        if self.count < 1 {
            return Err(ArrangementError::invalid("count", "must be >= 1, got 0"));
        }
        ArrangementError::require_non_negative("custom_spacing", self.custom_spacing)?;
        Polyline::new(&self.path_points).map(|_| ())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Generate transforms along the path
    pub fn generate(&self) -> Result<Vec<Transform>, ArrangementError> {
        self.validate()?;
        let polyline = Polyline::new(&self.path_points)?;

        let samples = if self.equal_spacing {
            polyline.resample_equal(self.count)
        } else {
            polyline.resample_stepped(self.custom_spacing, self.count)
        };

        Ok(samples
            .into_iter()
            .map(|sample| Transform {
                position: sample.point,
                rotation_degrees: if self.rotate_along_path {
                    Some(sample.tangent_degrees.unwrap_or(0.0))
                } else {
                    None
                },
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_tangent(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("tangent");
        assert!(
            (actual - expected).abs() < EPS,
            "expected tangent {expected}, got {actual}"
        );
    }

    fn l_path() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
        ]
    }

    #[test]
    fn test_cumulative_length() {
        let poly = Polyline::new(&l_path()).unwrap();
        assert_eq!(poly.length(), 20.0);
        assert!(!poly.is_closed());
    }

    #[test]
    fn test_sample_interpolates() {
        let poly = Polyline::new(&l_path()).unwrap();
        let s = poly.sample_at(15.0);
        assert!(s.point.approx_eq(Point2D::new(10.0, 5.0), EPS));
        assert_tangent(s.tangent_degrees, 90.0);
    }

    #[test]
    fn test_vertex_prefers_incoming_segment() {
        let poly = Polyline::new(&l_path()).unwrap();
        let s = poly.sample_at(10.0);
        assert_eq!(s.point, Point2D::new(10.0, 0.0));
        assert_eq!(s.tangent_degrees, Some(0.0));
    }

    #[test]
    fn test_rounded_arc_length_on_vertex_uses_incoming_segment() {
        // Length sums to 0.30000000000000004, so the second of four equal
        // samples lands one ulp past the corner
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.1, 0.0),
            Point2D::new(0.1, 0.2),
        ];
        let params = PathArrayParams::equal(points, 4, true);
        let out = params.generate().unwrap();
        assert_eq!(out[1].position, Point2D::new(0.1, 0.0));
        assert_tangent(out[1].rotation_degrees, 0.0);
        assert_tangent(out[2].rotation_degrees, 90.0);
    }

    #[test]
    fn test_leading_zero_length_segment_is_skipped() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 0.0),
            Point2D::new(0.0, 10.0),
        ];
        let poly = Polyline::new(&points).unwrap();
        assert_tangent(poly.sample_at(0.0).tangent_degrees, 90.0);
    }

    #[test]
    fn test_single_point_path() {
        let params = PathArrayParams::equal(vec![Point2D::new(3.0, 4.0)], 3, true);
        let out = params.generate().unwrap();
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|t| t.position == Point2D::new(3.0, 4.0)));
        assert!(out.iter().all(|t| t.rotation_degrees == Some(0.0)));
    }

    #[test]
    fn test_stepped_stops_at_open_end() {
        let params = PathArrayParams::stepped(l_path(), 10, 7.0, false);
        let out = params.generate().unwrap();
        // 0, 7, 14 fit on a 20pt path; 21 does not
        assert_eq!(out.len(), 3);
        assert!(out[2].position.approx_eq(Point2D::new(10.0, 4.0), EPS));
    }

    #[test]
    fn test_stepped_wraps_closed_path() {
        let square = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
            Point2D::new(0.0, 0.0),
        ];
        let params = PathArrayParams::stepped(square, 6, 10.0, true);
        let out = params.generate().unwrap();
        assert_eq!(out.len(), 6);
        // s = 40 wraps to 0, s = 50 wraps to 10
        assert!(out[4].position.approx_eq(Point2D::new(0.0, 0.0), EPS));
        assert!(out[5].position.approx_eq(Point2D::new(10.0, 0.0), EPS));
        assert_tangent(out[2].rotation_degrees, 90.0);
    }

    #[test]
    fn test_empty_path_rejected() {
        let params = PathArrayParams::equal(Vec::new(), 3, false);
        assert!(matches!(
            params.generate(),
            Err(ArrangementError::InvalidSpec {
                field: "path_points",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let params = PathArrayParams::equal(
            vec![Point2D::new(0.0, 0.0), Point2D::new(f64::NAN, 1.0)],
            2,
            false,
        );
        assert!(!params.is_valid());
    }
}
