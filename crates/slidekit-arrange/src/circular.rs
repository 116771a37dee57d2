//! # Circular Arrays
//!
//! Two ways of placing copies on a circle:
//!
//! - **Equal division** ([`CircularArrayParams`]): the full turn is split
//!   into `count` equal steps, so the copies always close the circle.
//! - **Angle step** ([`CircularAngleStepParams`]): every copy advances by a
//!   fixed angle regardless of `count`. A rotation copy is the `count = 2`
//!   case of this mode.
//!
//! Both modes can turn each copy to face along the circle. The tangent
//! offset added to the position angle depends on the host's default shape
//! orientation and is supplied by the planner configuration.

use serde::{Deserialize, Serialize};
use slidekit_core::{normalize_degrees, ArrangementError, Point2D, Transform};

/// Place one instance on a circle
fn ring_transform(
    center: Point2D,
    radius: f64,
    angle_degrees: f64,
    rotate_shapes: bool,
    tangent_offset_degrees: f64,
) -> Transform {
    let position = Point2D::polar(center, radius, angle_degrees);
    if rotate_shapes {
        Transform::rotated(
            position,
            normalize_degrees(angle_degrees + tangent_offset_degrees),
        )
    } else {
        Transform::at(position)
    }
}

fn require_finite_point(field: &'static str, p: Point2D) -> Result<(), ArrangementError> {
    ArrangementError::require_finite(field, p.x)?;
    ArrangementError::require_finite(field, p.y)
}

/// Parameters for equal-division circular arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularArrayParams {
    /// Center of the circle
    pub center: Point2D,
    /// Distance from the center to every copy (points)
    pub radius: f64,
    /// Number of copies around the full circle
    pub count: u32,
    /// Angle of the first copy in degrees
    pub start_angle_degrees: f64,
    /// Turn each copy to face along the circle
    pub rotate_shapes: bool,
}

impl CircularArrayParams {
    /// Create new circular array parameters
    pub fn new(
        center: Point2D,
        radius: f64,
        count: u32,
        start_angle_degrees: f64,
        rotate_shapes: bool,
    ) -> Self {
        debug_assert!(radius.is_finite(), "radius must be finite, got {radius}");
        debug_assert!(
            start_angle_degrees.is_finite(),
            "start_angle_degrees must be finite, got {start_angle_degrees}"
        );
        Self {
            center,
            radius,
            count,
            start_angle_degrees,
            rotate_shapes,
        }
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), ArrangementError> {
        if self.count < 1 {
            return Err(ArrangementError::invalid("count", "must be >= 1, got 0"));
        }
        require_finite_point("center", self.center)?;
        ArrangementError::require_non_negative("radius", self.radius)?;
        ArrangementError::require_finite("start_angle_degrees", self.start_angle_degrees)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Calculate angle step between copies
    pub fn angle_step(&self) -> f64 {
        360.0 / self.count.max(1) as f64
    }

    /// Angle of the Nth copy in degrees (not normalized)
    pub fn angle_of(&self, index: u32) -> f64 {
        self.start_angle_degrees + index as f64 * self.angle_step()
    }

    /// Generate transforms around the circle
    pub fn generate(&self, tangent_offset_degrees: f64) -> Result<Vec<Transform>, ArrangementError> {
        self.validate()?;

        Ok((0..self.count)
            .map(|i| {
                ring_transform(
                    self.center,
                    self.radius,
                    self.angle_of(i),
                    self.rotate_shapes,
                    tangent_offset_degrees,
                )
            })
            .collect())
    }
}

/// Where the radius of an angle-step array comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusSource {
    /// A radius typed in by the user (points)
    Explicit(f64),
    /// The distance between the array center and the source shape's center
    FromSource,
}

/// Parameters for angle-step circular arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularAngleStepParams {
    /// Center of rotation
    pub center: Point2D,
    /// How the radius is obtained
    pub radius: RadiusSource,
    /// Angle between consecutive copies; negative turns counter-clockwise
    pub angle_step_degrees: f64,
    /// Number of copies, including the first
    pub count: u32,
    /// Angle of the first copy in degrees
    pub start_angle_degrees: f64,
    /// Turn each copy to face along the circle
    pub rotate_shapes: bool,
}

impl CircularAngleStepParams {
    /// Create new angle-step parameters
    pub fn new(
        center: Point2D,
        radius: RadiusSource,
        angle_step_degrees: f64,
        count: u32,
        start_angle_degrees: f64,
        rotate_shapes: bool,
    ) -> Self {
        debug_assert!(
            angle_step_degrees.is_finite(),
            "angle_step_degrees must be finite, got {angle_step_degrees}"
        );
        Self {
            center,
            radius,
            angle_step_degrees,
            count,
            start_angle_degrees,
            rotate_shapes,
        }
    }

    /// Rotation copy: one copy of the source turned by `angle_degrees` about `center`
    ///
    /// The first instance sits exactly on the source; the second is the copy.
    pub fn rotation_copy(
        center: Point2D,
        source_center: Point2D,
        angle_degrees: f64,
        rotate_shapes: bool,
    ) -> Self {
        let start_angle_degrees = if center == source_center {
            0.0
        } else {
            center.angle_to(source_center)
        };
        Self::new(
            center,
            RadiusSource::FromSource,
            angle_degrees,
            2,
            start_angle_degrees,
            rotate_shapes,
        )
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), ArrangementError> {
        if self.count < 1 {
            return Err(ArrangementError::invalid("count", "must be >= 1, got 0"));
        }
        require_finite_point("center", self.center)?;
        if let RadiusSource::Explicit(radius) = self.radius {
            ArrangementError::require_non_negative("radius", radius)?;
        }
        ArrangementError::require_finite("angle_step_degrees", self.angle_step_degrees)?;
        ArrangementError::require_finite("start_angle_degrees", self.start_angle_degrees)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Radius for a source centered at `source_center`
    pub fn resolve_radius(&self, source_center: Point2D) -> f64 {
        match self.radius {
            RadiusSource::Explicit(radius) => radius,
            RadiusSource::FromSource => self.center.distance_to(source_center),
        }
    }

    /// Angle of the Nth copy in degrees (not normalized)
    pub fn angle_of(&self, index: u32) -> f64 {
        self.start_angle_degrees + index as f64 * self.angle_step_degrees
    }

    /// Total angle swept from the first to the last copy
    pub fn sweep_degrees(&self) -> f64 {
        self.count.saturating_sub(1) as f64 * self.angle_step_degrees
    }

    /// Generate transforms for a source centered at `source_center`
    pub fn generate(
        &self,
        source_center: Point2D,
        tangent_offset_degrees: f64,
    ) -> Result<Vec<Transform>, ArrangementError> {
        self.validate()?;
        let radius = self.resolve_radius(source_center);

        Ok((0..self.count)
            .map(|i| {
                ring_transform(
                    self.center,
                    radius,
                    self.angle_of(i),
                    self.rotate_shapes,
                    tangent_offset_degrees,
                )
            })
            .collect())
    }
}
