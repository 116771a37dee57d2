//! Linear arrays: copies stepped along a single direction.

use serde::{Deserialize, Serialize};
use slidekit_core::{ArrangementError, Point2D, Transform};

/// Parameters for linear array operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearArrayParams {
    /// Direction of travel in degrees (0° = right, 90° = down)
    pub angle_degrees: f64,
    /// Number of instances, including the one on the source
    pub count: u32,
    /// Center-to-center distance between consecutive instances (points)
    pub spacing: f64,
}

impl LinearArrayParams {
    /// Create new linear array parameters
    pub fn new(angle_degrees: f64, count: u32, spacing: f64) -> Self {
        debug_assert!(
            angle_degrees.is_finite(),
            "angle_degrees must be finite, got {angle_degrees}"
        );
        debug_assert!(spacing.is_finite(), "spacing must be finite, got {spacing}");
        Self {
            angle_degrees,
            count,
            spacing,
        }
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), ArrangementError> {
        if self.count < 1 {
            return Err(ArrangementError::invalid("count", "must be >= 1, got 0"));
        }
        ArrangementError::require_finite("angle_degrees", self.angle_degrees)?;
        ArrangementError::require_non_negative("spacing", self.spacing)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Unit step direction `(cos θ, sin θ)`
    pub fn direction(&self) -> (f64, f64) {
        let rad = self.angle_degrees.to_radians();
        (rad.cos(), rad.sin())
    }

    /// Offset of the Nth instance from the source
    pub fn get_offset(&self, index: u32) -> (f64, f64) {
        let (dx, dy) = self.direction();
        let distance = index as f64 * self.spacing;
        (distance * dx, distance * dy)
    }

    /// Generate transforms starting at `origin`
    ///
    /// Linear arrays keep every copy's orientation, so no rotation is set.
    pub fn generate(&self, origin: Point2D) -> Result<Vec<Transform>, ArrangementError> {
        self.validate()?;

        Ok((0..self.count)
            .map(|i| {
                let (dx, dy) = self.get_offset(i);
                Transform::at(origin.offset(dx, dy))
            })
            .collect())
    }
}
