//! Dialog-level ranges for arrangement fields.
//!
//! The planner itself only rejects structurally impossible input. These
//! limits describe what the dialogs accept and are checked separately.

use serde::{Deserialize, Serialize};
use slidekit_core::ArrangementError;

/// Largest number of copies a dialog accepts
pub const MAX_ARRAY_COUNT: u32 = 500;

/// Smallest number of copies a dialog accepts
pub const MIN_ARRAY_COUNT: u32 = 2;

/// Most negative angle a dialog accepts, in degrees
pub const MIN_ROTATION_ANGLE: f64 = -360.0;

/// Largest angle a dialog accepts, in degrees
pub const MAX_ROTATION_ANGLE: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrangementLimits {
    pub min_count: u32,
    pub max_count: u32,
    pub min_angle_degrees: f64,
    pub max_angle_degrees: f64,
}

impl Default for ArrangementLimits {
    fn default() -> Self {
        Self {
            min_count: MIN_ARRAY_COUNT,
            max_count: MAX_ARRAY_COUNT,
            min_angle_degrees: MIN_ROTATION_ANGLE,
            max_angle_degrees: MAX_ROTATION_ANGLE,
        }
    }
}

impl ArrangementLimits {
    pub fn check_count(&self, count: u32) -> Result<(), ArrangementError> {
        if count < self.min_count || count > self.max_count {
            return Err(ArrangementError::LimitExceeded {
                field: "count",
                value: count as f64,
                min: self.min_count as f64,
                max: self.max_count as f64,
            });
        }
        Ok(())
    }

    pub fn check_angle(&self, field: &'static str, degrees: f64) -> Result<(), ArrangementError> {
        if !(self.min_angle_degrees..=self.max_angle_degrees).contains(&degrees) {
            return Err(ArrangementError::LimitExceeded {
                field,
                value: degrees,
                min: self.min_angle_degrees,
                max: self.max_angle_degrees,
            });
        }
        Ok(())
    }
}
