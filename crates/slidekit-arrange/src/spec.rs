//! The arrangement specification: one tagged union over every array family.

use crate::circular::{CircularAngleStepParams, CircularArrayParams};
use crate::grid::GridArrayParams;
use crate::limits::ArrangementLimits;
use crate::linear::LinearArrayParams;
use crate::path::PathArrayParams;
use serde::{Deserialize, Serialize};
use slidekit_core::ArrangementError;
use std::fmt;

/// Represents the different families of arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangementType {
    /// Copies along a straight line
    Linear,
    /// Rows and columns
    Grid,
    /// Full circle split into equal steps
    CircularEqualDivision,
    /// Fixed angular increment around a center
    CircularAngleStep,
    /// Copies distributed along a polyline
    PathFollow,
}

impl ArrangementType {
    /// Returns the display name of the arrangement type.
    pub fn name(&self) -> &'static str {
        match self {
            ArrangementType::Linear => "Linear",
            ArrangementType::Grid => "Grid",
            ArrangementType::CircularEqualDivision => "Circular",
            ArrangementType::CircularAngleStep => "Rotation Copy",
            ArrangementType::PathFollow => "Path",
        }
    }
}

impl fmt::Display for ArrangementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Declarative description of how copies of a shape are laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArrangementSpec {
    Linear(LinearArrayParams),
    Grid(GridArrayParams),
    CircularEqualDivision(CircularArrayParams),
    CircularAngleStep(CircularAngleStepParams),
    PathFollow(PathArrayParams),
}

impl ArrangementSpec {
    /// Get the arrangement type
    pub fn array_type(&self) -> ArrangementType {
        match self {
            ArrangementSpec::Linear(_) => ArrangementType::Linear,
            ArrangementSpec::Grid(_) => ArrangementType::Grid,
            ArrangementSpec::CircularEqualDivision(_) => ArrangementType::CircularEqualDivision,
            ArrangementSpec::CircularAngleStep(_) => ArrangementType::CircularAngleStep,
            ArrangementSpec::PathFollow(_) => ArrangementType::PathFollow,
        }
    }

    /// Validate the structural invariants of the specification
    pub fn validate(&self) -> Result<(), ArrangementError> {
        match self {
            ArrangementSpec::Linear(params) => params.validate(),
            ArrangementSpec::Grid(params) => params.validate(),
            ArrangementSpec::CircularEqualDivision(params) => params.validate(),
            ArrangementSpec::CircularAngleStep(params) => params.validate(),
            ArrangementSpec::PathFollow(params) => params.validate(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Requested number of instances
    ///
    /// For path arrays with custom spacing on an open path this is an upper
    /// bound; the planner may return fewer.
    pub fn total_copies(&self) -> u32 {
        match self {
            ArrangementSpec::Linear(params) => params.count,
            ArrangementSpec::Grid(params) => params.total_copies(),
            ArrangementSpec::CircularEqualDivision(params) => params.count,
            ArrangementSpec::CircularAngleStep(params) => params.count,
            ArrangementSpec::PathFollow(params) => params.count,
        }
    }

    /// Check the specification against dialog-level limits
    pub fn check_limits(&self, limits: &ArrangementLimits) -> Result<(), ArrangementError> {
        limits.check_count(self.total_copies())?;
        match self {
            ArrangementSpec::Linear(params) => {
                limits.check_angle("angle_degrees", params.angle_degrees)
            }
            ArrangementSpec::Grid(params) => {
                limits.check_angle("angle_degrees", params.angle_degrees)
            }
            ArrangementSpec::CircularEqualDivision(params) => {
                limits.check_angle("start_angle_degrees", params.start_angle_degrees)
            }
            ArrangementSpec::CircularAngleStep(params) => {
                limits.check_angle("start_angle_degrees", params.start_angle_degrees)?;
                limits.check_angle("angle_step_degrees", params.angle_step_degrees)
            }
            ArrangementSpec::PathFollow(_) => Ok(()),
        }
    }
}

impl From<LinearArrayParams> for ArrangementSpec {
    fn from(params: LinearArrayParams) -> Self {
        ArrangementSpec::Linear(params)
    }
}

impl From<GridArrayParams> for ArrangementSpec {
    fn from(params: GridArrayParams) -> Self {
        ArrangementSpec::Grid(params)
    }
}

impl From<CircularArrayParams> for ArrangementSpec {
    fn from(params: CircularArrayParams) -> Self {
        ArrangementSpec::CircularEqualDivision(params)
    }
}

impl From<CircularAngleStepParams> for ArrangementSpec {
    fn from(params: CircularAngleStepParams) -> Self {
        ArrangementSpec::CircularAngleStep(params)
    }
}

impl From<PathArrayParams> for ArrangementSpec {
    fn from(params: PathArrayParams) -> Self {
        ArrangementSpec::PathFollow(params)
    }
}
