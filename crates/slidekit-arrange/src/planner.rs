//! # Arrangement Planner
//!
//! Turns an [`ArrangementSpec`] and the bounds of the source shape(s) into the
//! ordered list of transforms for every generated instance.
//!
//! The planner is a pure function of its inputs. Its only configuration is
//! the tangent offset used when circular arrays turn their copies, which
//! depends on how the host orients a freshly created shape.

use crate::spec::ArrangementSpec;
use serde::{Deserialize, Serialize};
use slidekit_core::{ArrangementError, BoundingBox, Transform};
use tracing::debug;

/// Offset added to a copy's position angle when it is turned to face along a circle
pub const DEFAULT_TANGENT_OFFSET_DEGREES: f64 = 90.0;

/// Planner configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Added to the position angle of circular copies when `rotate_shapes` is set
    pub tangent_rotation_offset_degrees: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            tangent_rotation_offset_degrees: DEFAULT_TANGENT_OFFSET_DEGREES,
        }
    }
}

/// Computes per-instance transforms for arrangement specifications
#[derive(Debug, Clone, Default)]
pub struct ArrangementPlanner {
    config: PlannerConfig,
}

impl ArrangementPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan every instance of `spec` for a source occupying `source_bounds`
    ///
    /// Linear and grid arrays start on the source center. Circular arrays use
    /// their own center; an angle-step array may take its radius from the
    /// source position. Path arrays place copies on the path points directly.
    pub fn plan(
        &self,
        spec: &ArrangementSpec,
        source_bounds: &BoundingBox,
    ) -> Result<Vec<Transform>, ArrangementError> {
        let origin = source_bounds.center();
        let offset = self.config.tangent_rotation_offset_degrees;

        let transforms = match spec {
            ArrangementSpec::Linear(params) => params.generate(origin),
            ArrangementSpec::Grid(params) => params.generate(origin),
            ArrangementSpec::CircularEqualDivision(params) => params.generate(offset),
            ArrangementSpec::CircularAngleStep(params) => params.generate(origin, offset),
            ArrangementSpec::PathFollow(params) => params.generate(),
        }?;

        debug!(
            kind = spec.array_type().name(),
            requested = spec.total_copies(),
            planned = transforms.len(),
            "planned arrangement"
        );

        Ok(transforms)
    }
}

/// Plan with the default configuration
pub fn plan(
    spec: &ArrangementSpec,
    source_bounds: &BoundingBox,
) -> Result<Vec<Transform>, ArrangementError> {
    ArrangementPlanner::default().plan(spec, source_bounds)
}
