//! # SlideKit Arrange
//!
//! Computes where copies of a shape go when the user builds an array.
//!
//! ## Arrangement Families
//!
//! - **Linear**: copies stepped along one direction
//! - **Grid**: row-major cells, optionally tilted as one unit
//! - **Circular (equal division)**: the full circle split into equal steps
//! - **Circular (angle step)**: a fixed angular increment, including rotation copies
//! - **Path**: copies spread along a polyline by arc length
//!
//! ## Usage
//!
//! ```rust
//! use slidekit_arrange::{ArrangementPlanner, GridArrayParams};
//! use slidekit_core::BoundingBox;
//!
//! let source = BoundingBox::from_rect(0.0, 0.0, 40.0, 20.0).unwrap();
//! let spec = GridArrayParams::new(2, 3, 50.0, 30.0, 0.0).into();
//! let transforms = ArrangementPlanner::default().plan(&spec, &source).unwrap();
//! assert_eq!(transforms.len(), 6);
//! ```
//!
//! The planner never creates, moves or deletes shapes; callers apply the
//! returned transforms to duplicates in the host document.

pub mod circular;
pub mod footprint;
pub mod grid;
pub mod limits;
pub mod linear;
pub mod path;
pub mod planner;
pub mod spec;

pub use circular::{CircularAngleStepParams, CircularArrayParams, RadiusSource};
pub use footprint::footprint;
pub use grid::GridArrayParams;
pub use limits::{
    ArrangementLimits, MAX_ARRAY_COUNT, MAX_ROTATION_ANGLE, MIN_ARRAY_COUNT, MIN_ROTATION_ANGLE,
};
pub use linear::LinearArrayParams;
pub use path::{PathArrayParams, PathSample, Polyline};
pub use planner::{plan, ArrangementPlanner, PlannerConfig, DEFAULT_TANGENT_OFFSET_DEGREES};
pub use spec::{ArrangementSpec, ArrangementType};
