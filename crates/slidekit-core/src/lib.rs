//! # SlideKit Core
//!
//! Core types and utilities for SlideKit.
//! Provides the geometry primitives, angle helpers, length units and error
//! types shared by the arrangement planner and the handle translator.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{ArrangementError, Error, GeometryError, Result};

pub use geometry::{
    angle_difference, normalize_degrees, normalize_signed_degrees, BoundingBox, Point2D,
    Transform,
};

pub use units::{
    convert_length, format_angle, format_length, mm_to_points, parse_length, points_to_mm,
    LengthUnit, MM_PER_INCH, MM_PER_POINT, POINTS_PER_INCH,
};
