//! Grid arrays: row-major cells, optionally tilted as one rigid body.

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use slidekit_core::{normalize_degrees, ArrangementError, Point2D, Transform};

/// Parameters for grid array operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridArrayParams {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
    /// Distance between column centers (points)
    pub horizontal_spacing: f64,
    /// Distance between row centers (points)
    pub vertical_spacing: f64,
    /// Tilt of the whole grid around its first cell, in degrees
    pub angle_degrees: f64,
}

impl GridArrayParams {
    /// Create new grid array parameters
    pub fn new(
        rows: u32,
        columns: u32,
        horizontal_spacing: f64,
        vertical_spacing: f64,
        angle_degrees: f64,
    ) -> Self {
        debug_assert!(
            horizontal_spacing.is_finite(),
            "horizontal_spacing must be finite, got {horizontal_spacing}"
        );
        debug_assert!(
            vertical_spacing.is_finite(),
            "vertical_spacing must be finite, got {vertical_spacing}"
        );
        Self {
            rows,
            columns,
            horizontal_spacing,
            vertical_spacing,
            angle_degrees,
        }
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<(), ArrangementError> {
        if self.columns < 1 {
            return Err(ArrangementError::invalid("columns", "must be >= 1, got 0"));
        }
        if self.rows < 1 {
            return Err(ArrangementError::invalid("rows", "must be >= 1, got 0"));
        }
        if self.rows.checked_mul(self.columns).is_none() {
            return Err(ArrangementError::invalid(
                "rows",
                format!(
                    "{} rows x {} columns exceeds {} copies",
                    self.rows,
                    self.columns,
                    u32::MAX
                ),
            ));
        }
        ArrangementError::require_non_negative("horizontal_spacing", self.horizontal_spacing)?;
        ArrangementError::require_non_negative("vertical_spacing", self.vertical_spacing)?;
        ArrangementError::require_finite("angle_degrees", self.angle_degrees)?;
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get total number of cells, saturating for grids `validate` rejects
    pub fn total_copies(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    /// `(row, column)` of the Nth instance in row-major order
    pub fn cell_of(&self, index: u32) -> (u32, u32) {
        let columns = self.columns.max(1);
        (index / columns, index % columns)
    }

    fn is_tilted(&self) -> bool {
        normalize_degrees(self.angle_degrees) != 0.0
    }

    /// Offset of a cell from the first cell, after tilting the grid
    pub fn get_offset(&self, row: u32, column: u32) -> Option<(f64, f64)> {
        if column >= self.columns || row >= self.rows {
            return None;
        }

        let local = Vector2::new(
            column as f64 * self.horizontal_spacing,
            row as f64 * self.vertical_spacing,
        );
        if !self.is_tilted() {
            return Some((local.x, local.y));
        }

        let tilted = Rotation2::new(self.angle_degrees.to_radians()) * local;
        Some((tilted.x, tilted.y))
    }

    /// Generate transforms with the first cell on `origin`
    ///
    /// A tilted grid rotates its cells along with it; an untilted grid leaves
    /// orientation unset.
    pub fn generate(&self, origin: Point2D) -> Result<Vec<Transform>, ArrangementError> {
        self.validate()?;

        let rotation = self
            .is_tilted()
            .then(|| normalize_degrees(self.angle_degrees));

        let mut transforms = Vec::with_capacity(self.total_copies() as usize);
        for index in 0..self.total_copies() {
            let (row, column) = self.cell_of(index);
            if let Some((dx, dy)) = self.get_offset(row, column) {
                transforms.push(Transform {
                    position: origin.offset(dx, dy),
                    rotation_degrees: rotation,
                });
            }
        }

        Ok(transforms)
    }
}
