//! Error handling for SlideKit
//!
//! Provides the error types shared by the geometry engine:
//! - Geometry errors (malformed primitives such as inverted bounding boxes)
//! - Arrangement errors (array specifications that cannot be planned)
//!
//! Handle translation has no error type of its own: unknown shape families
//! fall back to a generic classification and out-of-range values are
//! clamped, so neither condition is ever raised.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents violations of the invariants of the shared geometry primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A bounding box edge is on the wrong side of its opposite edge
    #[error("Inverted bounding box: left={left}, top={top}, right={right}, bottom={bottom}")]
    InvertedBounds {
        /// Left edge in points.
        left: f64,
        /// Top edge in points.
        top: f64,
        /// Right edge in points.
        right: f64,
        /// Bottom edge in points.
        bottom: f64,
    },

    /// A coordinate is NaN or infinite
    #[error("Non-finite coordinate in {what}")]
    NonFinite {
        /// Which value was not finite.
        what: &'static str,
    },

    /// A bounding box was requested for an empty point set
    #[error("Cannot compute bounds of an empty point set")]
    EmptyPointSet,
}

/// Arrangement error type
///
/// Represents structurally impossible arrangement specifications. These are
/// reported before any transform is produced so that the caller can reject
/// the request without touching the host document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrangementError {
    /// A field of the specification is outside its structural domain
    #[error("Invalid arrangement field '{field}': {reason}")]
    InvalidSpec {
        /// The offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A field is valid but exceeds the limits configured for the dialog layer
    #[error("Arrangement field '{field}' = {value} is outside [{min}, {max}]")]
    LimitExceeded {
        /// The offending field name.
        field: &'static str,
        /// The value supplied.
        value: f64,
        /// Lower limit (inclusive).
        min: f64,
        /// Upper limit (inclusive).
        max: f64,
    },
}

impl ArrangementError {
    /// Create an `InvalidSpec` error for a field
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ArrangementError::InvalidSpec {
            field,
            reason: reason.into(),
        }
    }

    /// Require a numeric field to be finite
    pub fn require_finite(field: &'static str, value: f64) -> std::result::Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::invalid(field, format!("must be finite, got {value}")))
        }
    }

    /// Require a numeric field to be finite and not negative
    pub fn require_non_negative(
        field: &'static str,
        value: f64,
    ) -> std::result::Result<(), Self> {
        Self::require_finite(field, value)?;
        if value < 0.0 {
            return Err(Self::invalid(field, format!("must be >= 0, got {value}")));
        }
        Ok(())
    }
}

/// Main error type for SlideKit
///
/// A unified error type for engine operations that can fail on both
/// malformed geometry and impossible arrangements.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Arrangement error
    #[error(transparent)]
    Arrangement(#[from] ArrangementError),
}

impl Error {
    /// Check if this is an invalid arrangement specification
    pub fn is_invalid_spec(&self) -> bool {
        matches!(
            self,
            Error::Arrangement(ArrangementError::InvalidSpec { .. })
        )
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
