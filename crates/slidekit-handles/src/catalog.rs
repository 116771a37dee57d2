//! Static catalog of adjustment-handle descriptors per shape family.
//!
//! Each descriptor records what a raw adjustment value means: its unit
//! kind, how the host encodes it, which shape dimension a length is a
//! ratio of, and the raw range the host accepts.

use crate::family::ShapeFamily;
use serde::{Deserialize, Serialize};
use slidekit_core::MM_PER_POINT;
use std::fmt;

/// Physical meaning of a handle value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitKind {
    /// Degrees, clockwise
    Angle,
    /// Millimeters
    Length,
    /// Dimensionless
    Ratio,
}

impl UnitKind {
    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Angle => "angle",
            UnitKind::Length => "length",
            UnitKind::Ratio => "ratio",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How the host stores a handle's raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawEncoding {
    /// Raw value is already in degrees
    Degrees,
    /// Raw value is a fraction of a full turn
    TurnFraction,
    /// Raw value is a plain ratio (of a reference length, or unitless)
    Ratio,
}

/// Shape dimension a length handle's ratio refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLength {
    None,
    /// Half of the shorter side
    MinHalfExtent,
    /// The shorter side
    MinExtent,
    Width,
    Height,
}

impl ReferenceLength {
    /// Reference length in points for a shape of the given size
    pub fn resolve(&self, size: &ShapeSize) -> f64 {
        let width = size.width.abs();
        let height = size.height.abs();
        match self {
            ReferenceLength::None => 0.0,
            ReferenceLength::MinHalfExtent => width.min(height) / 2.0,
            ReferenceLength::MinExtent => width.min(height),
            ReferenceLength::Width => width,
            ReferenceLength::Height => height,
        }
    }
}

/// Shape extent in points, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeSize {
    pub width: f64,
    pub height: f64,
}

impl ShapeSize {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width.is_finite(), "width must be finite");
        debug_assert!(height.is_finite(), "height must be finite");
        Self { width, height }
    }
}

/// What one adjustment handle means
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleDescriptor {
    pub unit_kind: UnitKind,
    /// Short label shown next to the value
    pub role: &'static str,
    pub raw_encoding: RawEncoding,
    pub reference: ReferenceLength,
    /// Lowest raw value the host accepts
    pub raw_min: f64,
    /// Highest raw value the host accepts
    pub raw_max: f64,
}

impl HandleDescriptor {
    /// Angle stored directly in degrees
    pub const fn degrees(role: &'static str, min_degrees: f64, max_degrees: f64) -> Self {
        Self {
            unit_kind: UnitKind::Angle,
            role,
            raw_encoding: RawEncoding::Degrees,
            reference: ReferenceLength::None,
            raw_min: min_degrees,
            raw_max: max_degrees,
        }
    }

    /// Angle stored as a fraction of a full turn
    pub const fn turn_fraction(role: &'static str, min_degrees: f64, max_degrees: f64) -> Self {
        Self {
            unit_kind: UnitKind::Angle,
            role,
            raw_encoding: RawEncoding::TurnFraction,
            reference: ReferenceLength::None,
            raw_min: min_degrees / 360.0,
            raw_max: max_degrees / 360.0,
        }
    }

    /// Length stored as a ratio of a shape dimension
    pub const fn length(
        role: &'static str,
        reference: ReferenceLength,
        min_ratio: f64,
        max_ratio: f64,
    ) -> Self {
        Self {
            unit_kind: UnitKind::Length,
            role,
            raw_encoding: RawEncoding::Ratio,
            reference,
            raw_min: min_ratio,
            raw_max: max_ratio,
        }
    }

    /// Unitless value shown as-is
    pub const fn ratio(role: &'static str, min: f64, max: f64) -> Self {
        Self {
            unit_kind: UnitKind::Ratio,
            role,
            raw_encoding: RawEncoding::Ratio,
            reference: ReferenceLength::None,
            raw_min: min,
            raw_max: max,
        }
    }

    /// Physical units per raw unit for a shape of the given size
    ///
    /// Degrees for angles, millimeters for lengths, 1 for ratios. Zero
    /// when a length handle's reference dimension is degenerate.
    pub fn scale(&self, size: &ShapeSize) -> f64 {
        match (self.unit_kind, self.raw_encoding) {
            (UnitKind::Angle, RawEncoding::TurnFraction) => 360.0,
            (UnitKind::Angle, _) => 1.0,
            (UnitKind::Length, _) => self.reference.resolve(size) * MM_PER_POINT,
            (UnitKind::Ratio, _) => 1.0,
        }
    }

    /// Valid range expressed in physical units
    pub fn physical_range(&self, size: &ShapeSize) -> (f64, f64) {
        let scale = self.scale(size);
        if scale == 0.0 {
            return (0.0, 0.0);
        }
        (self.raw_min * scale, self.raw_max * scale)
    }

    pub fn is_bounded(&self) -> bool {
        self.raw_min.is_finite() && self.raw_max.is_finite()
    }
}

/// Handles of one family
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub family: ShapeFamily,
    pub handles: &'static [HandleDescriptor],
}

/// Result of looking up a handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLookup<'a> {
    pub descriptor: &'a HandleDescriptor,
    /// True when the family/index pair is not cataloged and the generic
    /// classification was substituted
    pub is_fallback: bool,
}

/// Classification used for anything the catalog does not describe
pub static GENERIC_HANDLE: HandleDescriptor =
    HandleDescriptor::ratio("adjustment", f64::NEG_INFINITY, f64::INFINITY);

const START_END_ANGLES: [HandleDescriptor; 2] = [
    HandleDescriptor::degrees("start angle", -180.0, 180.0),
    HandleDescriptor::degrees("end angle", -180.0, 180.0),
];

static ARC_HANDLES: [HandleDescriptor; 2] = START_END_ANGLES;
static CHORD_HANDLES: [HandleDescriptor; 2] = START_END_ANGLES;
static PIE_HANDLES: [HandleDescriptor; 2] = START_END_ANGLES;

static BLOCK_ARC_HANDLES: [HandleDescriptor; 3] = [
    HandleDescriptor::degrees("start angle", -180.0, 180.0),
    HandleDescriptor::degrees("end angle", -180.0, 180.0),
    HandleDescriptor::length("thickness", ReferenceLength::MinExtent, 0.0, 0.5),
];

static DONUT_HANDLES: [HandleDescriptor; 1] = [HandleDescriptor::length(
    "ring thickness",
    ReferenceLength::MinExtent,
    0.0,
    0.5,
)];

static MOON_HANDLES: [HandleDescriptor; 1] =
    [HandleDescriptor::turn_fraction("crescent angle", 0.0, 360.0)];

static ROUNDED_RECTANGLE_HANDLES: [HandleDescriptor; 1] = [HandleDescriptor::length(
    "corner radius",
    ReferenceLength::MinHalfExtent,
    0.0,
    1.0,
)];

static CALLOUT_TAIL_HANDLES: [HandleDescriptor; 2] = [
    HandleDescriptor::length("tail x", ReferenceLength::Width, -1.0, 2.0),
    HandleDescriptor::length("tail y", ReferenceLength::Height, -1.0, 2.0),
];

static STAR_HANDLES: [HandleDescriptor; 1] = [HandleDescriptor::ratio("inner radius", 0.0, 0.5)];

static BUILTIN_ENTRIES: [CatalogEntry; 9] = [
    CatalogEntry {
        family: ShapeFamily::Arc,
        handles: &ARC_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::Chord,
        handles: &CHORD_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::Pie,
        handles: &PIE_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::BlockArc,
        handles: &BLOCK_ARC_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::Donut,
        handles: &DONUT_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::Moon,
        handles: &MOON_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::RoundedRectangle,
        handles: &ROUNDED_RECTANGLE_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::CalloutTail,
        handles: &CALLOUT_TAIL_HANDLES,
    },
    CatalogEntry {
        family: ShapeFamily::Star,
        handles: &STAR_HANDLES,
    },
];

/// The built-in, read-only catalog
pub static BUILTIN_CATALOG: ShapeFamilyCatalog = ShapeFamilyCatalog::new(&BUILTIN_ENTRIES);

/// Read-only table of handle descriptors keyed by shape family
#[derive(Debug, Clone, Copy)]
pub struct ShapeFamilyCatalog {
    entries: &'static [CatalogEntry],
}

impl ShapeFamilyCatalog {
    pub const fn new(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    pub fn builtin() -> &'static ShapeFamilyCatalog {
        &BUILTIN_CATALOG
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Cataloged handles of a family, empty for uncataloged families
    pub fn descriptors(&self, family: ShapeFamily) -> &'static [HandleDescriptor] {
        self.entries
            .iter()
            .find(|entry| entry.family == family)
            .map(|entry| entry.handles)
            .unwrap_or(&[])
    }

    /// Descriptor for one handle, falling back to the generic ratio
    pub fn descriptor(&self, family: ShapeFamily, index: usize) -> HandleLookup<'static> {
        match self.descriptors(family).get(index) {
            Some(descriptor) => HandleLookup {
                descriptor,
                is_fallback: false,
            },
            None => HandleLookup {
                descriptor: &GENERIC_HANDLE,
                is_fallback: true,
            },
        }
    }

    pub fn handle_count(&self, family: ShapeFamily) -> usize {
        self.descriptors(family).len()
    }
}
