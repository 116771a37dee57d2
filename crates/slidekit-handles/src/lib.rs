//! # SlideKit Handles
//!
//! Makes shape adjustment handles editable in real units.
//!
//! Hosts store adjustment values in shape-specific encodings: degrees for
//! arc angles, fractions of a turn for the moon crescent, ratios of a
//! shape dimension for corner radii and callout tails. The
//! [`ShapeFamilyCatalog`] records which encoding each handle uses and the
//! [`HandleGeometryTranslator`] converts between raw values and degrees,
//! millimeters or plain ratios.
//!
//! ```rust
//! use slidekit_handles::{HandleGeometryTranslator, ShapeFamily, ShapeSize};
//!
//! let translator = HandleGeometryTranslator::default();
//! let size = ShapeSize::new(100.0, 100.0);
//! let angle = translator.to_physical(ShapeFamily::Pie, 0, -90.0, &size);
//! assert_eq!(angle.value, -90.0);
//! assert!(!angle.clamped);
//! ```

pub mod analysis;
pub mod catalog;
pub mod family;
pub mod translator;

pub use analysis::{AdjustmentVector, HandleReading, ShapeHandleAdjuster, ShapeHandleAnalysis};
pub use catalog::{
    CatalogEntry, HandleDescriptor, HandleLookup, RawEncoding, ReferenceLength, ShapeFamilyCatalog,
    ShapeSize, UnitKind, BUILTIN_CATALOG, GENERIC_HANDLE,
};
pub use family::{auto_shape, ShapeFamily};
pub use translator::{physical_to_raw, raw_to_physical, Conversion, HandleGeometryTranslator};
