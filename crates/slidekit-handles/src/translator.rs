//! Conversion between raw adjustment values and physical units.

use crate::catalog::{HandleDescriptor, HandleLookup, ShapeFamilyCatalog, ShapeSize};
use crate::family::ShapeFamily;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Converted value plus whether it had to be clamped into range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub clamped: bool,
}

impl Conversion {
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            clamped: false,
        }
    }
}

/// Clamp into `[min, max]`, mapping NaN to the in-range value nearest zero
fn clamp_into(value: f64, min: f64, max: f64) -> (f64, bool) {
    if value.is_nan() {
        return (0.0f64.clamp(min, max), true);
    }
    let clamped = value.clamp(min, max);
    (clamped, clamped != value)
}

/// Translates handle values between the host's raw encoding and degrees,
/// millimeters or plain ratios
#[derive(Debug, Clone, Copy)]
pub struct HandleGeometryTranslator<'a> {
    catalog: &'a ShapeFamilyCatalog,
}

impl Default for HandleGeometryTranslator<'static> {
    fn default() -> Self {
        Self::new(ShapeFamilyCatalog::builtin())
    }
}

impl<'a> HandleGeometryTranslator<'a> {
    pub fn new(catalog: &'a ShapeFamilyCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a ShapeFamilyCatalog {
        self.catalog
    }

    /// Look up a handle, logging when the generic classification is used
    pub fn classify(&self, family: ShapeFamily, index: usize) -> HandleLookup<'static> {
        let lookup = self.catalog.descriptor(family, index);
        if lookup.is_fallback && family != ShapeFamily::GenericAdjustable {
            warn!(
                family = family.name(),
                index, "handle not cataloged, treating as plain ratio"
            );
        }
        lookup
    }

    /// Raw host value to degrees, millimeters or ratio
    pub fn to_physical(
        &self,
        family: ShapeFamily,
        index: usize,
        raw: f64,
        size: &ShapeSize,
    ) -> Conversion {
        let descriptor = self.classify(family, index).descriptor;
        let conversion = raw_to_physical(descriptor, raw, size);
        if conversion.clamped {
            debug!(
                family = family.name(),
                index,
                raw,
                min = descriptor.raw_min,
                max = descriptor.raw_max,
                "raw handle value clamped"
            );
        }
        conversion
    }

    /// Physical value back to the host's raw encoding
    pub fn to_raw(
        &self,
        family: ShapeFamily,
        index: usize,
        physical: f64,
        size: &ShapeSize,
    ) -> Conversion {
        let descriptor = self.classify(family, index).descriptor;
        let conversion = physical_to_raw(descriptor, physical, size);
        if conversion.clamped {
            debug!(
                family = family.name(),
                index, physical, "physical handle value clamped"
            );
        }
        conversion
    }
}

/// Descriptor-level raw to physical conversion
pub fn raw_to_physical(descriptor: &HandleDescriptor, raw: f64, size: &ShapeSize) -> Conversion {
    let (raw, clamped) = clamp_into(raw, descriptor.raw_min, descriptor.raw_max);
    Conversion {
        value: raw * descriptor.scale(size),
        clamped,
    }
}

/// Descriptor-level physical to raw conversion
///
/// A degenerate reference length maps everything to the lower raw bound;
/// any non-zero physical value is reported as clamped.
pub fn physical_to_raw(
    descriptor: &HandleDescriptor,
    physical: f64,
    size: &ShapeSize,
) -> Conversion {
    let scale = descriptor.scale(size);
    if scale == 0.0 {
        let (_, clamped) = clamp_into(physical, 0.0, 0.0);
        return Conversion {
            value: descriptor.raw_min,
            clamped,
        };
    }
    let (min, max) = descriptor.physical_range(size);
    let (physical, clamped) = clamp_into(physical, min, max);
    let raw = (physical / scale).clamp(descriptor.raw_min, descriptor.raw_max);
    Conversion {
        value: raw,
        clamped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_core::MM_PER_POINT;

    const TOL: f64 = 1e-9;

    fn translator() -> HandleGeometryTranslator<'static> {
        HandleGeometryTranslator::default()
    }

    #[test]
    fn test_pie_angle_is_identity_in_range() {
        let size = ShapeSize::new(100.0, 100.0);
        let out = translator().to_physical(ShapeFamily::Pie, 0, -90.0, &size);
        assert_eq!(out, Conversion::exact(-90.0));
    }

    #[test]
    fn test_pie_angle_clamps_out_of_range() {
        let size = ShapeSize::new(100.0, 100.0);
        let out = translator().to_raw(ShapeFamily::Pie, 1, 270.0, &size);
        assert_eq!(out.value, 180.0);
        assert!(out.clamped);
    }

    #[test]
    fn test_moon_turn_fraction() {
        let size = ShapeSize::new(50.0, 80.0);
        let out = translator().to_physical(ShapeFamily::Moon, 0, 0.25, &size);
        assert!((out.value - 90.0).abs() < TOL);
        let back = translator().to_raw(ShapeFamily::Moon, 0, 90.0, &size);
        assert!((back.value - 0.25).abs() < TOL);
    }

    #[test]
    fn test_rounded_rectangle_corner_radius_in_mm() {
        // 144pt x 72pt: reference is 36pt
        let size = ShapeSize::new(144.0, 72.0);
        let out = translator().to_physical(ShapeFamily::RoundedRectangle, 0, 0.5, &size);
        assert!((out.value - 18.0 * MM_PER_POINT).abs() < TOL);
        assert!(!out.clamped);
    }

    #[test]
    fn test_callout_tail_uses_width_and_height() {
        let size = ShapeSize::new(200.0, 100.0);
        let x = translator().to_physical(ShapeFamily::CalloutTail, 0, -0.5, &size);
        let y = translator().to_physical(ShapeFamily::CalloutTail, 1, 1.5, &size);
        assert!((x.value + 100.0 * MM_PER_POINT).abs() < TOL);
        assert!((y.value - 150.0 * MM_PER_POINT).abs() < TOL);
    }

    #[test]
    fn test_zero_reference_maps_to_lower_bound() {
        let size = ShapeSize::new(0.0, 40.0);
        let out = translator().to_raw(ShapeFamily::Donut, 0, 5.0, &size);
        assert_eq!(out.value, 0.0);
        assert!(out.clamped);
        let zero = translator().to_raw(ShapeFamily::Donut, 0, 0.0, &size);
        assert_eq!(zero, Conversion::exact(0.0));
        let tail = translator().to_raw(ShapeFamily::CalloutTail, 0, -2.0, &size);
        assert_eq!(tail.value, -1.0);
        assert!(tail.clamped);
        let physical = translator().to_physical(ShapeFamily::Donut, 0, 0.3, &size);
        assert_eq!(physical.value, 0.0);
    }

    #[test]
    fn test_unknown_handle_falls_back_to_ratio() {
        let size = ShapeSize::new(10.0, 10.0);
        let out = translator().to_physical(ShapeFamily::Arc, 5, 12345.678, &size);
        assert_eq!(out, Conversion::exact(12345.678));
        let none = translator().to_raw(ShapeFamily::None, 0, -3.5, &size);
        assert_eq!(none, Conversion::exact(-3.5));
    }

    #[test]
    fn test_star_ratio_clamps() {
        let size = ShapeSize::new(10.0, 10.0);
        let out = translator().to_physical(ShapeFamily::Star, 0, 0.9, &size);
        assert_eq!(out.value, 0.5);
        assert!(out.clamped);
    }

    #[test]
    fn test_nan_is_clamped() {
        let size = ShapeSize::new(10.0, 10.0);
        let out = translator().to_physical(ShapeFamily::Arc, 0, f64::NAN, &size);
        assert_eq!(out.value, 0.0);
        assert!(out.clamped);
    }
}
