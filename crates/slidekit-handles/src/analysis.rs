//! Reading and editing a shape's full set of adjustment handles.

use crate::catalog::{HandleDescriptor, ShapeSize, UnitKind};
use crate::family::ShapeFamily;
use crate::translator::{Conversion, HandleGeometryTranslator};
use serde::{Deserialize, Serialize};
use slidekit_core::{format_angle, format_length, LengthUnit};

/// Ordered raw adjustment values of one shape, 0-based
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjustmentVector(Vec<f64>);

impl AdjustmentVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Overwrite one value; returns false when the index does not exist
    pub fn set(&mut self, index: usize, value: f64) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for AdjustmentVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

/// One handle's raw and physical value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleReading {
    pub index: usize,
    pub descriptor: HandleDescriptor,
    pub raw: f64,
    pub physical: f64,
    pub clamped: bool,
    pub is_fallback: bool,
}

impl HandleReading {
    pub fn unit_kind(&self) -> UnitKind {
        self.descriptor.unit_kind
    }

    /// Physical value with its unit suffix, e.g. `-90.0°` or `12.70 mm`
    pub fn formatted(
        &self,
        angle_decimals: usize,
        length_unit: LengthUnit,
        length_decimals: usize,
    ) -> String {
        match self.descriptor.unit_kind {
            UnitKind::Angle => format_angle(self.physical, angle_decimals),
            UnitKind::Length => format_length(self.physical, length_unit, length_decimals),
            UnitKind::Ratio => format!("{:.*}", length_decimals, self.physical),
        }
    }
}

/// Every handle reading of one shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeHandleAnalysis {
    pub family: ShapeFamily,
    pub size: ShapeSize,
    pub readings: Vec<HandleReading>,
}

impl ShapeHandleAnalysis {
    /// Translate every value in `adjustments`
    ///
    /// Values beyond the cataloged handles are reported with the generic
    /// classification.
    pub fn analyze(
        translator: &HandleGeometryTranslator<'_>,
        family: ShapeFamily,
        adjustments: &AdjustmentVector,
        size: ShapeSize,
    ) -> Self {
        let readings = adjustments
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let lookup = translator.classify(family, index);
                let Conversion { value, clamped } =
                    translator.to_physical(family, index, raw, &size);
                HandleReading {
                    index,
                    descriptor: *lookup.descriptor,
                    raw,
                    physical: value,
                    clamped,
                    is_fallback: lookup.is_fallback,
                }
            })
            .collect();

        Self {
            family,
            size,
            readings,
        }
    }

    pub fn reading(&self, index: usize) -> Option<&HandleReading> {
        self.readings.get(index)
    }

    pub fn angle_handles(&self) -> impl Iterator<Item = &HandleReading> {
        self.readings
            .iter()
            .filter(|r| r.descriptor.unit_kind == UnitKind::Angle)
    }

    pub fn length_handles(&self) -> impl Iterator<Item = &HandleReading> {
        self.readings
            .iter()
            .filter(|r| r.descriptor.unit_kind == UnitKind::Length)
    }

    pub fn has_fallback(&self) -> bool {
        self.readings.iter().any(|r| r.is_fallback)
    }

    pub fn any_clamped(&self) -> bool {
        self.readings.iter().any(|r| r.clamped)
    }
}

/// Writes physical edits back into raw adjustment values
#[derive(Debug, Clone, Copy)]
pub struct ShapeHandleAdjuster<'a> {
    translator: HandleGeometryTranslator<'a>,
    family: ShapeFamily,
    size: ShapeSize,
}

impl<'a> ShapeHandleAdjuster<'a> {
    pub fn new(translator: HandleGeometryTranslator<'a>, family: ShapeFamily, size: ShapeSize) -> Self {
        Self {
            translator,
            family,
            size,
        }
    }

    /// Set one handle from a physical value
    ///
    /// Returns `None` when the shape has no value at `index`.
    pub fn set_physical(
        &self,
        adjustments: &mut AdjustmentVector,
        index: usize,
        physical: f64,
    ) -> Option<Conversion> {
        adjustments.get(index)?;
        let conversion = self
            .translator
            .to_raw(self.family, index, physical, &self.size);
        adjustments.set(index, conversion.value);
        Some(conversion)
    }

    /// Apply several `(index, physical)` edits to a copy of `adjustments`
    pub fn apply(&self, adjustments: &AdjustmentVector, edits: &[(usize, f64)]) -> AdjustmentVector {
        let mut out = adjustments.clone();
        for &(index, physical) in edits {
            self.set_physical(&mut out, index, physical);
        }
        out
    }
}
