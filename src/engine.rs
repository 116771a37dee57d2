//! Engine facade wiring the planner and translator to one configuration.

use slidekit_arrange::{ArrangementLimits, ArrangementPlanner, ArrangementSpec, PlannerConfig};
use slidekit_core::{BoundingBox, Result, Transform};
use slidekit_handles::{
    AdjustmentVector, Conversion, HandleGeometryTranslator, HandleReading, ShapeFamily,
    ShapeHandleAdjuster, ShapeHandleAnalysis, ShapeSize,
};
use slidekit_settings::{Config, SettingsResult};
use std::path::Path;
use tracing::debug;

/// Planner, translator and dialog limits built from one [`Config`]
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    planner: ArrangementPlanner,
    limits: ArrangementLimits,
    translator: HandleGeometryTranslator<'static>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::build(Config::default())
    }
}

impl Engine {
    /// Validate `config` and build an engine from it
    pub fn new(config: Config) -> SettingsResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build an engine from a JSON or TOML config file
    pub fn from_config_file(path: &Path) -> SettingsResult<Self> {
        let config = Config::load_from_file(path)?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let arrangement = &config.arrangement;
        let planner = ArrangementPlanner::new(PlannerConfig {
            tangent_rotation_offset_degrees: arrangement.tangent_rotation_offset_degrees,
        });
        let limits = ArrangementLimits {
            max_count: arrangement.max_array_count,
            min_angle_degrees: arrangement.min_rotation_angle,
            max_angle_degrees: arrangement.max_rotation_angle,
            ..ArrangementLimits::default()
        };
        debug!(
            tangent_offset = arrangement.tangent_rotation_offset_degrees,
            max_count = limits.max_count,
            "engine configured"
        );
        Self {
            config,
            planner,
            limits,
            translator: HandleGeometryTranslator::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn planner(&self) -> &ArrangementPlanner {
        &self.planner
    }

    pub fn limits(&self) -> &ArrangementLimits {
        &self.limits
    }

    pub fn translator(&self) -> &HandleGeometryTranslator<'static> {
        &self.translator
    }

    /// Plan an arrangement, rejecting only structurally invalid specs
    pub fn plan(
        &self,
        spec: &ArrangementSpec,
        source_bounds: &BoundingBox,
    ) -> Result<Vec<Transform>> {
        Ok(self.planner.plan(spec, source_bounds)?)
    }

    /// Plan an arrangement after checking it against the dialog limits
    pub fn plan_checked(
        &self,
        spec: &ArrangementSpec,
        source_bounds: &BoundingBox,
    ) -> Result<Vec<Transform>> {
        spec.check_limits(&self.limits)?;
        Ok(self.planner.plan(spec, source_bounds)?)
    }

    /// Plan for a source given as the host's `left, top, width, height`
    pub fn plan_for_rect(
        &self,
        spec: &ArrangementSpec,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<Vec<Transform>> {
        let source_bounds = BoundingBox::from_rect(left, top, width, height)?;
        self.plan_checked(spec, &source_bounds)
    }

    pub fn to_physical(
        &self,
        family: ShapeFamily,
        index: usize,
        raw: f64,
        size: &ShapeSize,
    ) -> Conversion {
        self.translator.to_physical(family, index, raw, size)
    }

    pub fn to_raw(
        &self,
        family: ShapeFamily,
        index: usize,
        physical: f64,
        size: &ShapeSize,
    ) -> Conversion {
        self.translator.to_raw(family, index, physical, size)
    }

    pub fn analyze(
        &self,
        family: ShapeFamily,
        adjustments: &AdjustmentVector,
        size: ShapeSize,
    ) -> ShapeHandleAnalysis {
        ShapeHandleAnalysis::analyze(&self.translator, family, adjustments, size)
    }

    pub fn adjuster(&self, family: ShapeFamily, size: ShapeSize) -> ShapeHandleAdjuster<'static> {
        ShapeHandleAdjuster::new(self.translator, family, size)
    }

    /// Display text for a reading using the configured units and precision
    pub fn format_reading(&self, reading: &HandleReading) -> String {
        let handles = &self.config.handles;
        reading.formatted(
            handles.angle_decimals,
            handles.length_unit,
            handles.length_decimals,
        )
    }
}
