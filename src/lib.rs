//! # SlideKit
//!
//! Geometry engine behind a presentation add-in's array and handle tools:
//! - Array placement: linear, grid, circular, rotation copy and path-following
//! - Adjustment-handle translation between raw host values and degrees,
//!   millimeters or plain ratios
//!
//! ## Architecture
//!
//! SlideKit is organized as a workspace with multiple crates:
//!
//! 1. **slidekit-core** - Geometry primitives, angle helpers, units, errors
//! 2. **slidekit-arrange** - Arrangement specs and the planner
//! 3. **slidekit-handles** - Shape family catalog and handle translator
//! 4. **slidekit-settings** - Configuration files
//! 5. **slidekit** - This facade: [`Engine`] plus logging setup
//!
//! The engine never touches the host document. Callers duplicate shapes
//! and write adjustment values themselves using the returned numbers.

pub mod engine;

pub use engine::Engine;

pub use slidekit_core::{
    angle_difference, format_angle, format_length, normalize_degrees, normalize_signed_degrees,
    parse_length, ArrangementError, BoundingBox, Error, GeometryError, LengthUnit, Point2D,
    Result, Transform,
};

pub use slidekit_arrange::{
    footprint, plan, ArrangementLimits, ArrangementPlanner, ArrangementSpec, ArrangementType,
    CircularAngleStepParams, CircularArrayParams, GridArrayParams, LinearArrayParams,
    PathArrayParams, PlannerConfig, Polyline, RadiusSource,
};

pub use slidekit_handles::{
    AdjustmentVector, Conversion, HandleDescriptor, HandleGeometryTranslator, HandleReading,
    ShapeFamily, ShapeFamilyCatalog, ShapeHandleAdjuster, ShapeHandleAnalysis, ShapeSize,
    UnitKind,
};

pub use slidekit_settings::{
    default_config_path, ArrangementSettings, Config, ConfigError, HandleSettings,
    LoggingSettings, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - `RUST_LOG` support, falling back to the configured level
/// - Pretty console output, or JSON lines when `json` is set
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use anyhow::Context;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.level.trim()))
        .with_context(|| format!("invalid log filter '{}'", settings.level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init()
            .context("failed to install JSON log subscriber")?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()
            .context("failed to install log subscriber")?;
    }

    tracing::info!(version = VERSION, build_date = BUILD_DATE, "logging initialized");
    Ok(())
}
