//! Shape families: the geometric category that decides what a shape's
//! adjustment handles mean.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host AutoShapeType identifiers for the shapes the catalog knows about
pub mod auto_shape {
    pub const RECTANGLE: i32 = 1;
    pub const ROUNDED_RECTANGLE: i32 = 5;
    pub const OVAL: i32 = 9;
    pub const DONUT: i32 = 18;
    pub const BLOCK_ARC: i32 = 20;
    pub const MOON: i32 = 24;
    pub const ARC: i32 = 25;
    pub const STAR_4_POINT: i32 = 91;
    pub const STAR_5_POINT: i32 = 92;
    pub const STAR_8_POINT: i32 = 93;
    pub const STAR_16_POINT: i32 = 94;
    pub const STAR_24_POINT: i32 = 95;
    pub const STAR_32_POINT: i32 = 96;
    pub const RECTANGULAR_CALLOUT: i32 = 105;
    pub const ROUNDED_RECTANGULAR_CALLOUT: i32 = 106;
    pub const OVAL_CALLOUT: i32 = 107;
    pub const CLOUD_CALLOUT: i32 = 108;
    pub const PIE: i32 = 142;
    pub const CHORD: i32 = 161;
}

/// Handle-bearing shape category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    Arc,
    Chord,
    Pie,
    BlockArc,
    Donut,
    Moon,
    RoundedRectangle,
    CalloutTail,
    Star,
    /// Any shape whose handles are not cataloged; values are plain ratios
    GenericAdjustable,
    /// Shapes without adjustment handles
    None,
}

impl ShapeFamily {
    pub const ALL: [ShapeFamily; 11] = [
        ShapeFamily::Arc,
        ShapeFamily::Chord,
        ShapeFamily::Pie,
        ShapeFamily::BlockArc,
        ShapeFamily::Donut,
        ShapeFamily::Moon,
        ShapeFamily::RoundedRectangle,
        ShapeFamily::CalloutTail,
        ShapeFamily::Star,
        ShapeFamily::GenericAdjustable,
        ShapeFamily::None,
    ];

    /// Classify a host AutoShapeType identifier
    ///
    /// Unknown identifiers are treated as generically adjustable so that
    /// custom geometry stays editable.
    pub fn from_auto_shape_type(id: i32) -> Self {
        use auto_shape::*;
        match id {
            ARC => ShapeFamily::Arc,
            CHORD => ShapeFamily::Chord,
            PIE => ShapeFamily::Pie,
            BLOCK_ARC => ShapeFamily::BlockArc,
            DONUT => ShapeFamily::Donut,
            MOON => ShapeFamily::Moon,
            ROUNDED_RECTANGLE => ShapeFamily::RoundedRectangle,
            RECTANGULAR_CALLOUT | ROUNDED_RECTANGULAR_CALLOUT | OVAL_CALLOUT | CLOUD_CALLOUT => {
                ShapeFamily::CalloutTail
            }
            STAR_4_POINT..=STAR_32_POINT => ShapeFamily::Star,
            RECTANGLE | OVAL => ShapeFamily::None,
            _ => ShapeFamily::GenericAdjustable,
        }
    }

    /// Stable identifier used in configuration and logs
    pub fn name(&self) -> &'static str {
        match self {
            ShapeFamily::Arc => "arc",
            ShapeFamily::Chord => "chord",
            ShapeFamily::Pie => "pie",
            ShapeFamily::BlockArc => "block_arc",
            ShapeFamily::Donut => "donut",
            ShapeFamily::Moon => "moon",
            ShapeFamily::RoundedRectangle => "rounded_rectangle",
            ShapeFamily::CalloutTail => "callout_tail",
            ShapeFamily::Star => "star",
            ShapeFamily::GenericAdjustable => "generic_adjustable",
            ShapeFamily::None => "none",
        }
    }

    /// Whether handles of this family describe angles along an ellipse
    pub fn is_angular(&self) -> bool {
        matches!(
            self,
            ShapeFamily::Arc
                | ShapeFamily::Chord
                | ShapeFamily::Pie
                | ShapeFamily::BlockArc
                | ShapeFamily::Moon
        )
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShapeFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "arc" => Ok(ShapeFamily::Arc),
            "chord" => Ok(ShapeFamily::Chord),
            "pie" => Ok(ShapeFamily::Pie),
            "blockarc" => Ok(ShapeFamily::BlockArc),
            "donut" => Ok(ShapeFamily::Donut),
            "moon" => Ok(ShapeFamily::Moon),
            "roundedrectangle" | "roundedrect" => Ok(ShapeFamily::RoundedRectangle),
            "callouttail" | "callout" => Ok(ShapeFamily::CalloutTail),
            "star" => Ok(ShapeFamily::Star),
            "genericadjustable" | "generic" => Ok(ShapeFamily::GenericAdjustable),
            "none" => Ok(ShapeFamily::None),
            _ => Err(format!("Unknown shape family: {}", s)),
        }
    }
}
