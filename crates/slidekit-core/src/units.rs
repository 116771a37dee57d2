//! Unit conversion utilities
//!
//! Handles conversion between points (the host's native length unit) and the
//! physical units shown in dialogs: millimeters, centimeters and inches.
//! Supports decimal and fractional inch parsing and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points per inch (PostScript point)
pub const POINTS_PER_INCH: f64 = 72.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters per point
pub const MM_PER_POINT: f64 = MM_PER_INCH / POINTS_PER_INCH;

/// Length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Typographic points (1/72 inch)
    Points,
    /// Millimeters
    #[default]
    Millimeters,
    /// Centimeters
    Centimeters,
    /// Inches
    Inches,
}

impl LengthUnit {
    /// Size of one unit in millimeters
    pub fn mm_per_unit(self) -> f64 {
        match self {
            Self::Points => MM_PER_POINT,
            Self::Millimeters => 1.0,
            Self::Centimeters => 10.0,
            Self::Inches => MM_PER_INCH,
        }
    }

    /// Short label used as a value suffix
    pub fn label(self) -> &'static str {
        match self {
            Self::Points => "pt",
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "Points"),
            Self::Millimeters => write!(f, "Millimeters"),
            Self::Centimeters => write!(f, "Centimeters"),
            Self::Inches => write!(f, "Inches"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt" | "point" | "points" => Ok(Self::Points),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeters),
            "cm" | "centimeter" | "centimeters" => Ok(Self::Centimeters),
            "in" | "inch" | "inches" | "\"" => Ok(Self::Inches),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Convert points to millimeters
pub fn points_to_mm(points: f64) -> f64 {
    points * MM_PER_POINT
}

/// Convert millimeters to points
pub fn mm_to_points(mm: f64) -> f64 {
    mm / MM_PER_POINT
}

/// Convert a length between units
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.mm_per_unit() / to.mm_per_unit()
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `unit` - Target display unit
/// * `decimals` - Digits after the decimal point
pub fn format_length(value_mm: f64, unit: LengthUnit, decimals: usize) -> String {
    let value = convert_length(value_mm, LengthUnit::Millimeters, unit);
    format!("{:.*} {}", decimals, value, unit.label())
}

/// Format an angle in degrees for display
pub fn format_angle(degrees: f64, decimals: usize) -> String {
    format!("{:.*}°", decimals, degrees)
}

/// Parse length string to millimeters
///
/// Accepts an optional unit suffix (`"12.5mm"`, `"3 pt"`, `"1 1/2 in"`);
/// without one the value is read in `default_unit`. Inch values may use
/// whole-plus-fraction notation.
///
/// * `input` - String to parse
/// * `default_unit` - Unit assumed when no suffix is present
pub fn parse_length(input: &str, default_unit: LengthUnit) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let (number, unit) = split_unit_suffix(input, default_unit)?;
    let value = if number.contains('/') {
        parse_fraction_sum(number)?
    } else {
        number.parse::<f64>().map_err(|e| e.to_string())?
    };

    Ok(convert_length(value, unit, LengthUnit::Millimeters))
}

fn split_unit_suffix(input: &str, default_unit: LengthUnit) -> Result<(&str, LengthUnit), String> {
    let split = input
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_alphabetic() || *c == '"')
        .last()
        .map(|(i, _)| i);

    match split {
        Some(i) => {
            let unit = input[i..].parse::<LengthUnit>()?;
            Ok((input[..i].trim(), unit))
        }
        None => Ok((input, default_unit)),
    }
}

fn parse_fraction_sum(input: &str) -> Result<f64, String> {
    let mut total = 0.0;
    let mut negative = false;

    for (idx, part) in input.split_whitespace().enumerate() {
        let part = if idx == 0 {
            if let Some(rest) = part.strip_prefix('-') {
                negative = true;
                rest
            } else {
                part
            }
        } else {
            part
        };

        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator")?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part.parse::<f64>().map_err(|_| "Invalid number part")?;
        }
    }

    Ok(if negative { -total } else { total })
}
