//! Core data types for the string wave lab.
//!
//! This module defines the parameter fields the user edits, the snapshot of those
//! fields kept in history, the quantities derived from them, and the geometry and
//! scene configuration used by the waveform renderer.

use crate::constants::*;
use crate::error::{ConfigError, ParameterError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four editable string parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterField {
    /// Vibrating length of the string, in metres
    Length,
    /// Tension, in newtons
    Tension,
    /// Linear mass density, in kg/m
    Density,
    /// String diameter; only used for stroke thickness
    Diameter,
}

impl ParameterField {
    /// All fields in display order.
    pub const ALL: [ParameterField; 4] = [
        ParameterField::Length,
        ParameterField::Tension,
        ParameterField::Density,
        ParameterField::Diameter,
    ];

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            ParameterField::Length => "Length",
            ParameterField::Tension => "Tension",
            ParameterField::Density => "Linear density",
            ParameterField::Diameter => "Diameter",
        }
    }

    /// Unit shown next to the field.
    pub fn unit(self) -> &'static str {
        match self {
            ParameterField::Length => "m",
            ParameterField::Tension => "N",
            ParameterField::Density => "kg/m",
            ParameterField::Diameter => "mm",
        }
    }

    /// Amount one arrow click adds or removes.
    pub fn step(self) -> f64 {
        match self {
            ParameterField::Length => LENGTH_STEP,
            ParameterField::Tension => TENSION_STEP,
            ParameterField::Density => DENSITY_STEP,
            ParameterField::Diameter => DIAMETER_STEP,
        }
    }

    /// Decimal places used when an arrow step rewrites the field.
    pub fn decimals(self) -> usize {
        match self {
            ParameterField::Length => 2,
            ParameterField::Tension => 0,
            ParameterField::Density => 4,
            ParameterField::Diameter => 1,
        }
    }

    /// Formats `value` with this field's display precision.
    pub fn format_value(self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }

    /// Parses field text into a finite, strictly positive number.
    pub fn parse_positive(self, text: &str) -> Result<f64, ParameterError> {
        let value: f64 = text.trim().parse().map_err(|_| ParameterError::NotANumber {
            field: self,
            input: text.to_string(),
        })?;
        if !value.is_finite() {
            return Err(ParameterError::NotFinite { field: self, value });
        }
        if value <= 0.0 {
            return Err(ParameterError::NonPositive { field: self, value });
        }
        Ok(value)
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The raw text of the four parameter fields.
///
/// This is what history records: the exact text the user saw, so undo and redo
/// restore the fields verbatim, including text that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterInputs {
    /// Length field text
    pub length: String,
    /// Tension field text
    pub tension: String,
    /// Linear density field text
    pub density: String,
    /// Diameter field text
    pub diameter: String,
}

impl Default for ParameterInputs {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH.to_string(),
            tension: DEFAULT_TENSION.to_string(),
            density: DEFAULT_DENSITY.to_string(),
            diameter: DEFAULT_DIAMETER.to_string(),
        }
    }
}

impl ParameterInputs {
    /// Returns the text of one field.
    pub fn get(&self, field: ParameterField) -> &str {
        match field {
            ParameterField::Length => &self.length,
            ParameterField::Tension => &self.tension,
            ParameterField::Density => &self.density,
            ParameterField::Diameter => &self.diameter,
        }
    }

    /// Replaces the text of one field.
    pub fn set(&mut self, field: ParameterField, text: impl Into<String>) {
        let slot = match field {
            ParameterField::Length => &mut self.length,
            ParameterField::Tension => &mut self.tension,
            ParameterField::Density => &mut self.density,
            ParameterField::Diameter => &mut self.diameter,
        };
        *slot = text.into();
    }

    /// Validates the three physical fields.
    ///
    /// The diameter is not part of the physics and is never checked here.
    pub fn physical(&self) -> Result<PhysicalParameters, ParameterError> {
        Ok(PhysicalParameters {
            length: ParameterField::Length.parse_positive(&self.length)?,
            tension: ParameterField::Tension.parse_positive(&self.tension)?,
            linear_density: ParameterField::Density.parse_positive(&self.density)?,
        })
    }

    /// Stroke thickness at scale 1, falling back to the default when the
    /// diameter text is unusable.
    pub fn stroke_diameter(&self) -> f64 {
        match ParameterField::Diameter.parse_positive(&self.diameter) {
            Ok(d) => d,
            Err(_) => DEFAULT_STROKE_THICKNESS,
        }
    }
}

/// An immutable entry in the undo/redo history.
pub type HistorySnapshot = ParameterInputs;

/// Validated physical parameters of the ideal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Length `L` in metres
    pub length: f64,
    /// Tension `F` in newtons
    pub tension: f64,
    /// Linear density `μ` in kg/m
    pub linear_density: f64,
}

/// Quantities computed from the physical parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// Transverse wave speed `sqrt(F/μ)` in m/s
    pub wave_speed: f64,
    /// Fundamental frequency `v / 2L` in Hz
    pub frequency: f64,
    /// Wavelength of the fundamental in m
    pub wavelength: f64,
    /// Display amplitude in pixels at scale 1
    pub amplitude: f64,
}

impl Default for DerivedQuantities {
    fn default() -> Self {
        Self {
            wave_speed: 0.0,
            frequency: 0.0,
            wavelength: 0.0,
            amplitude: INITIAL_AMPLITUDE,
        }
    }
}

/// Text shown in the three read-only displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Fundamental frequency, two decimals
    pub frequency: String,
    /// Wave speed, two decimals
    pub speed: String,
    /// Wavelength, four decimals
    pub wavelength: String,
}

impl From<&DerivedQuantities> for Readout {
    fn from(q: &DerivedQuantities) -> Self {
        Self {
            frequency: format!("{:.2} Hz", q.frequency),
            speed: format!("{:.2} m/s", q.wave_speed),
            wavelength: format!("{:.4} m", q.wavelength),
        }
    }
}

/// Placement of a string over its photo, in ratios of the unscaled photo size.
///
/// The string runs from `(x_start_ratio, y_start_ratio)` at the top to
/// `(x_end_ratio, y_end_ratio)` at the bottom. Equal x ratios give a vertical string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StringGeometry {
    /// Horizontal position of the upper end
    pub x_start_ratio: f64,
    /// Horizontal position of the lower end
    pub x_end_ratio: f64,
    /// Vertical position of the upper end
    pub y_start_ratio: f64,
    /// Vertical position of the lower end
    pub y_end_ratio: f64,
}

impl StringGeometry {
    /// A vertical string at `x_ratio`.
    pub fn vertical(x_ratio: f64, y_start_ratio: f64, y_end_ratio: f64) -> Self {
        Self {
            x_start_ratio: x_ratio,
            x_end_ratio: x_ratio,
            y_start_ratio,
            y_end_ratio,
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let ratios = [
            ("x_start_ratio", self.x_start_ratio),
            ("x_end_ratio", self.x_end_ratio),
            ("y_start_ratio", self.y_start_ratio),
            ("y_end_ratio", self.y_end_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { index, name, value });
            }
        }
        Ok(())
    }
}

/// A 2D point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

/// Size of a drawing surface in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl SurfaceSize {
    /// Creates a surface size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Startup configuration: initial field texts, zoom and string placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Initial parameter field texts
    pub parameters: ParameterInputs,
    /// Initial zoom percentage
    pub zoom_percent: i64,
    /// One entry per photo surface
    pub strings: Vec<StringGeometry>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            parameters: ParameterInputs::default(),
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            strings: vec![
                StringGeometry::vertical(0.38, 0.05, 0.95),
                StringGeometry {
                    x_start_ratio: 0.33,
                    x_end_ratio: 0.37,
                    y_start_ratio: 0.12,
                    y_end_ratio: 0.88,
                },
            ],
        }
    }
}

impl SceneConfig {
    /// Parses and validates a scene from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that there is at least one string and every ratio lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strings.is_empty() {
            return Err(ConfigError::NoStrings);
        }
        for (index, geometry) in self.strings.iter().enumerate() {
            geometry.validate(index)?;
        }
        Ok(())
    }
}
