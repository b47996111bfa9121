//! Shared application-wide constants.
//! Centralizes tweakable values used across the physics, history and rendering code.

// History
/// Maximum number of parameter snapshots kept in the undo/redo buffer.
pub const MAX_HISTORY: usize = 5;

// Parameter stepping
/// Arrow step for the string length field (m).
pub const LENGTH_STEP: f64 = 0.01;
/// Arrow step for the tension field (N).
pub const TENSION_STEP: f64 = 1.0;
/// Arrow step for the linear density field (kg/m).
pub const DENSITY_STEP: f64 = 0.0001;
/// Arrow step for the diameter field.
pub const DIAMETER_STEP: f64 = 0.1;
/// Lower bound applied to any field after an arrow step.
pub const MIN_STEPPED_VALUE: f64 = 0.01;

// Default parameters (a cello A string)
/// Initial string length text.
pub const DEFAULT_LENGTH: &str = "0.69";
/// Initial tension text.
pub const DEFAULT_TENSION: &str = "147";
/// Initial linear density text.
pub const DEFAULT_DENSITY: &str = "0.0016";
/// Initial diameter text.
pub const DEFAULT_DIAMETER: &str = "1.0";

// Amplitude heuristic
/// Amplitude shown before the first successful computation.
pub const INITIAL_AMPLITUDE: f64 = 8.0;
/// Numerator of the `k / sqrt(F)` amplitude heuristic.
pub const AMPLITUDE_NUMERATOR: f64 = 12.0;
/// Smallest amplitude (pixels at scale 1) ever returned.
pub const MIN_AMPLITUDE: f64 = 2.0;

// Zoom
/// Smallest zoom percentage.
pub const MIN_ZOOM_PERCENT: i64 = 10;
/// Largest zoom percentage.
pub const MAX_ZOOM_PERCENT: i64 = 200;
/// Zoom percentage used when the input is empty or unparsable.
pub const DEFAULT_ZOOM_PERCENT: i64 = 100;
/// Amount the zoom buttons add or remove.
pub const ZOOM_STEP_PERCENT: i64 = 10;

// Waveform
/// Polyline segments at scale 1; actual count is `floor(BASE_SEGMENTS * sqrt(scale))`.
pub const BASE_SEGMENTS: f64 = 100.0;
/// Segment count never drops below this.
pub const MIN_SEGMENTS: usize = 8;
/// Stroke thickness used when the diameter field cannot be parsed.
pub const DEFAULT_STROKE_THICKNESS: f64 = 1.5;

// Drawing
/// Gold string colour (`#D4AF37`).
pub const STRING_COLOR: (u8, u8, u8) = (0xD4, 0xAF, 0x37);
/// Alpha of the glow stroke drawn under the string.
pub const GLOW_ALPHA: u8 = 128;
/// Glow width added on each side of the string, in pixels at scale 1.
pub const GLOW_SPREAD: f32 = 2.0;
