//! The interactive session: parameter fields, history, zoom and animation clock.
//!
//! All mutable state of the application lives in [`Session`]. Input events
//! (field edits, arrow steps, undo/redo, zoom) update it synchronously, and
//! [`Session::tick`] turns it into the polylines for one animation frame without
//! drawing anything. A UI toolkit adapts the result through [`OutputSink`].

use crate::constants::*;
use crate::history::HistoryBuffer;
use crate::physics::PhysicsEngine;
use crate::types::*;
use crate::waveform::{FrameParams, StringStroke, WaveformRenderer};
use log::{debug, info};

/// Zoom percentage control, always within `[10, 200]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomControl {
    percent: i64,
}

impl Default for ZoomControl {
    fn default() -> Self {
        Self {
            percent: DEFAULT_ZOOM_PERCENT,
        }
    }
}

impl ZoomControl {
    /// Creates a control at `percent`, clamped to the valid range.
    pub fn new(percent: i64) -> Self {
        Self {
            percent: clamp_percent(percent),
        }
    }

    /// Current percentage.
    pub fn percent(&self) -> i64 {
        self.percent
    }

    /// Zoom as a scale factor, in `[0.1, 2.0]`.
    pub fn scale(&self) -> f64 {
        self.percent as f64 / 100.0
    }

    /// Sets the zoom from typed text.
    ///
    /// Only the leading integer is read, so "150%" is 150 and "12.5" is 12. Text with
    /// no leading digits, or a leading zero value, means 100 %.
    pub fn set_from_text(&mut self, text: &str) {
        let percent = match leading_integer(text) {
            Some(0) | None => DEFAULT_ZOOM_PERCENT,
            Some(p) => p,
        };
        self.set_percent(percent);
    }

    /// Sets the zoom, clamping to `[10, 200]`.
    pub fn set_percent(&mut self, percent: i64) {
        self.percent = clamp_percent(percent);
    }

    /// Adds ten percent, up to 200.
    pub fn zoom_in(&mut self) {
        self.set_percent(self.percent.saturating_add(ZOOM_STEP_PERCENT));
    }

    /// Removes ten percent, down to 10.
    pub fn zoom_out(&mut self) {
        self.set_percent(self.percent.saturating_sub(ZOOM_STEP_PERCENT));
    }
}

/// Parses an optional sign and the digits that follow it, ignoring leading whitespace
/// and anything after the digits. Saturates instead of overflowing.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .into_iter()
        .fold(0_i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

fn clamp_percent(percent: i64) -> i64 {
    percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT)
}

/// Direction of an arrow button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Decrease the value by one step
    Down,
    /// Increase the value by one step
    Up,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Down => -1.0,
            StepDirection::Up => 1.0,
        }
    }
}

/// Everything needed to present one animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// Text for the three read-only displays
    pub readout: Readout,
    /// Zoom factor applied to the photos
    pub scale: f64,
    /// One stroke per configured string, in configuration order
    pub strings: Vec<StringStroke>,
}

/// Receiver of a rendered frame. Implemented by whatever UI toolkit hosts the session.
pub trait OutputSink {
    /// Shows the derived quantities.
    fn show_readout(&mut self, readout: &Readout);

    /// Draws the string belonging to surface `surface`.
    fn draw_string(&mut self, surface: usize, stroke: &StringStroke);
}

impl RenderOutput {
    /// Hands the frame to a sink: the readout first, then each string.
    pub fn present(&self, sink: &mut impl OutputSink) {
        sink.show_readout(&self.readout);
        for (surface, stroke) in self.strings.iter().enumerate() {
            sink.draw_string(surface, stroke);
        }
    }
}

/// State of one running visualization.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: ParameterInputs,
    derived: DerivedQuantities,
    history: HistoryBuffer<HistorySnapshot>,
    zoom: ZoomControl,
    strings: Vec<StringGeometry>,
    time: f64,
    engine: PhysicsEngine,
    renderer: WaveformRenderer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Session {
    /// Starts a session: records the initial fields as the first snapshot and computes them.
    pub fn new(config: SceneConfig) -> Self {
        let mut session = Self {
            inputs: config.parameters,
            derived: DerivedQuantities::default(),
            history: HistoryBuffer::new(),
            zoom: ZoomControl::new(config.zoom_percent),
            strings: config.strings,
            time: 0.0,
            engine: PhysicsEngine::new(),
            renderer: WaveformRenderer::new(),
        };
        session.record_and_recompute();
        session
    }

    /// Current field texts.
    pub fn inputs(&self) -> &ParameterInputs {
        &self.inputs
    }

    /// Last successfully computed quantities.
    pub fn derived(&self) -> &DerivedQuantities {
        &self.derived
    }

    /// Display text for the derived quantities.
    pub fn readout(&self) -> Readout {
        Readout::from(&self.derived)
    }

    /// Undo/redo history.
    pub fn history(&self) -> &HistoryBuffer<HistorySnapshot> {
        &self.history
    }

    /// Zoom control.
    pub fn zoom(&self) -> &ZoomControl {
        &self.zoom
    }

    /// Configured strings, one per surface.
    pub fn strings(&self) -> &[StringGeometry] {
        &self.strings
    }

    /// Animation clock in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Replaces a field's text after the user typed into it.
    ///
    /// The edit is always recorded in history, even when the text does not parse;
    /// the derived quantities only change if all physical fields are valid.
    pub fn edit_field(&mut self, field: ParameterField, text: impl Into<String>) {
        self.inputs.set(field, text);
        self.record_and_recompute();
    }

    /// Applies an arrow button to a field.
    ///
    /// The value moves by the field's step, is floored at 0.01 and rewritten with
    /// the field's precision. Returns false, without touching history, when the
    /// current text is not a number.
    pub fn step_field(&mut self, field: ParameterField, direction: StepDirection) -> bool {
        let current: f64 = match self.inputs.get(field).trim().parse() {
            Ok(v) if f64::is_finite(v) => v,
            _ => {
                debug!("ignoring {direction:?} step on unparsable {field}");
                return false;
            }
        };
        let stepped = (current + field.step() * direction.sign()).max(MIN_STEPPED_VALUE);
        self.edit_field(field, field.format_value(stepped));
        true
    }

    /// Restores the previous snapshot. Returns false if already at the oldest one.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.inputs = snapshot.clone();
                debug!("undo to history slot {:?}", self.history.index());
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns false if already at the newest one.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.inputs = snapshot.clone();
                debug!("redo to history slot {:?}", self.history.index());
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Sets the zoom from the percentage field.
    pub fn set_zoom_text(&mut self, text: &str) {
        self.zoom.set_from_text(text);
        debug!("zoom set to {}%", self.zoom.percent());
    }

    /// Zoom in by one step.
    pub fn zoom_in(&mut self) {
        self.zoom.zoom_in();
        debug!("zoom in to {}%", self.zoom.percent());
    }

    /// Zoom out by one step.
    pub fn zoom_out(&mut self) {
        self.zoom.zoom_out();
        debug!("zoom out to {}%", self.zoom.percent());
    }

    /// Advances the clock to `time` seconds and builds the frame.
    ///
    /// `surfaces` gives the current size of each string's surface; strings without
    /// a surface are skipped. The clock never runs backwards.
    pub fn tick(&mut self, time: f64, surfaces: &[SurfaceSize]) -> RenderOutput {
        if time.is_finite() && time >= self.time {
            self.time = time;
        }

        let frame = FrameParams {
            time: self.time,
            scale: self.zoom.scale(),
            amplitude: self.derived.amplitude,
            frequency: self.derived.frequency,
            diameter: self.inputs.stroke_diameter(),
        };

        let strings = self
            .strings
            .iter()
            .zip(surfaces)
            .map(|(geometry, surface)| self.renderer.render_frame(geometry, *surface, &frame))
            .collect();

        RenderOutput {
            readout: self.readout(),
            scale: frame.scale,
            strings,
        }
    }

    fn record_and_recompute(&mut self) {
        self.history.push(self.inputs.clone());
        debug!(
            "recorded snapshot {}/{}",
            self.history.index().map_or(0, |i| i + 1),
            self.history.len()
        );
        self.recompute();
    }

    fn recompute(&mut self) {
        match self.engine.compute_inputs(&self.inputs) {
            Ok(derived) => {
                self.derived = derived;
                info!(
                    "f = {:.2} Hz, v = {:.2} m/s, λ = {:.4} m",
                    derived.frequency, derived.wave_speed, derived.wavelength
                );
            }
            Err(err) => debug!("keeping previous values: {err}"),
        }
    }
}
