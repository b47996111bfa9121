//! # String Wave Lab
//!
//! An interactive visualization of a vibrating instrument string. Given the string's
//! length, tension, linear density and diameter it computes the wave speed,
//! fundamental frequency and wavelength of the ideal (linear, lossless,
//! fixed-endpoint) string and animates its standing wave over a photo.
//!
//! ## Features
//! - Physics of the fundamental mode ([`PhysicsEngine`])
//! - Bounded undo/redo of parameter edits ([`HistoryBuffer`])
//! - Per-frame standing-wave polylines ([`WaveformRenderer`])
//! - Zoom from 10 % to 200 % applied to photos and strings alike
//! - A toolkit-independent [`Session`] with an [`OutputSink`] seam, and an egui front end

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
mod error;
mod history;
mod physics;
mod session;
mod types;
mod ui;
mod waveform;

// Re-export public types and functions
pub use error::*;
pub use history::*;
pub use physics::*;
pub use session::*;
pub use types::*;
pub use waveform::*;
use ui::StringWaveApp;

/// Environment variable that may hold an inline JSON [`SceneConfig`].
pub const SCENE_ENV_VAR: &str = "STRING_WAVE_SCENE";

/// Loads the scene from [`SCENE_ENV_VAR`], falling back to the defaults.
///
/// A malformed document is logged and ignored.
pub fn scene_from_env() -> SceneConfig {
    match std::env::var(SCENE_ENV_VAR) {
        Ok(json) => SceneConfig::from_json(&json).unwrap_or_else(|err| {
            log::warn!("{SCENE_ENV_VAR} ignored: {err}");
            SceneConfig::default()
        }),
        Err(_) => SceneConfig::default(),
    }
}

/// Runs the string wave application.
///
/// This function initializes the egui application window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use string_wave_lab::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let scene = scene_from_env();
    log::info!("starting with {} string(s)", scene.strings.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("String Wave Lab"),
        ..Default::default()
    };
    eframe::run_native(
        "String Wave Lab",
        options,
        Box::new(|_cc| Ok(Box::new(StringWaveApp::new(scene)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_default() {
        let session = Session::default();
        assert_eq!(session.strings().len(), 2);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.time(), 0.0);
    }

    #[test]
    fn test_default_string_is_near_cello_a() {
        let session = Session::default();
        let f = session.derived().frequency;
        assert!((f - 220.0).abs() < 1.0, "got {f}");
    }
}
