//! Application state for the egui front end.
//!
//! The physics, history and zoom all live in the [`Session`]; this struct only adds
//! what the widgets need on top of it.

use crate::session::Session;
use crate::types::SceneConfig;

/// The main application structure.
///
/// Implements `eframe::App` (see the parent module) and owns the session, so all
/// state is confined to the UI thread.
pub struct StringWaveApp {
    /// Parameters, history, zoom and animation clock
    pub session: Session,
    /// Text of the zoom percentage field while the user is typing
    pub zoom_text: String,
    /// Whether frames keep being requested from the host
    pub animating: bool,
    /// Dark or light visuals
    pub dark_mode: bool,
    /// Width of the left control panel
    pub controls_panel_width: f32,
}

impl Default for StringWaveApp {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl StringWaveApp {
    /// Creates the app from a scene configuration.
    pub fn new(config: SceneConfig) -> Self {
        let session = Session::new(config);
        Self {
            zoom_text: session.zoom().percent().to_string(),
            session,
            animating: true,
            dark_mode: true,
            controls_panel_width: 280.0,
        }
    }

    /// Rewrites the zoom field from the session's clamped value.
    pub fn sync_zoom_text(&mut self) {
        self.zoom_text = self.session.zoom().percent().to_string();
    }
}
