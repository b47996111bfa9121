//! User interface for the string wave lab.
//!
//! # Module Organization
//!
//! - `state` - The `StringWaveApp` struct and its defaults
//! - `controls` - Left panel: parameter fields, readouts, zoom and history controls
//! - `rendering` - Photo surfaces and the painter that strokes the strings

mod controls;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::StringWaveApp;

use eframe::egui;

impl eframe::App for StringWaveApp {
    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_frame(ctx);
    }
}

impl StringWaveApp {
    /// Lays out one frame: shortcuts, the control panel and the photo surfaces.
    ///
    /// Split out of `update` so headless tests can drive it without an `eframe::Frame`.
    pub(crate) fn draw_frame(&mut self, ctx: &egui::Context) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_undo_redo_keys(ctx);

        let viewport_width = ctx.input(|i| i.content_rect().width());
        let clamped_width = self
            .controls_panel_width
            .clamp(200.0, (viewport_width * 0.5).max(200.0));

        egui::SidePanel::left("controls_panel")
            .resizable(true)
            .default_width(clamped_width)
            .show(ctx, |ui| {
                self.controls_panel_width = ui.available_width();
                self.draw_controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_surfaces(ui);
        });

        // The repaint loop is the animation loop; pausing simply stops asking for frames.
        if self.animating {
            ctx.request_repaint();
        }
    }

    /// Ctrl/Cmd+Z undoes, Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y redoes.
    ///
    /// Ignored while a text field has focus so the field's own editing keys win.
    fn handle_undo_redo_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift) {
            self.session.undo();
        } else if ctx.input(|i| {
            (i.key_pressed(egui::Key::Z) && i.modifiers.command && i.modifiers.shift)
                || (i.key_pressed(egui::Key::Y) && i.modifiers.command)
        }) {
            self.session.redo();
        }
    }
}
