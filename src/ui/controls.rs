//! The control panel: parameter fields with arrow buttons, computed values,
//! zoom and history controls.

use super::state::StringWaveApp;
use crate::session::StepDirection;
use crate::types::ParameterField;
use eframe::egui;
use log::info;

impl StringWaveApp {
    /// Draws the whole left panel.
    pub fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("String parameters");
        ui.add_space(4.0);
        egui::Grid::new("parameter_grid")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for field in ParameterField::ALL {
                    self.draw_parameter_row(ui, field);
                    ui.end_row();
                }
            });

        ui.separator();
        self.draw_readout(ui);

        ui.separator();
        self.draw_zoom_controls(ui);

        ui.separator();
        self.draw_history_controls(ui);

        ui.separator();
        ui.horizontal(|ui| {
            if ui.checkbox(&mut self.animating, "Animate").changed() {
                info!("animation {}", if self.animating { "resumed" } else { "paused" });
            }
            ui.checkbox(&mut self.dark_mode, "Dark mode");
        });
    }

    fn draw_parameter_row(&mut self, ui: &mut egui::Ui, field: ParameterField) {
        ui.label(format!("{} ({})", field.label(), field.unit()));

        let mut text = self.session.inputs().get(field).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .id_salt(("parameter", field))
                .desired_width(80.0),
        );
        if response.changed() {
            self.session.edit_field(field, text);
        }

        if ui.small_button("-").on_hover_text(format!("-{}", field.step())).clicked() {
            self.session.step_field(field, StepDirection::Down);
        }
        if ui.small_button("+").on_hover_text(format!("+{}", field.step())).clicked() {
            self.session.step_field(field, StepDirection::Up);
        }
    }

    fn draw_readout(&self, ui: &mut egui::Ui) {
        let readout = self.session.readout();
        egui::Grid::new("readout_grid").num_columns(2).show(ui, |ui| {
            ui.label("Frequency");
            ui.monospace(readout.frequency);
            ui.end_row();
            ui.label("Wave speed");
            ui.monospace(readout.speed);
            ui.end_row();
            ui.label("Wavelength");
            ui.monospace(readout.wavelength);
            ui.end_row();
        });
    }

    fn draw_zoom_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Zoom");
            if ui.button("-").clicked() {
                self.session.zoom_out();
                self.sync_zoom_text();
            }
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.zoom_text)
                    .id_salt("zoom_percent")
                    .desired_width(40.0),
            );
            if response.changed() {
                self.session.set_zoom_text(&self.zoom_text);
            }
            if response.lost_focus() {
                self.sync_zoom_text();
            }
            ui.label("%");
            if ui.button("+").clicked() {
                self.session.zoom_in();
                self.sync_zoom_text();
            }
        });
    }

    fn draw_history_controls(&mut self, ui: &mut egui::Ui) {
        let history = self.session.history();
        let can_undo = history.can_undo();
        let can_redo = history.can_redo();
        let position = history.index().map_or(0, |i| i + 1);
        let total = history.len();

        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_undo, egui::Button::new("< Back"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                self.session.undo();
            }
            ui.label(format!("Step {position} / {total}"));
            if ui
                .add_enabled(can_redo, egui::Button::new("Forward >"))
                .on_hover_text("Ctrl+Shift+Z")
                .clicked()
            {
                self.session.redo();
            }
        });
    }
}
