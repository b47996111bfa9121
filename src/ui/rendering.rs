//! Photo surfaces and string drawing.
//!
//! The central area is split into one surface per configured string. Each frame the
//! surfaces are measured, the session builds the polylines, and [`PainterSink`]
//! strokes them over a stand-in photo scaled by the zoom factor. The polylines are
//! resolved against the zoomed photo's own frame, so they move with it.

use super::state::StringWaveApp;
use crate::constants::{GLOW_ALPHA, GLOW_SPREAD, STRING_COLOR};
use crate::session::OutputSink;
use crate::types::{Readout, SurfaceSize};
use crate::waveform::StringStroke;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Gap between neighbouring surfaces, in screen pixels.
const SURFACE_GAP: f32 = 8.0;

/// Splits `area` into `count` equal columns separated by `gap`.
pub fn surface_rects(area: egui::Rect, count: usize, gap: f32) -> Vec<egui::Rect> {
    if count == 0 {
        return Vec::new();
    }
    let total_gap = gap * (count - 1) as f32;
    let width = ((area.width() - total_gap) / count as f32).max(0.0);
    (0..count)
        .map(|i| {
            let left = area.min.x + i as f32 * (width + gap);
            egui::Rect::from_min_size(egui::pos2(left, area.min.y), egui::vec2(width, area.height()))
        })
        .collect()
}

/// Frame of the zoomed photo inside its surface cell.
///
/// At 100 % the photo fills the cell; zooming scales it about the cell centre. The
/// string ratios are resolved against this rect, so strings stay on the photo.
pub fn photo_rect(cell: egui::Rect, scale: f32) -> egui::Rect {
    egui::Rect::from_center_size(cell.center(), cell.size() * scale)
}

/// Strokes string polylines onto the surfaces of an egui painter.
pub struct PainterSink<'a> {
    painter: &'a egui::Painter,
    /// Visible area of each surface, used for clipping
    cells: &'a [egui::Rect],
    /// Zoomed photo of each surface; polyline coordinates are relative to its corner
    photos: &'a [egui::Rect],
    scale: f32,
    text_color: egui::Color32,
}

impl<'a> PainterSink<'a> {
    /// Creates a sink drawing onto `photos`, clipped to `cells`, at zoom `scale`.
    pub fn new(
        painter: &'a egui::Painter,
        cells: &'a [egui::Rect],
        photos: &'a [egui::Rect],
        scale: f32,
        text_color: egui::Color32,
    ) -> Self {
        Self {
            painter,
            cells,
            photos,
            scale,
            text_color,
        }
    }
}

impl OutputSink for PainterSink<'_> {
    fn show_readout(&mut self, readout: &Readout) {
        let Some(cell) = self.cells.first() else {
            return;
        };
        let font = egui::FontId::monospace(14.0);
        let lines = [&readout.frequency, &readout.speed, &readout.wavelength];
        for (row, text) in lines.into_iter().enumerate() {
            self.painter.text(
                cell.left_top() + egui::vec2(8.0, 8.0 + row as f32 * 18.0),
                egui::Align2::LEFT_TOP,
                text,
                font.clone(),
                self.text_color,
            );
        }
    }

    fn draw_string(&mut self, surface: usize, stroke: &StringStroke) {
        let (Some(cell), Some(photo)) = (self.cells.get(surface), self.photos.get(surface)) else {
            return;
        };
        let painter = self.painter.with_clip_rect(*cell);
        let points: Vec<egui::Pos2> = stroke
            .points
            .iter()
            .map(|p| photo.min + egui::vec2(p.x as f32, p.y as f32))
            .collect();
        let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
            return;
        };

        let (r, g, b) = STRING_COLOR;
        let color = egui::Color32::from_rgb(r, g, b);
        let glow = egui::Color32::from_rgba_unmultiplied(r, g, b, GLOW_ALPHA);
        let width = stroke.thickness as f32;

        painter.add(egui::Shape::line(
            points.clone(),
            egui::Stroke::new(width + 2.0 * GLOW_SPREAD * self.scale, glow),
        ));
        painter.add(egui::Shape::line(points, egui::Stroke::new(width, color)));
        // Round caps
        painter.circle_filled(first, width / 2.0, color);
        painter.circle_filled(last, width / 2.0, color);
    }
}

impl StringWaveApp {
    /// Draws every surface and the strings on top of them.
    pub fn draw_surfaces(&mut self, ui: &mut egui::Ui) {
        let area = ui.available_rect_before_wrap();
        ui.allocate_rect(area, egui::Sense::hover());

        let cells = surface_rects(area, self.session.strings().len(), SURFACE_GAP);
        let scale = self.session.zoom().scale() as f32;
        let photos: Vec<egui::Rect> = cells.iter().map(|c| photo_rect(*c, scale)).collect();
        let sizes: Vec<SurfaceSize> = photos
            .iter()
            .map(|r| SurfaceSize::new(r.width() as f64, r.height() as f64))
            .collect();

        let time = if self.animating {
            ui.input(|i| i.time)
        } else {
            self.session.time()
        };
        let output = self.session.tick(time, &sizes);

        let painter = ui.painter();
        for (cell, photo) in cells.iter().zip(&photos) {
            self.draw_photo(painter, *cell, *photo, scale);
        }

        let text_color = if self.dark_mode {
            egui::Color32::from_gray(220)
        } else {
            egui::Color32::from_gray(40)
        };
        let mut sink = PainterSink::new(painter, &cells, &photos, scale, text_color);
        output.present(&mut sink);
    }

    /// Draws the cell background and the stand-in photo filling `photo`.
    fn draw_photo(&self, painter: &egui::Painter, cell: egui::Rect, photo: egui::Rect, scale: f32) {
        let background = if self.dark_mode {
            egui::Color32::from_gray(24)
        } else {
            egui::Color32::from_gray(235)
        };
        painter.rect_filled(cell, 4.0, background);

        let clipped = painter.with_clip_rect(cell);
        clipped.rect_filled(photo, 24.0 * scale, egui::Color32::from_rgb(110, 52, 24));
        clipped.rect_stroke(
            photo,
            24.0 * scale,
            egui::Stroke::new(2.0 * scale, egui::Color32::from_rgb(60, 28, 12)),
            StrokeKind::Inside,
        );
    }
}
