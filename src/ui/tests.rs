use super::rendering::{photo_rect, surface_rects, PainterSink};
use super::*;
use crate::session::OutputSink;
use crate::types::{ParameterField, Readout, StringGeometry, SurfaceSize};
use crate::waveform::{FrameParams, WaveformRenderer};
use eframe::egui;

/// Run a single headless egui frame of the app with the provided input events.
fn run_frame(app: &mut StringWaveApp, time: f64, events: Vec<egui::Event>) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.time = Some(time);
    // Held modifiers are reported separately from the key events themselves.
    for event in &events {
        if let egui::Event::Key { modifiers, .. } = event {
            raw.modifiers = *modifiers;
        }
    }
    raw.events = events;

    let ctx = egui::Context::default();
    ctx.run(raw, |ctx| app.draw_frame(ctx))
}

fn command_key(key: egui::Key, shift: bool) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: Some(key),
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers {
            command: true,
            shift,
            ..Default::default()
        },
    }
}

#[test]
fn frame_advances_animation_clock() {
    let mut app = StringWaveApp::default();
    let _ = run_frame(&mut app, 2.5, Vec::new());
    assert_eq!(app.session.time(), 2.5);
}

#[test]
fn paused_animation_keeps_clock() {
    let mut app = StringWaveApp::default();
    let _ = run_frame(&mut app, 1.0, Vec::new());
    app.animating = false;
    let _ = run_frame(&mut app, 4.0, Vec::new());
    assert_eq!(app.session.time(), 1.0);
}

#[test]
fn command_z_undoes_last_edit() {
    let mut app = StringWaveApp::default();
    let original = app.session.inputs().tension.clone();
    app.session.edit_field(ParameterField::Tension, "200");

    let _ = run_frame(&mut app, 0.0, vec![command_key(egui::Key::Z, false)]);
    assert_eq!(app.session.inputs().tension, original);
}

#[test]
fn command_y_and_shift_z_redo() {
    let mut app = StringWaveApp::default();
    app.session.edit_field(ParameterField::Length, "0.80");
    app.session.edit_field(ParameterField::Length, "0.90");
    app.session.undo();
    app.session.undo();

    let _ = run_frame(&mut app, 0.0, vec![command_key(egui::Key::Y, false)]);
    assert_eq!(app.session.inputs().length, "0.80");

    let _ = run_frame(&mut app, 0.0, vec![command_key(egui::Key::Z, true)]);
    assert_eq!(app.session.inputs().length, "0.90");
}

#[test]
fn zoom_text_follows_clamped_session_value() {
    let mut app = StringWaveApp::default();
    app.session.set_zoom_text("250");
    app.sync_zoom_text();
    assert_eq!(app.zoom_text, "200");
    assert_eq!(app.session.zoom().percent(), 200);
}

#[test]
fn surface_rects_split_area_evenly() {
    let area = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(408.0, 300.0));
    let rects = surface_rects(area, 2, 8.0);
    assert_eq!(rects.len(), 2);
    assert_eq!(rects[0].min, egui::pos2(10.0, 20.0));
    assert_eq!(rects[0].width(), 200.0);
    assert_eq!(rects[1].min.x, 218.0);
    assert_eq!(rects[1].max.x, 418.0);
    assert_eq!(rects[1].height(), 300.0);
    assert!(surface_rects(area, 0, 8.0).is_empty());
}

#[test]
fn string_stays_on_the_same_spot_of_the_photo_at_every_zoom() {
    let cell = egui::Rect::from_min_size(egui::pos2(30.0, 10.0), egui::vec2(400.0, 800.0));
    let geometry = StringGeometry::vertical(0.38, 0.05, 0.95);
    let renderer = WaveformRenderer::new();

    for scale in [0.1_f32, 1.0, 2.0] {
        let photo = photo_rect(cell, scale);
        assert_eq!(photo.center(), cell.center());

        let surface = SurfaceSize::new(photo.width() as f64, photo.height() as f64);
        let frame = FrameParams {
            time: 0.0,
            scale: scale as f64,
            amplitude: 8.0,
            frequency: 220.0,
            diameter: 1.0,
        };
        let stroke = renderer.render_frame(&geometry, surface, &frame);
        let top = stroke.points[0];
        let bottom = *stroke.points.last().unwrap();

        // Position relative to the photo, in the same units as the ratios.
        let rel = |x: f64, y: f64| (x / photo.width() as f64, y / photo.height() as f64);
        let (top_x, top_y) = rel(top.x, top.y);
        let (bottom_x, bottom_y) = rel(bottom.x, bottom.y);
        assert!((top_x - 0.38).abs() < 1e-4, "scale {scale}: x {top_x}");
        assert!((top_y - 0.05).abs() < 1e-4, "scale {scale}: y {top_y}");
        assert!((bottom_x - 0.38).abs() < 1e-4, "scale {scale}: x {bottom_x}");
        assert!((bottom_y - 0.95).abs() < 1e-4, "scale {scale}: y {bottom_y}");
    }
}

#[test]
fn readout_paints_all_three_values() {
    let readout = Readout {
        frequency: "219.64 Hz".into(),
        speed: "303.11 m/s".into(),
        wavelength: "1.3800 m".into(),
    };
    let cells = [egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 400.0))];

    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(cells[0]);
    let ctx = egui::Context::default();
    let output = ctx.run(raw, |ctx| {
        let painter = ctx.layer_painter(egui::LayerId::background());
        let mut sink = PainterSink::new(&painter, &cells, &cells, 1.0, egui::Color32::WHITE);
        sink.show_readout(&readout);
    });

    let painted: Vec<String> = output
        .shapes
        .iter()
        .filter_map(|clipped| match &clipped.shape {
            egui::Shape::Text(text) => Some(text.galley.text().to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(painted, vec!["219.64 Hz", "303.11 m/s", "1.3800 m"]);
}

#[test]
fn control_panel_width_is_clamped_to_half_the_window() {
    let mut app = StringWaveApp::default();
    app.controls_panel_width = 5000.0;
    let _ = run_frame(&mut app, 0.0, Vec::new());
    assert!(app.controls_panel_width <= 600.0, "got {}", app.controls_panel_width);
}
