//! Standing-wave polyline generation.
//!
//! Each animation frame, every string is turned into an ordered list of points in
//! surface pixels. Nothing here draws; the presentation layer strokes the polyline.

use crate::constants::{BASE_SEGMENTS, MIN_SEGMENTS};
use crate::types::*;
use std::f64::consts::PI;

/// Per-frame inputs shared by every string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Animation clock in seconds
    pub time: f64,
    /// Zoom factor, in `[0.1, 2.0]`
    pub scale: f64,
    /// Amplitude in pixels at scale 1
    pub amplitude: f64,
    /// Oscillation frequency in Hz
    pub frequency: f64,
    /// Stroke thickness at scale 1
    pub diameter: f64,
}

/// A string ready to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct StringStroke {
    /// Points from the upper end to the lower end
    pub points: Vec<Point>,
    /// Stroke width in pixels
    pub thickness: f64,
}

/// End points of a string in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StringSpan {
    /// Upper end
    pub start: Point,
    /// Lower end
    pub end: Point,
}

impl StringSpan {
    /// Resolves normalized ratios to device pixels on a surface at `scale`.
    ///
    /// Ratios are defined against the unscaled photo, so the surface is first
    /// descaled to its logical size and the result scaled back, which keeps the
    /// string locked to the photo at every zoom level.
    pub fn resolve(geometry: &StringGeometry, surface: SurfaceSize, scale: f64) -> Self {
        debug_assert!(scale > 0.0, "zoom scale must be positive");
        let base_width = surface.width / scale;
        let base_height = surface.height / scale;

        Self {
            start: Point {
                x: base_width * geometry.x_start_ratio * scale,
                y: base_height * geometry.y_start_ratio * scale,
            },
            end: Point {
                x: base_width * geometry.x_end_ratio * scale,
                y: base_height * geometry.y_end_ratio * scale,
            },
        }
    }

    /// Rest position at fraction `t` along the string.
    pub fn lerp(&self, t: f64) -> Point {
        Point {
            x: self.start.x + (self.end.x - self.start.x) * t,
            y: self.start.y + (self.end.y - self.start.y) * t,
        }
    }
}

/// Number of polyline segments at a zoom level: `floor(100 * sqrt(scale))`, at least 8.
pub fn segment_count(scale: f64) -> usize {
    let segments = (BASE_SEGMENTS * scale.max(0.0).sqrt()).floor() as usize;
    segments.max(MIN_SEGMENTS)
}

/// Spatial profile of the fundamental, `sin(πt)`, pinned to exactly zero at both ends.
pub fn mode_shape(t: f64) -> f64 {
    if t <= 0.0 || t >= 1.0 {
        0.0
    } else {
        (PI * t).sin()
    }
}

/// Horizontal displacement of the point at fraction `t` along the string.
pub fn displacement(t: f64, frame: &FrameParams) -> f64 {
    frame.amplitude * frame.scale * mode_shape(t) * (2.0 * PI * frame.frequency * frame.time).sin()
}

/// Builds string polylines for a frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct WaveformRenderer;

impl WaveformRenderer {
    /// Creates a renderer.
    pub fn new() -> Self {
        Self
    }

    /// Computes the polyline for one string on one surface.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Where the string sits on its photo
    /// * `surface` - Current size of the drawing surface
    /// * `frame` - Time, zoom and physics shared by all strings this frame
    ///
    /// # Returns
    ///
    /// `segment_count(scale) + 1` points from the upper to the lower end, and the
    /// stroke thickness `diameter * scale`.
    pub fn render_frame(
        &self,
        geometry: &StringGeometry,
        surface: SurfaceSize,
        frame: &FrameParams,
    ) -> StringStroke {
        let span = StringSpan::resolve(geometry, surface, frame.scale);
        let segments = segment_count(frame.scale);

        let points = (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;
                let rest = span.lerp(t);
                Point {
                    x: rest.x + displacement(t, frame),
                    y: rest.y,
                }
            })
            .collect();

        StringStroke {
            points,
            thickness: frame.diameter * frame.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(time: f64, scale: f64) -> FrameParams {
        FrameParams {
            time,
            scale,
            amplitude: 8.0,
            frequency: 219.6,
            diameter: 1.0,
        }
    }

    #[test]
    fn test_segment_count_scales_with_zoom() {
        assert_eq!(segment_count(1.0), 100);
        assert_eq!(segment_count(2.0), 141);
        assert_eq!(segment_count(0.1), 31);
        assert_eq!(segment_count(0.25), 50);
        assert_eq!(segment_count(0.001), MIN_SEGMENTS);
    }

    #[test]
    fn test_endpoints_never_move() {
        for &time in &[0.0, 0.0011, 0.37, 1.5, 1234.5678] {
            for &scale in &[0.1, 0.7, 1.0, 2.0] {
                let f = frame(time, scale);
                assert_eq!(displacement(0.0, &f), 0.0);
                assert_eq!(displacement(1.0, &f), 0.0);
            }
        }
    }

    #[test]
    fn test_polyline_shape() {
        let renderer = WaveformRenderer::new();
        let geometry = StringGeometry::vertical(0.38, 0.05, 0.95);
        let surface = SurfaceSize::new(400.0, 800.0);
        // A quarter period in: the temporal factor is at its peak.
        let f = FrameParams {
            time: 0.25,
            frequency: 1.0,
            ..frame(0.0, 1.0)
        };
        let stroke = renderer.render_frame(&geometry, surface, &f);

        assert_eq!(stroke.points.len(), 101);
        assert_eq!(stroke.thickness, 1.0);

        let first = stroke.points[0];
        let last = stroke.points[100];
        assert!((first.x - 152.0).abs() < 1e-9);
        assert!((first.y - 40.0).abs() < 1e-9);
        assert!((last.x - 152.0).abs() < 1e-9);
        assert!((last.y - 760.0).abs() < 1e-9);

        let middle = stroke.points[50];
        assert!((middle.x - (152.0 + 8.0)).abs() < 1e-9);
        assert!((middle.y - 400.0).abs() < 1e-9);

        for pair in stroke.points.windows(2) {
            assert!(pair[1].y > pair[0].y);
        }
    }

    #[test]
    fn test_anchor_stays_locked_across_zoom() {
        let renderer = WaveformRenderer::new();
        let geometry = StringGeometry {
            x_start_ratio: 0.33,
            x_end_ratio: 0.37,
            y_start_ratio: 0.12,
            y_end_ratio: 0.88,
        };
        let surface = SurfaceSize::new(640.0, 480.0);
        for &scale in &[0.1, 0.5, 1.0, 1.3, 2.0] {
            let stroke = renderer.render_frame(&geometry, surface, &frame(0.0, scale));
            let first = stroke.points.first().unwrap();
            let last = stroke.points.last().unwrap();
            assert!((first.x - 640.0 * 0.33).abs() < 1e-9);
            assert!((first.y - 480.0 * 0.12).abs() < 1e-9);
            assert!((last.x - 640.0 * 0.37).abs() < 1e-9);
            assert!((last.y - 480.0 * 0.88).abs() < 1e-9);
            assert!((stroke.thickness - scale).abs() < 1e-12);
        }
    }

    #[test]
    fn test_slanted_string_interpolates_rest_line() {
        let span = StringSpan::resolve(
            &StringGeometry {
                x_start_ratio: 0.2,
                x_end_ratio: 0.4,
                y_start_ratio: 0.0,
                y_end_ratio: 1.0,
            },
            SurfaceSize::new(100.0, 100.0),
            1.0,
        );
        let mid = span.lerp(0.5);
        assert!((mid.x - 30.0).abs() < 1e-9);
        assert!((mid.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_amplitude_scales_with_zoom() {
        let f = FrameParams {
            time: 0.25,
            frequency: 1.0,
            ..frame(0.0, 2.0)
        };
        assert!((displacement(0.5, &f) - 16.0).abs() < 1e-9);
    }
}
