//! Waveform curve sampling and the drawing capability it is painted through.
//!
//! The curve maps pixel column `i` straight into the sine phase,
//! `y(i) = height / 2 + amplitude * sin(2π * frequency * i / width)`, with no
//! notion of time or sample rate. Frequency therefore shows up as the number of
//! oscillations across the canvas, not as cycles per second.

use std::f64::consts::PI;

use crate::error::WaveError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Samples one point per pixel column in `0..width`.
pub fn sample_curve(frequency: f32, amplitude: f32, width: u32, height: u32) -> Vec<Point> {
    let center_y = height as f64 / 2.0;
    let width_f = width as f64;
    (0..width)
        .map(|i| {
            let phase = 2.0 * PI * frequency as f64 * i as f64 / width_f;
            Point {
                x: i as f32,
                y: (center_y + amplitude as f64 * phase.sin()) as f32,
            }
        })
        .collect()
}

/// A host-provided 2-D drawing context.
pub trait DrawSurface {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self) -> Result<(), WaveError>;
    fn move_to(&mut self, point: Point) -> Result<(), WaveError>;
    fn line_to(&mut self, point: Point) -> Result<(), WaveError>;
    fn stroke(&mut self) -> Result<(), WaveError>;
}

/// Replaces whatever is on `surface` with a polyline through `points`.
///
/// On failure after the initial clear the surface is cleared once more, so a
/// half-drawn path never stays visible.
pub fn draw_curve<S: DrawSurface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<(), WaveError> {
    surface.clear()?;
    if let Err(err) = trace_path(surface, points) {
        if let Err(clear_err) = surface.clear() {
            log::error!("failed to clear surface after draw error: {}", clear_err);
        }
        return Err(err);
    }
    Ok(())
}

fn trace_path<S: DrawSurface + ?Sized>(surface: &mut S, points: &[Point]) -> Result<(), WaveError> {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return Ok(());
    };
    surface.move_to(*first)?;
    for point in iter {
        surface.line_to(*point)?;
    }
    surface.stroke()
}

/// In-memory surface that keeps stroked paths around for an immediate-mode
/// renderer to paint every frame.
#[derive(Debug, Clone)]
pub struct CanvasBuffer {
    width: u32,
    height: u32,
    attached: bool,
    path: Vec<Point>,
    strokes: Vec<Vec<Point>>,
}

impl CanvasBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            attached: true,
            path: Vec::new(),
            strokes: Vec::new(),
        }
    }

    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    pub fn is_blank(&self) -> bool {
        self.strokes.is_empty() && self.path.is_empty()
    }

    /// Marks the buffer as belonging to a view that no longer exists. Drawing
    /// calls fail from then on; clearing still works.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    fn ensure_attached(&self) -> Result<(), WaveError> {
        if self.attached {
            Ok(())
        } else {
            Err(WaveError::surface_unavailable("canvas detached from view"))
        }
    }
}

impl DrawSurface for CanvasBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> Result<(), WaveError> {
        self.path.clear();
        self.strokes.clear();
        Ok(())
    }

    fn move_to(&mut self, point: Point) -> Result<(), WaveError> {
        self.ensure_attached()?;
        self.path.clear();
        self.path.push(point);
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> Result<(), WaveError> {
        self.ensure_attached()?;
        self.path.push(point);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), WaveError> {
        self.ensure_attached()?;
        let path = std::mem::take(&mut self.path);
        self.strokes.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn curve_follows_pixel_phase_formula() {
        let points = sample_curve(440.0, 50.0, 400, 200);
        assert_eq!(points.len(), 400);
        assert_relative_eq!(points[0].y, 100.0);
        // sin(220π) is zero up to rounding
        assert_relative_eq!(points[100].y, 100.0, epsilon = 1e-3);

        let expected = 100.0 + 50.0 * (2.0 * PI * 440.0 * 7.0 / 400.0).sin();
        assert_relative_eq!(points[7].y, expected as f32, epsilon = 1e-4);
        assert_eq!(points[7].x, 7.0);
    }

    #[test]
    fn sampling_is_deterministic() {
        assert_eq!(sample_curve(1230.0, 73.0, 400, 200), sample_curve(1230.0, 73.0, 400, 200));
    }

    #[test]
    fn zero_frequency_is_flat() {
        let points = sample_curve(0.0, 100.0, 400, 200);
        assert!(points.iter().all(|p| p.y == 100.0));
    }

    #[test]
    fn minimum_amplitude_is_not_flat() {
        let points = sample_curve(1.0, 10.0, 400, 200);
        let peak = points.iter().map(|p| (p.y - 100.0).abs()).fold(0.0, f32::max);
        assert_relative_eq!(peak, 10.0, epsilon = 1e-3);
    }

    #[test]
    fn draw_curve_strokes_one_path() {
        let mut canvas = CanvasBuffer::new(400, 200);
        let points = sample_curve(30.0, 20.0, 400, 200);
        draw_curve(&mut canvas, &points).unwrap();
        assert_eq!(canvas.strokes().len(), 1);
        assert_eq!(canvas.strokes()[0], points);

        draw_curve(&mut canvas, &points).unwrap();
        assert_eq!(canvas.strokes().len(), 1);
    }

    #[test]
    fn detached_canvas_is_left_blank() {
        let mut canvas = CanvasBuffer::new(400, 200);
        draw_curve(&mut canvas, &sample_curve(30.0, 20.0, 400, 200)).unwrap();
        canvas.detach();

        let err = draw_curve(&mut canvas, &sample_curve(60.0, 20.0, 400, 200));
        assert!(matches!(err, Err(WaveError::DrawSurfaceUnavailable { .. })));
        assert!(canvas.is_blank());
    }
}
