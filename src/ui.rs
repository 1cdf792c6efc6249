use egui::{Color32, Pos2, Shape, Stroke, Vec2};

use crate::config::{AMPLITUDE_RANGE, FREQUENCY_RANGE, FREQUENCY_STEP};
use crate::error::WaveError;
use crate::session::WaveformSession;
use crate::tone::AudioOutput;
use crate::waveform::{CanvasBuffer, DrawSurface};

const CURVE_STROKE: Stroke = Stroke {
    width: 1.0,
    color: Color32::BLACK,
};

pub struct WaveformUI<A: AudioOutput> {
    session: WaveformSession<CanvasBuffer, A>,
    last_error: Option<String>,
}

impl<A: AudioOutput> WaveformUI<A> {
    pub fn new(session: WaveformSession<CanvasBuffer, A>) -> Self {
        Self {
            session,
            last_error: None,
        }
    }

    pub fn session(&self) -> &WaveformSession<CanvasBuffer, A> {
        &self.session
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn update(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Sine Wave");
                    ui.add_space(10.0);
                    self.draw_canvas(ui);
                    ui.add_space(10.0);
                    self.draw_play_button(ui);
                });
                ui.add_space(20.0);
                ui.vertical(|ui| {
                    self.draw_controls(ui);
                    if let Some(err) = &self.last_error {
                        ui.add_space(10.0);
                        ui.colored_label(Color32::RED, err.as_str());
                    }
                });
            });
        });
    }

    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (width, height) = self.session.surface().size();
        let (rect, _) =
            ui.allocate_exact_size(Vec2::new(width as f32, height as f32), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK));

        for path in self.session.surface().strokes() {
            let points: Vec<Pos2> = path
                .iter()
                .map(|p| rect.min + Vec2::new(p.x, p.y))
                .collect();
            painter.add(Shape::line(points, CURVE_STROKE));
        }
    }

    fn draw_play_button(&mut self, ui: &mut egui::Ui) {
        let label = if self.session.is_playing() {
            "⏹ Stop"
        } else {
            "▶ Play"
        };
        if ui.button(label).clicked() {
            self.toggle_play();
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                let mut frequency = self.session.frequency();
                ui.label(format!("Frequency: {} Hz", frequency));
                let slider = egui::Slider::new(&mut frequency, FREQUENCY_RANGE.as_inclusive())
                    .step_by(FREQUENCY_STEP as f64)
                    .show_value(false);
                if ui.add(slider).changed() {
                    self.set_frequency(frequency);
                }
            });
        });
        ui.group(|ui| {
            ui.vertical(|ui| {
                let mut amplitude = self.session.amplitude();
                ui.label(format!("Amplitude: {}", amplitude));
                let slider = egui::Slider::new(&mut amplitude, AMPLITUDE_RANGE.as_inclusive())
                    .step_by(1.0)
                    .show_value(false);
                if ui.add(slider).changed() {
                    self.set_amplitude(amplitude);
                }
            });
        });
    }

    pub fn toggle_play(&mut self) {
        let result = self.session.toggle_play().map(|_| ());
        self.report(result);
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        let result = self.session.set_frequency(frequency);
        self.report(result);
    }

    pub fn set_amplitude(&mut self, amplitude: f32) {
        let result = self.session.set_amplitude(amplitude);
        self.report(result);
    }

    /// Releases the tone before the window closes.
    pub fn shutdown(&mut self) {
        if self.session.is_playing() {
            self.toggle_play();
        }
    }

    fn report(&mut self, result: Result<(), WaveError>) {
        self.last_error = result.err().map(|err| err.to_string());
    }
}
