//! The waveform session: frequency, amplitude and play state, kept in step
//! with a drawn curve and an audible tone.
//!
//! Everything runs on the caller's thread. Each setter writes state first,
//! retunes the live tone (if any) and then repaints the whole curve.

use crate::config::{SessionConfig, AMPLITUDE_RANGE, FREQUENCY_RANGE, GAIN_SCALE};
use crate::error::WaveError;
use crate::tone::{AudioOutput, ToneGenerator};
use crate::waveform::{draw_curve, sample_curve, CanvasBuffer, DrawSurface, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Playing,
}

pub struct WaveformSession<S: DrawSurface, A: AudioOutput> {
    frequency: f32,
    amplitude: f32,
    surface: S,
    audio: A,
    // Some exactly while playing
    tone: Option<A::Tone>,
    curve: Vec<Point>,
}

impl<S: DrawSurface, A: AudioOutput> WaveformSession<S, A> {
    pub fn new(config: SessionConfig, surface: S, audio: A) -> Result<Self, WaveError> {
        let config = config.validate()?;
        let (width, height) = surface.size();
        if width == 0 || height == 0 {
            return Err(WaveError::surface_unavailable(format!(
                "zero-sized surface {width}x{height}"
            )));
        }
        let mut session = Self {
            frequency: config.frequency,
            amplitude: config.amplitude,
            surface,
            audio,
            tone: None,
            curve: Vec::new(),
        };
        session.redraw()?;
        Ok(session)
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Audio gain derived from the amplitude, in `[0.1, 1.0]`.
    pub fn gain(&self) -> f32 {
        self.amplitude / GAIN_SCALE
    }

    pub fn play_state(&self) -> PlayState {
        if self.tone.is_some() {
            PlayState::Playing
        } else {
            PlayState::Stopped
        }
    }

    pub fn is_playing(&self) -> bool {
        self.play_state() == PlayState::Playing
    }

    pub fn tone(&self) -> Option<&A::Tone> {
        self.tone.as_ref()
    }

    pub fn curve(&self) -> &[Point] {
        &self.curve
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn set_frequency(&mut self, value: f32) -> Result<(), WaveError> {
        self.frequency = FREQUENCY_RANGE.clamp(value)?;
        if let Some(tone) = self.tone.as_mut() {
            tone.set_frequency(self.frequency);
        }
        self.redraw()
    }

    pub fn set_amplitude(&mut self, value: f32) -> Result<(), WaveError> {
        self.amplitude = AMPLITUDE_RANGE.clamp(value)?;
        let gain = self.gain();
        if let Some(tone) = self.tone.as_mut() {
            tone.set_gain(gain);
        }
        self.redraw()
    }

    /// Starts a fresh tone when stopped, stops and releases it when playing.
    ///
    /// If the audio device cannot be acquired the session stays stopped.
    pub fn toggle_play(&mut self) -> Result<PlayState, WaveError> {
        match self.tone.take() {
            Some(mut tone) => {
                tone.stop();
                log::debug!("playback stopped");
            }
            None => {
                let tone = self
                    .audio
                    .start_tone(self.frequency, self.gain())
                    .map_err(|err| {
                        log::error!("failed to start tone: {}", err);
                        err
                    })?;
                self.tone = Some(tone);
                log::debug!("playback started at {} Hz", self.frequency);
            }
        }
        Ok(self.play_state())
    }

    /// Recomputes the curve from the current state and repaints the surface.
    pub fn redraw(&mut self) -> Result<(), WaveError> {
        let (width, height) = self.surface.size();
        self.curve = sample_curve(self.frequency, self.amplitude, width, height);
        draw_curve(&mut self.surface, &self.curve).map_err(|err| {
            log::error!("redraw failed: {}", err);
            err
        })
    }
}

impl<A: AudioOutput> WaveformSession<CanvasBuffer, A> {
    pub fn with_canvas(config: SessionConfig, audio: A) -> Result<Self, WaveError> {
        let surface = CanvasBuffer::new(config.width, config.height);
        Self::new(config, surface, audio)
    }
}

impl<S: DrawSurface, A: AudioOutput> Drop for WaveformSession<S, A> {
    fn drop(&mut self) {
        if let Some(mut tone) = self.tone.take() {
            tone.stop();
        }
        if let Err(err) = self.surface.clear() {
            log::warn!("failed to clear surface on teardown: {}", err);
        }
    }
}
