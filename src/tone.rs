use crate::error::WaveError;

/// A live sine oscillator feeding a gain stage, audible until stopped.
pub trait ToneGenerator {
    fn set_frequency(&mut self, frequency: f32);
    fn set_gain(&mut self, gain: f32);
    fn frequency(&self) -> f32;
    fn gain(&self) -> f32;
    /// Silences the tone and releases its output resources.
    fn stop(&mut self);
}

pub trait AudioOutput {
    type Tone: ToneGenerator;

    /// Creates and starts a new tone. Fails with
    /// [`WaveError::ResourceUnavailable`] when no device can be used.
    fn start_tone(&mut self, frequency: f32, gain: f32) -> Result<Self::Tone, WaveError>;
}
