//! Parameter ranges and the in-memory session configuration.
//!
//! Nothing here is persisted; every launch starts from [`SessionConfig::default`].

use crate::error::WaveError;

/// Amplitude is divided by this before it is used as an audio gain.
pub const GAIN_SCALE: f32 = 100.0;

pub const FREQUENCY_STEP: f32 = 30.0;

pub const FREQUENCY_RANGE: ParamRange = ParamRange {
    name: "frequency",
    min: 0.0,
    max: 2000.0,
};

pub const AMPLITUDE_RANGE: ParamRange = ParamRange {
    name: "amplitude",
    min: 10.0,
    max: 100.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps finite values to the nearest bound. Non-finite values have no
    /// nearest bound and are rejected.
    pub fn clamp(&self, value: f32) -> Result<f32, WaveError> {
        if !value.is_finite() {
            return Err(WaveError::InvalidRange {
                param: self.name,
                value,
            });
        }
        if !self.contains(value) {
            log::warn!(
                "{} {} outside [{}, {}], clamping",
                self.name,
                value,
                self.min,
                self.max
            );
        }
        Ok(value.clamp(self.min, self.max))
    }

    pub fn as_inclusive(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub frequency: f32,
    pub amplitude: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 200,
            frequency: 440.0,
            amplitude: 50.0,
        }
    }
}

impl SessionConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn validate(&self) -> Result<Self, WaveError> {
        if self.width == 0 || self.height == 0 {
            return Err(WaveError::surface_unavailable(format!(
                "zero-sized surface {}x{}",
                self.width, self.height
            )));
        }
        Ok(Self {
            width: self.width,
            height: self.height,
            frequency: FREQUENCY_RANGE.clamp(self.frequency)?,
            amplitude: AMPLITUDE_RANGE.clamp(self.amplitude)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_values_to_nearest_bound() {
        assert_eq!(FREQUENCY_RANGE.clamp(-5.0), Ok(0.0));
        assert_eq!(FREQUENCY_RANGE.clamp(2500.0), Ok(2000.0));
        assert_eq!(AMPLITUDE_RANGE.clamp(3.0), Ok(10.0));
        assert_eq!(AMPLITUDE_RANGE.clamp(55.0), Ok(55.0));
    }

    #[test]
    fn clamp_rejects_non_finite() {
        assert!(matches!(
            AMPLITUDE_RANGE.clamp(f32::NAN),
            Err(WaveError::InvalidRange { param: "amplitude", .. })
        ));
        assert!(FREQUENCY_RANGE.clamp(f32::INFINITY).is_err());
    }

    #[test]
    fn default_matches_reference_ui() {
        let config = SessionConfig::default();
        assert_eq!((config.width, config.height), (400, 200));
        assert_eq!(config.frequency, 440.0);
        assert_eq!(config.amplitude, 50.0);
    }

    #[test]
    fn validate_clamps_and_rejects_empty_surface() {
        let config = SessionConfig::default()
            .with_frequency(9000.0)
            .with_amplitude(0.0)
            .validate()
            .unwrap();
        assert_eq!(config.frequency, 2000.0);
        assert_eq!(config.amplitude, 10.0);

        let err = SessionConfig::default().with_size(0, 200).validate();
        assert!(matches!(err, Err(WaveError::DrawSurfaceUnavailable { .. })));
    }
}
