use std::sync::atomic::{AtomicU32, Ordering};

/// Phase-accumulating sine oscillator with a gain stage.
///
/// Frequency and gain live in atomics so the UI thread can retune a running
/// tone without restarting it.
pub struct Oscillator {
    phase: f32,
    frequency: AtomicU32,
    gain: AtomicU32,
    sample_rate: f32,
}

impl Oscillator {
    pub fn new(sample_rate: f32, frequency: f32, gain: f32) -> Self {
        Self {
            phase: 0.0,
            frequency: AtomicU32::new(frequency.to_bits()),
            gain: AtomicU32::new(gain.to_bits()),
            sample_rate,
        }
    }

    pub fn next_sample(&mut self) -> f32 {
        let frequency = self.frequency();
        let gain = self.gain();
        let value = (self.phase * 2.0 * std::f32::consts::PI).sin();
        self.phase = (self.phase + frequency / self.sample_rate) % 1.0;
        value * gain
    }

    pub fn set_frequency(&self, frequency: f32) {
        self.frequency.store(frequency.to_bits(), Ordering::Relaxed);
    }

    pub fn set_gain(&self, gain: f32) {
        self.gain.store(gain.to_bits(), Ordering::Relaxed);
    }

    pub fn frequency(&self) -> f32 {
        f32::from_bits(self.frequency.load(Ordering::Relaxed))
    }

    pub fn gain(&self) -> f32 {
        f32::from_bits(self.gain.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn starts_at_zero_crossing() {
        let mut osc = Oscillator::new(48_000.0, 440.0, 1.0);
        assert_eq!(osc.next_sample(), 0.0);
    }

    #[test]
    fn quarter_period_peaks_at_gain() {
        // 1 Hz at 4 Hz sample rate: 0, peak, 0, trough
        let mut osc = Oscillator::new(4.0, 1.0, 0.5);
        osc.next_sample();
        assert_relative_eq!(osc.next_sample(), 0.5, epsilon = 1e-6);
        assert_relative_eq!(osc.next_sample(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(osc.next_sample(), -0.5, epsilon = 1e-6);
    }

    #[test]
    fn retunes_without_resetting_phase() {
        let mut osc = Oscillator::new(4.0, 1.0, 1.0);
        osc.next_sample();
        osc.set_frequency(0.0);
        osc.set_gain(0.25);
        // phase stays at a quarter cycle
        assert_relative_eq!(osc.next_sample(), 0.25, epsilon = 1e-6);
        assert_relative_eq!(osc.next_sample(), 0.25, epsilon = 1e-6);
        assert_eq!(osc.frequency(), 0.0);
    }
}
