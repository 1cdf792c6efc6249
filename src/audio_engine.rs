//! cpal-backed [`AudioOutput`]: every tone gets its own output stream.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Sample, SampleFormat, SizedSample};
use dasp_sample::FromSample;
use parking_lot::Mutex;

use crate::error::WaveError;
use crate::oscillator::Oscillator;
use crate::tone::{AudioOutput, ToneGenerator};

#[derive(Debug, Default)]
pub struct CpalOutput;

impl CpalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl AudioOutput for CpalOutput {
    type Tone = CpalTone;

    fn start_tone(&mut self, frequency: f32, gain: f32) -> Result<CpalTone, WaveError> {
        let host = cpal::default_host();
        log::info!("cpal host: {}", host.id().name());
        let device = host
            .default_output_device()
            .ok_or_else(|| WaveError::resource_unavailable("no output device available"))?;
        match device.name() {
            Ok(name) => log::info!("output device: {}", name),
            Err(_) => log::info!("output device: (no name)"),
        }

        let supported_config = device
            .default_output_config()
            .map_err(WaveError::resource_unavailable)?;
        log::info!("default output config: {:?}", supported_config);

        let sample_format = supported_config.sample_format();
        let config: cpal::StreamConfig = supported_config.into();

        match sample_format {
            SampleFormat::F32 => CpalTone::open::<f32>(&device, &config, frequency, gain),
            SampleFormat::I16 => CpalTone::open::<i16>(&device, &config, frequency, gain),
            SampleFormat::U16 => CpalTone::open::<u16>(&device, &config, frequency, gain),
            other => Err(WaveError::resource_unavailable(format!(
                "unsupported sample format: {other:?}"
            ))),
        }
    }
}

/// Dropping the tone stops it.
pub struct CpalTone {
    oscillator: Arc<Mutex<Oscillator>>,
    stream: Option<cpal::Stream>,
}

impl CpalTone {
    fn open<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        frequency: f32,
        gain: f32,
    ) -> Result<Self, WaveError>
    where
        T: Sample + SizedSample + FromSample<f32>,
    {
        let sample_rate = config.sample_rate.0 as f32;
        let channels = config.channels as usize;

        let oscillator = Arc::new(Mutex::new(Oscillator::new(sample_rate, frequency, gain)));
        let osc_clone = Arc::clone(&oscillator);

        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    write_data(data, channels, &osc_clone)
                },
                |err| log::error!("an error occurred on stream: {}", err),
                None,
            )
            .map_err(WaveError::resource_unavailable)?;

        stream.play().map_err(WaveError::resource_unavailable)?;
        log::info!("tone started at {} Hz, gain {}", frequency, gain);

        Ok(Self {
            oscillator,
            stream: Some(stream),
        })
    }
}

fn write_data<T>(output: &mut [T], channels: usize, oscillator: &Arc<Mutex<Oscillator>>)
where
    T: Sample + FromSample<f32>,
{
    let mut oscillator = oscillator.lock();
    for frame in output.chunks_mut(channels) {
        let value = T::from_sample(oscillator.next_sample());
        for sample in frame.iter_mut() {
            *sample = value;
        }
    }
}

impl ToneGenerator for CpalTone {
    fn set_frequency(&mut self, frequency: f32) {
        self.oscillator.lock().set_frequency(frequency);
    }

    fn set_gain(&mut self, gain: f32) {
        self.oscillator.lock().set_gain(gain);
    }

    fn frequency(&self) -> f32 {
        self.oscillator.lock().frequency()
    }

    fn gain(&self) -> f32 {
        self.oscillator.lock().gain()
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                log::warn!("failed to pause stream: {}", err);
            }
            log::info!("tone stopped");
        }
    }
}

impl Drop for CpalTone {
    fn drop(&mut self) {
        self.stop();
    }
}
