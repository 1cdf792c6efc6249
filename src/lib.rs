//! A sine wave visualizer with a live tone: two sliders drive both a drawn
//! curve and an audible oscillator.

pub mod audio_engine;
pub mod config;
pub mod error;
pub mod oscillator;
pub mod session;
pub mod tone;
pub mod ui;
pub mod waveform;

pub use config::SessionConfig;
pub use error::WaveError;
pub use session::{PlayState, WaveformSession};
