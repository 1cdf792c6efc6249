use std::fmt;

/// Failures surfaced by a waveform session to its host view.
#[derive(Debug, Clone, PartialEq)]
pub enum WaveError {
    ResourceUnavailable { reason: String },
    /// A parameter value that cannot be clamped (NaN or infinite).
    InvalidRange { param: &'static str, value: f32 },
    DrawSurfaceUnavailable { reason: String },
}

impl WaveError {
    pub fn resource_unavailable(reason: impl fmt::Display) -> Self {
        WaveError::ResourceUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn surface_unavailable(reason: impl fmt::Display) -> Self {
        WaveError::DrawSurfaceUnavailable {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveError::ResourceUnavailable { reason } => {
                write!(f, "Audio output unavailable: {reason}")
            }
            WaveError::InvalidRange { param, value } => {
                write!(f, "Invalid {param} value: {value}")
            }
            WaveError::DrawSurfaceUnavailable { reason } => {
                write!(f, "Draw surface unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for WaveError {}
