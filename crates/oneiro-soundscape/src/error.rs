use thiserror::Error;

/// Construction-time configuration errors.
///
/// These are programming errors, fatal when the synthesizer is built;
/// synthesis itself cannot fail (numeric edges are clamped, not
/// reported).
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),

    #[error("duration must be a positive finite number of seconds, got {0}")]
    InvalidDuration(f64),

    #[error("max amplitude must be positive, got {0}")]
    InvalidAmplitude(i16),
}
