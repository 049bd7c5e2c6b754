//! The three generators and their shared configuration.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use oneiro_core::Archetype;

use crate::buffer::SoundscapeBuffer;
use crate::error::SynthError;

/// 1/f-shaping filter, feedforward taps.
const PINK_B: [f64; 4] = [0.049922035, -0.095993537, 0.050612699, -0.004408786];
/// 1/f-shaping filter, feedback taps (a[0] = 1 implied).
const PINK_A: [f64; 3] = [-2.494956002, 2.017265875, -0.522189400];

// ─────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────

/// Parameters for soundscape rendering.
#[derive(Debug, Clone, Copy)]
pub struct SynthConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Clip duration in seconds.
    pub duration_secs: f64,
    /// Peak amplitude; samples are clamped to ±this value.
    pub max_amplitude: i16,
    /// Seed for the water-noise source. `Some` makes water rendering
    /// reproducible; `None` draws a fresh entropy seed per call.
    pub seed: Option<u64>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            duration_secs: 10.0,
            max_amplitude: i16::MAX,
            seed: None,
        }
    }
}

impl SynthConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            sample_rate: std::env::var("ONEIRO_SAMPLE_RATE")
                .ok().and_then(|s| s.parse().ok()).unwrap_or(defaults.sample_rate),
            duration_secs: std::env::var("ONEIRO_SYNTH_DURATION")
                .ok().and_then(|s| s.parse().ok()).unwrap_or(defaults.duration_secs),
            max_amplitude: std::env::var("ONEIRO_MAX_AMPLITUDE")
                .ok().and_then(|s| s.parse().ok()).unwrap_or(defaults.max_amplitude),
            seed: std::env::var("ONEIRO_SYNTH_SEED")
                .ok().and_then(|s| s.parse().ok()),
        }
    }

    fn validate(&self) -> Result<(), SynthError> {
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate(self.sample_rate));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(SynthError::InvalidDuration(self.duration_secs));
        }
        if self.max_amplitude <= 0 {
            return Err(SynthError::InvalidAmplitude(self.max_amplitude));
        }
        Ok(())
    }

    /// Number of samples a rendered buffer will hold.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_secs).round() as usize
    }
}

// ─────────────────────────────────────────────
// Synthesizer
// ─────────────────────────────────────────────

/// Renders ambient audio for a dream archetype.
pub struct Synthesizer {
    config: SynthConfig,
}

impl Synthesizer {
    /// Build a synthesizer, validating the configuration up front.
    pub fn new(config: SynthConfig) -> Result<Self, SynthError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Render the soundscape for `archetype`.
    ///
    /// Water maps to filtered noise, flying to the frequency sweep, and
    /// every other archetype to the default wind generator. Wind and
    /// whoosh are bit-reproducible; water is reproducible only when the
    /// config carries a seed.
    pub fn synthesize(&self, archetype: Archetype) -> SoundscapeBuffer {
        let samples = match archetype {
            Archetype::Water => self.render_water(),
            Archetype::Flying => self.render_whoosh(),
            _ => self.render_wind(),
        };
        SoundscapeBuffer {
            samples,
            sample_rate: self.config.sample_rate,
            duration_secs: self.config.duration_secs,
            archetype,
        }
    }

    /// 100 Hz sinusoid with exponential decay: A·0.1·sin(2π·100·t)·e^(−0.1·t).
    fn render_wind(&self) -> Vec<i16> {
        let amp = self.config.max_amplitude as f64 * 0.1;
        self.render_tone(|t| amp * (2.0 * PI * 100.0 * t).sin() * (-0.1 * t).exp())
    }

    /// Swept-frequency sinusoid: A·0.15·sin(2π·(200 + 50·t)·t).
    fn render_whoosh(&self) -> Vec<i16> {
        let amp = self.config.max_amplitude as f64 * 0.15;
        self.render_tone(|t| amp * (2.0 * PI * (200.0 + 50.0 * t) * t).sin())
    }

    fn render_tone(&self, f: impl Fn(f64) -> f64) -> Vec<i16> {
        let step = 1.0 / self.config.sample_rate as f64;
        (0..self.config.num_samples())
            .map(|i| quantize(f(i as f64 * step), self.config.max_amplitude))
            .collect()
    }

    /// Gaussian white noise shaped toward a 1/f spectrum by a fixed
    /// recursive filter, scaled to a low amplitude.
    fn render_water(&self) -> Vec<i16> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let amp = self.config.max_amplitude as f64 * 0.05;

        // Direct-form IIR over the white-noise stream.
        let mut x_hist = [0.0f64; 3];
        let mut y_hist = [0.0f64; 3];
        (0..self.config.num_samples())
            .map(|_| {
                let x: f64 = rng.sample(StandardNormal);
                let mut y = PINK_B[0] * x
                    + PINK_B[1] * x_hist[0]
                    + PINK_B[2] * x_hist[1]
                    + PINK_B[3] * x_hist[2];
                y -= PINK_A[0] * y_hist[0] + PINK_A[1] * y_hist[1] + PINK_A[2] * y_hist[2];

                x_hist = [x, x_hist[0], x_hist[1]];
                y_hist = [y, y_hist[0], y_hist[1]];
                quantize(amp * y, self.config.max_amplitude)
            })
            .collect()
    }
}

/// Round and clamp a raw sample to ±max, never overflowing i16.
fn quantize(value: f64, max_amplitude: i16) -> i16 {
    let max = max_amplitude as f64;
    value.round().clamp(-max, max) as i16
}
