//! # oneiro-soundscape
//!
//! **Soundscape Synthesizer** — maps a dream archetype to one of three
//! procedural generators and renders a fixed-duration 16-bit PCM buffer:
//!
//! ```text
//! water   → filtered 1/f noise          (seeded, reproducible on demand)
//! flying  → swept-frequency "whoosh"    (fully deterministic)
//! others  → decaying 100 Hz "wind"      (fully deterministic)
//! ```
//!
//! The synthesizer performs no I/O; [`SoundscapeBuffer`] exposes the raw
//! samples plus an in-memory WAV encoding and a timestamped filename for
//! whatever layer persists or serves the audio.

pub mod buffer;
pub mod error;
pub mod synth;

pub use buffer::SoundscapeBuffer;
pub use error::SynthError;
pub use synth::{SynthConfig, Synthesizer};
