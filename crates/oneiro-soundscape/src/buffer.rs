//! The rendered PCM buffer and its external representations.

use serde::{Deserialize, Serialize};

use oneiro_core::Archetype;

/// A rendered soundscape: mono 16-bit signed PCM at a fixed rate and
/// duration. Immutable once produced; persistence and transport belong
/// to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundscapeBuffer {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub duration_secs: f64,
    /// The archetype that selected the generator.
    pub archetype: Archetype,
}

impl SoundscapeBuffer {
    /// External identifier for the clip: `"{unix_secs}_{archetype}.wav"`.
    pub fn filename(&self, now_unix_secs: i64) -> String {
        format!("{}_{}.wav", now_unix_secs, self.archetype)
    }

    /// Encode the buffer as a mono PCM16 WAV file, in memory.
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        let data_len = (self.samples.len() * 2) as u32;
        let byte_rate = self.sample_rate * 2;

        let mut out = Vec::with_capacity(44 + data_len as usize);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");

        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes()); // fmt chunk size
        out.extend_from_slice(&1u16.to_le_bytes()); // PCM
        out.extend_from_slice(&1u16.to_le_bytes()); // mono
        out.extend_from_slice(&self.sample_rate.to_le_bytes());
        out.extend_from_slice(&byte_rate.to_le_bytes());
        out.extend_from_slice(&2u16.to_le_bytes()); // block align
        out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        for sample in &self.samples {
            out.extend_from_slice(&sample.to_le_bytes());
        }
        out
    }
}
