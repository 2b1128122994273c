//! Encoded WAV plus the metadata reported for it.

use super::encode::{encode_wav, pcm_hash, samples_to_pcm16};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples at `sample_rate`.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);

        Self {
            pcm_hash: pcm_hash(&pcm),
            wav_data: encode_wav(sample_rate, &pcm),
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Length of the audio in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.sample_rate as f64
    }
}
