//! PCM encoding, file assembly and payload hashing.

use super::header::{wav_header, WAV_HEADER_LEN};

/// Largest magnitude written; -1.0 maps to -32767, never `i16::MIN`.
const PCM_SCALE: f64 = 32767.0;

/// Converts samples to little-endian 16-bit PCM.
///
/// Each sample is clamped to [-1.0, 1.0] and encoded as
/// `round(x * 32767)`.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&x| {
            let value = (x.clamp(-1.0, 1.0) * PCM_SCALE).round() as i16;
            value.to_le_bytes()
        })
        .collect()
}

/// Assembles a complete file from PCM bytes.
pub fn encode_wav(sample_rate: u32, pcm: &[u8]) -> Vec<u8> {
    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());
    wav.extend_from_slice(&wav_header(sample_rate, pcm.len() as u32));
    wav.extend_from_slice(pcm);
    wav
}

/// BLAKE3 hex digest of a PCM payload.
pub fn pcm_hash(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Returns the PCM payload of a file produced by this module.
///
/// Returns `None` unless the bytes carry the fixed header with a `data`
/// size matching the remaining length.
pub fn pcm_payload(wav: &[u8]) -> Option<&[u8]> {
    if wav.len() < WAV_HEADER_LEN
        || &wav[0..4] != b"RIFF"
        || &wav[8..12] != b"WAVE"
        || &wav[36..40] != b"data"
    {
        return None;
    }

    let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
    let payload = &wav[WAV_HEADER_LEN..];
    (payload.len() == data_size).then_some(payload)
}
