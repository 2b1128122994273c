//! Deterministic WAV file writer.
//!
//! Every file is mono 16-bit PCM behind the canonical 44-byte RIFF header,
//! with no timestamps or optional chunks, so identical samples always give
//! identical bytes. The BLAKE3 hash of the PCM payload identifies a render
//! independently of its header.

mod encode;
mod header;
mod result;


// Re-export public API
pub use encode::{encode_wav, pcm_hash, pcm_payload, samples_to_pcm16};
pub use header::{wav_header, BITS_PER_SAMPLE, CHANNELS, WAV_HEADER_LEN};
pub use result::WavResult;
