//! Slow modulation sources for shaping texture loudness over time.
//!
//! The textures use very slow sine LFOs (periods of seconds) either as a
//! bipolar offset (the heavy rain surge) or, mapped to [0, 1], as amplitude
//! envelopes (the ocean swell).

pub mod lfo;


pub use lfo::{weighted_envelope, Lfo};
