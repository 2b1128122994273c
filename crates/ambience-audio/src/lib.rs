//! Ambience Audio Backend
//!
//! Procedurally synthesizes a fixed catalog of ambient looping textures
//! (white/pink/brown noise, rain, forest, ocean, fireplace) and encodes each
//! one as a mono 16-bit WAV at two sample-rate tiers.
//!
//! # Overview
//!
//! Every texture is built from the same few pieces:
//!
//! - **Noise** - White, pink and brown noise beds
//! - **Filtering** - Single-pole lowpass smoothing of the beds
//! - **Transients** - Randomly placed decaying bursts (raindrops, chirps, crackles)
//! - **Modulation** - Slow sine swells and surges
//! - **Mixing** - Fixed-weight sums, hard clipped to [-1, 1]
//!
//! # Determinism
//!
//! All synthesis is deterministic. Every texture draws from its own PCG32
//! stream seeded from the catalog's base seed via BLAKE3, so the output is
//! byte-identical across runs whether textures are rendered sequentially or
//! in parallel.
//!
//! # Example
//!
//! ```no_run
//! use ambience_audio::{render_catalog, RenderSettings};
//!
//! let renders = render_catalog(&RenderSettings::default())?;
//! for render in &renders {
//!     std::fs::write(format!("{}.wav", render.texture), &render.master.wav_data)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - Render settings, tiers and catalog rendering
//! - [`texture`] - The eight composite textures
//! - [`synthesis`] - Noise generators and transient events
//! - [`filter`] - Single-pole lowpass
//! - [`modulation`] - Slow sine LFOs and envelopes
//! - [`mixer`] - Weighted mixing and clipping
//! - [`resample`] - Stride decimation
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`wav`] - Deterministic WAV file writer

pub mod error;
pub mod filter;
pub mod generate;
pub mod mixer;
pub mod modulation;
pub mod resample;
pub mod rng;
pub mod synthesis;
pub mod texture;
pub mod wav;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{
    render_catalog, render_catalog_parallel, render_texture, synthesize_texture,
    synthesize_tiers, RateTier, RenderSettings, TextureRender,
};
pub use texture::Texture;
pub use wav::WavResult;
