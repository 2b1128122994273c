//! Weighted layer mixing and hard clipping.
//!
//! Every texture is a fixed-weight sum of mono layers (a noise bed, a
//! transient track, a modulation offset) clipped to [-1.0, 1.0].

#[allow(clippy::module_inception)]
mod mixer;
mod processing;

#[cfg(test)]
mod tests_hard_clip;
#[cfg(test)]
mod tests_mixing;

// Re-export public API
pub use mixer::{Layer, Mixer};
pub use processing::{hard_clip, hard_clip_buffer};
