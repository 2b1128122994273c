//! Synthesis building blocks shared by the textures.
//!
//! - `noise` - White/pink/brown noise generators
//! - `transient` - Randomly placed decaying bursts (drops, chirps, crackles)

pub mod noise;
pub mod transient;

use rand_pcg::Pcg32;

/// Common trait for everything that renders a block of samples.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Deterministic RNG for any randomness
    ///
    /// # Returns
    /// Vector of `num_samples` audio samples
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64>;
}
