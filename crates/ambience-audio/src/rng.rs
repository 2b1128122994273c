//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every random draw made while synthesizing a texture flows through a
//! generator created here. Each texture gets its own stream, derived from the
//! catalog's base seed and the texture's catalog index, so textures can be
//! rendered in any order (or concurrently) and still produce identical output.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Base seed shared by the whole catalog.
pub const BASE_SEED: u32 = 42;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a specific texture from the base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the texture's catalog
/// index, producing an independent seed for each texture.
///
/// # Arguments
/// * `base_seed` - The catalog's base seed
/// * `texture_index` - The 0-indexed position of the texture in the catalog
///
/// # Returns
/// A derived u32 seed for the texture
pub fn derive_texture_seed(base_seed: u32, texture_index: u32) -> u32 {
    let mut input = Vec::with_capacity(8);
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(&texture_index.to_le_bytes());

    let hash = blake3::hash(&input);

    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a specific texture.
///
/// Convenience function that derives the texture seed and creates the RNG.
pub fn create_texture_rng(base_seed: u32, texture_index: u32) -> Pcg32 {
    create_rng(derive_texture_seed(base_seed, texture_index))
}

/// Draws a float uniformly from `[min, max)`.
///
/// A degenerate range (`min >= max`) returns `min` without advancing the
/// generator.
#[inline]
pub fn uniform(rng: &mut Pcg32, min: f64, max: f64) -> f64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}

/// Draws an integer uniformly from `[min, max]` (both ends inclusive).
#[inline]
pub fn uniform_int(rng: &mut Pcg32, min: usize, max: usize) -> usize {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Runs a Bernoulli trial that succeeds with the given probability.
#[inline]
pub fn chance(rng: &mut Pcg32, probability: f64) -> bool {
    rng.gen::<f64>() < probability
}
