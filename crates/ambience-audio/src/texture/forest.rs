//! Forest ambience with bird chirps.

use rand_pcg::Pcg32;

use crate::mixer::hard_clip_buffer;
use crate::synthesis::noise::brown_noise;
use crate::synthesis::transient::{scatter, Density, ParamRange, TransientShape};

/// Tonal, slowly decaying chirps at a fixed level.
pub fn chirp_shape() -> TransientShape {
    TransientShape {
        duration: 800..=2000,
        amplitude: ParamRange::fixed(0.25),
        frequency: Some(ParamRange::new(1200.0, 2400.0)),
        sharpness: 4.0,
    }
}

/// A chirp may start at any sample with probability 0.002.
pub const CHIRP_DENSITY: Density = Density::Bernoulli { probability: 0.002 };

/// Forest birds: brown-noise ambience with chirps summed straight onto it.
pub fn forest_birds(num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let mut samples = brown_noise(rng, num_samples);
    scatter(&mut samples, &chirp_shape(), CHIRP_DENSITY, sample_rate, rng);
    hard_clip_buffer(&mut samples);
    samples
}
