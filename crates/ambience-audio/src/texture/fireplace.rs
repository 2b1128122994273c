//! Cozy fireplace: low brown-noise roar with bright crackles.

use rand_pcg::Pcg32;

use crate::mixer::Mixer;
use crate::synthesis::noise::brown_noise;
use crate::synthesis::transient::{scatter, Density, ParamRange, TransientShape};

/// Short, bright, tonal crackles.
pub fn crackle_shape() -> TransientShape {
    TransientShape {
        duration: 100..=400,
        amplitude: ParamRange::new(0.3, 0.6),
        frequency: Some(ParamRange::new(2000.0, 4000.0)),
        sharpness: 5.0,
    }
}

/// One crackle attempt every 400 samples.
pub const CRACKLE_DENSITY: Density = Density::Spaced { spacing: 400 };

/// Fireplace: `clamp(brown * 0.5 + crackles * 0.5)`.
pub fn fireplace_cozy(num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let base = brown_noise(rng, num_samples);

    let mut crackles = vec![0.0; num_samples];
    scatter(&mut crackles, &crackle_shape(), CRACKLE_DENSITY, sample_rate, rng);

    let mut mixer = Mixer::new(num_samples);
    mixer.add_mono(base, 0.5).add_mono(crackles, 0.5);
    mixer.mix_clipped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_fireplace_length_and_range() {
        let mut rng = create_rng(42);
        let samples = fireplace_cozy(44100, 44100.0, &mut rng);
        assert_eq!(samples.len(), 44100);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_crackle_parameters() {
        assert_eq!(
            crackle_shape(),
            TransientShape {
                duration: 100..=400,
                amplitude: ParamRange::new(0.3, 0.6),
                frequency: Some(ParamRange::new(2000.0, 4000.0)),
                sharpness: 5.0,
            }
        );
        assert_eq!(CRACKLE_DENSITY, Density::Spaced { spacing: 400 });
    }

    #[test]
    fn test_fireplace_matches_layer_formula() {
        let n = 22050;
        let mut rng = create_rng(42);
        let samples = fireplace_cozy(n, 44100.0, &mut rng);

        let mut rng = create_rng(42);
        let base = brown_noise(&mut rng, n);
        let mut crackles = vec![0.0; n];
        scatter(&mut crackles, &crackle_shape(), CRACKLE_DENSITY, 44100.0, &mut rng);

        for i in 0..n {
            let expected = (base[i] * 0.5 + crackles[i] * 0.5).clamp(-1.0, 1.0);
            assert!((samples[i] - expected).abs() < 1e-12, "index {}", i);
        }
    }

    #[test]
    fn test_crackle_count() {
        let mut rng = create_rng(42);
        let mut crackles = vec![0.0; 44100];
        let placed = scatter(&mut crackles, &crackle_shape(), CRACKLE_DENSITY, 44100.0, &mut rng);
        assert_eq!(placed, 110);
    }

    #[test]
    fn test_empty_fireplace() {
        let mut rng = create_rng(42);
        assert!(fireplace_cozy(0, 44100.0, &mut rng).is_empty());
    }
}
