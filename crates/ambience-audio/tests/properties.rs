//! Property-based tests for the signal primitives using proptest.

use proptest::prelude::*;

use ambience_audio::filter::low_pass;
use ambience_audio::resample::downsample;
use ambience_audio::rng::create_rng;
use ambience_audio::synthesis::noise::{brown_noise, BROWN_GAIN, BROWN_STEP};

proptest! {
    /// Decimation keeps exactly ceil(len / factor) stride-selected samples.
    #[test]
    fn downsample_length_and_stride(
        samples in prop::collection::vec(-1.0f64..1.0, 0..500),
        factor in 2usize..9
    ) {
        let out = downsample(&samples, factor);
        prop_assert_eq!(out.len(), samples.len().div_ceil(factor));
        for (k, &s) in out.iter().enumerate() {
            prop_assert_eq!(s, samples[k * factor]);
        }
    }

    /// A zero input yields a zero output for any alpha.
    #[test]
    fn low_pass_zero_input_is_zero(len in 0usize..1000, alpha in 0.001f64..=1.0) {
        let out = low_pass(&vec![0.0; len], alpha);
        prop_assert_eq!(out.len(), len);
        prop_assert!(out.iter().all(|&s| s == 0.0));
    }

    /// Smoothing never leaves the input's range.
    #[test]
    fn low_pass_stays_within_input_bounds(
        samples in prop::collection::vec(-0.6f64..0.6, 1..500),
        alpha in 0.01f64..=1.0
    ) {
        let out = low_pass(&samples, alpha);
        prop_assert!(out.iter().all(|s| s.abs() <= 0.6 + 1e-12));
    }

    /// Brown noise is a bounded walk for any seed.
    #[test]
    fn brown_noise_bounded_walk(seed in any::<u32>(), len in 1usize..5000) {
        let mut rng = create_rng(seed);
        let out = brown_noise(&mut rng, len);

        let mut prev = 0.0_f64;
        for s in out {
            let state = s / BROWN_GAIN;
            prop_assert!(state.abs() <= 1.0 + 1e-12);
            prop_assert!((state - prev).abs() <= BROWN_STEP + 1e-12);
            prev = state;
        }
    }
}
