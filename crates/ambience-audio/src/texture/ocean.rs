//! Ocean waves: filtered noise under two overlapping slow swells.

use rand_pcg::Pcg32;

use crate::filter::low_pass;
use crate::mixer::hard_clip;
use crate::modulation::weighted_envelope;
use crate::synthesis::noise::white_noise;

/// `(period_seconds, weight)` of each swell component.
pub const SWELLS: [(f64, f64); 2] = [(5.0, 0.5), (12.0, 0.5)];

/// Output gain applied before the swell envelope.
const OCEAN_GAIN: f64 = 0.6;

/// The ocean amplitude envelope: the mean of a 5 s and a 12 s unipolar sine.
pub fn ocean_envelope(num_samples: usize, sample_rate: f64) -> Vec<f64> {
    weighted_envelope(num_samples, sample_rate, &SWELLS)
}

/// Ocean waves: `clamp(lowpass(white, 0.5) * 0.6 * envelope)`.
pub fn ocean_waves(num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let white = white_noise(rng, num_samples);
    let envelope = ocean_envelope(num_samples, sample_rate);
    let filtered = low_pass(&white, 0.5);

    filtered
        .iter()
        .zip(envelope.iter())
        .map(|(&s, &env)| hard_clip(s * OCEAN_GAIN * env))
        .collect()
}
