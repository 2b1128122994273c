//! Noise synthesis module.
//!
//! Generates the three primitive noise colors the textures are built from.
//! Amplitudes are fixed so the raw generators already sit well inside
//! [-1.0, 1.0]; nothing here normalizes.

use rand_pcg::Pcg32;

use crate::rng::uniform;

use super::Synthesizer;

/// Peak amplitude of white noise.
pub const WHITE_AMPLITUDE: f64 = 0.6;

/// Pink noise leaky-integrator feedback.
const PINK_FEEDBACK: f64 = 0.94;
/// Pink noise leaky-integrator input gain.
const PINK_INPUT: f64 = 0.06;
/// Output gain applied to the blended pink signal.
const PINK_GAIN: f64 = 0.45;

/// Largest step the brown random walk can take per sample.
pub const BROWN_STEP: f64 = 0.02;
/// Output gain applied to the brown walk state.
pub const BROWN_GAIN: f64 = 0.6;

/// Noise color/type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseColor {
    /// White noise - independent uniform draws.
    White,
    /// Pink noise - smoothed component blended with the raw draw.
    Pink,
    /// Brown noise - bounded random walk, very bass-heavy.
    Brown,
}

impl Synthesizer for NoiseColor {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        match self {
            NoiseColor::White => white_noise(rng, num_samples),
            NoiseColor::Pink => pink_noise(rng, num_samples),
            NoiseColor::Brown => brown_noise(rng, num_samples),
        }
    }
}

/// Generates white noise uniformly distributed over `[-0.6, 0.6)`.
pub fn white_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    (0..num_samples)
        .map(|_| uniform(rng, -WHITE_AMPLITUDE, WHITE_AMPLITUDE))
        .collect()
}

/// Generates pink-ish noise.
///
/// A leaky integrator tracks the low end of the white input; adding the raw
/// draw back in approximates a -3 dB/octave tilt without a filter bank.
pub fn pink_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    let mut state = 0.0;
    let mut output = Vec::with_capacity(num_samples);

    for _ in 0..num_samples {
        let white = uniform(rng, -1.0, 1.0);
        state = PINK_FEEDBACK * state + PINK_INPUT * white;
        output.push((state + white) * PINK_GAIN);
    }

    output
}

/// Generates brown noise as a bounded random walk.
///
/// The walk state is clamped to [-1.0, 1.0] before the output gain is
/// applied, so it saturates at the bounds rather than wrapping.
pub fn brown_noise(rng: &mut Pcg32, num_samples: usize) -> Vec<f64> {
    let mut state: f64 = 0.0;
    let mut output = Vec::with_capacity(num_samples);

    for _ in 0..num_samples {
        let white = uniform(rng, -1.0, 1.0);
        state = (state + white * BROWN_STEP).clamp(-1.0, 1.0);
        output.push(state * BROWN_GAIN);
    }

    output
}
