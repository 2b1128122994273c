//! Sine LFO evaluated by sample index.

use std::f64::consts::PI;

/// Sine LFO with a period given in seconds.
///
/// The phase is computed directly from the sample index rather than
/// accumulated, so long buffers do not drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lfo {
    /// Period in samples.
    period_samples: f64,
}

impl Lfo {
    /// Creates a new LFO.
    ///
    /// # Arguments
    /// * `period_seconds` - Length of one cycle in seconds
    /// * `sample_rate` - Audio sample rate
    pub fn new(period_seconds: f64, sample_rate: f64) -> Self {
        Self {
            period_samples: sample_rate * period_seconds,
        }
    }

    /// Returns the period in samples.
    pub fn period_samples(&self) -> f64 {
        self.period_samples
    }

    /// Value at sample `index`, in [-1.0, 1.0]. Starts at zero, rising.
    #[inline]
    pub fn bipolar(&self, index: usize) -> f64 {
        (2.0 * PI * index as f64 / self.period_samples).sin()
    }

    /// Value at sample `index` mapped from [-1.0, 1.0] to [0.0, 1.0].
    #[inline]
    pub fn unipolar(&self, index: usize) -> f64 {
        (self.bipolar(index) + 1.0) / 2.0
    }

    /// Generates a buffer of unipolar LFO values.
    pub fn generate(&self, num_samples: usize) -> Vec<f64> {
        (0..num_samples).map(|i| self.unipolar(i)).collect()
    }
}

/// Builds an amplitude envelope as a weighted sum of unipolar LFOs.
///
/// # Arguments
/// * `num_samples` - Envelope length
/// * `sample_rate` - Audio sample rate
/// * `components` - `(period_seconds, weight)` pairs
///
/// # Returns
/// Envelope values; with non-negative weights summing to 1 they stay in [0, 1]
pub fn weighted_envelope(
    num_samples: usize,
    sample_rate: f64,
    components: &[(f64, f64)],
) -> Vec<f64> {
    let lfos: Vec<(Lfo, f64)> = components
        .iter()
        .map(|&(period, weight)| (Lfo::new(period, sample_rate), weight))
        .collect();

    (0..num_samples)
        .map(|i| lfos.iter().map(|(lfo, weight)| weight * lfo.unipolar(i)).sum())
        .collect()
}
