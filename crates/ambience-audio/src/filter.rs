//! Recursive smoothing filters used to color noise beds.
//!
//! The beds only need a gentle spectral tilt, so a single-pole exponential
//! smoother is enough: `y[n] = alpha * x[n] + (1 - alpha) * y[n - 1]`.

/// Single-pole lowpass (exponential smoothing) filter.
///
/// Larger `alpha` passes more high-frequency content; smaller `alpha` smooths
/// more heavily. `alpha = 1.0` is a pass-through.
#[derive(Debug, Clone, Copy)]
pub struct OnePoleLowpass {
    alpha: f64,
    y1: f64,
}

impl OnePoleLowpass {
    /// Creates a new filter with zeroed state.
    ///
    /// # Arguments
    /// * `alpha` - Smoothing coefficient in (0, 1]
    pub fn new(alpha: f64) -> Self {
        Self { alpha, y1: 0.0 }
    }

    /// Returns the smoothing coefficient.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Resets the filter state.
    pub fn reset(&mut self) {
        self.y1 = 0.0;
    }

    /// Processes a single sample.
    #[inline]
    pub fn process(&mut self, input: f64) -> f64 {
        self.y1 = self.alpha * input + (1.0 - self.alpha) * self.y1;
        self.y1
    }

    /// Processes a buffer of samples in place.
    pub fn process_buffer(&mut self, samples: &mut [f64]) {
        for sample in samples.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

/// Smooths a sequence with a fresh single-pole lowpass.
///
/// Each call owns its own filter state; nothing carries over between calls.
pub fn low_pass(samples: &[f64], alpha: f64) -> Vec<f64> {
    let mut filter = OnePoleLowpass::new(alpha);
    samples.iter().map(|&x| filter.process(x)).collect()
}
