//! Sample-level processing applied after mixing.

/// Clamps a sample to [-1.0, 1.0].
#[inline]
pub fn hard_clip(sample: f64) -> f64 {
    sample.clamp(-1.0, 1.0)
}

/// Clamps every sample in a buffer to [-1.0, 1.0].
pub fn hard_clip_buffer(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = hard_clip(*sample);
    }
}
