//! Mono layer mixer.

use super::processing::hard_clip_buffer;

/// A single mono layer with its mix weight.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Layer samples.
    pub samples: Vec<f64>,
    /// Mix weight applied to every sample.
    pub volume: f64,
}

/// Sums weighted mono layers into a fixed-length buffer.
#[derive(Debug, Clone)]
pub struct Mixer {
    layers: Vec<Layer>,
    num_samples: usize,
}

impl Mixer {
    /// Creates a mixer producing `num_samples` of output.
    pub fn new(num_samples: usize) -> Self {
        Self {
            layers: Vec::new(),
            num_samples,
        }
    }

    /// Adds a mono layer.
    ///
    /// Layers shorter than the output contribute silence past their end;
    /// longer layers are cut off.
    pub fn add_mono(&mut self, samples: Vec<f64>, volume: f64) -> &mut Self {
        self.layers.push(Layer { samples, volume });
        self
    }

    /// Returns the number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the output length.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Mixes all layers without clipping.
    pub fn mix_mono(&self) -> Vec<f64> {
        let mut output = vec![0.0; self.num_samples];

        for layer in &self.layers {
            for (out, &sample) in output.iter_mut().zip(layer.samples.iter()) {
                *out += sample * layer.volume;
            }
        }

        output
    }

    /// Mixes all layers and hard clips the result to [-1.0, 1.0].
    pub fn mix_clipped(&self) -> Vec<f64> {
        let mut output = self.mix_mono();
        hard_clip_buffer(&mut output);
        output
    }
}
