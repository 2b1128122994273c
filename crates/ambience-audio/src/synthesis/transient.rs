//! Transient event synthesis.
//!
//! Raindrops, bird chirps and fire crackles are all the same shape: a short
//! burst with an exponential decay, optionally multiplied by a sine tone,
//! dropped at a random position and summed into a working buffer.
//!
//! A [`TransientShape`] holds the fixed per-texture ranges, a [`Density`]
//! says how often bursts are attempted, and [`scatter`] draws the bursts and
//! sums them in. Bursts overlap freely and are truncated at the end of the
//! buffer, never wrapped.

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use rand_pcg::Pcg32;

use crate::rng::{chance, uniform, uniform_int};

/// A half-open float range sampled uniformly.
///
/// A range whose bounds are equal is a fixed value and consumes no
/// randomness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Exclusive upper bound.
    pub max: f64,
}

impl ParamRange {
    /// Creates a range over `[min, max)`.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Creates a range that always yields `value`.
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Draws a value from the range.
    pub fn sample(&self, rng: &mut Pcg32) -> f64 {
        uniform(rng, self.min, self.max)
    }
}

/// Fixed description of one family of transients.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientShape {
    /// Burst length in samples (inclusive range).
    pub duration: RangeInclusive<usize>,
    /// Peak amplitude.
    pub amplitude: ParamRange,
    /// Tone frequency in Hz; `None` for pure-decay bursts.
    pub frequency: Option<ParamRange>,
    /// Decay sharpness: the envelope's time constant is `duration / sharpness`.
    pub sharpness: f64,
}

impl TransientShape {
    /// Draws a concrete event starting at `onset`.
    ///
    /// Draw order is duration, amplitude, then frequency.
    pub fn sample(&self, onset: usize, rng: &mut Pcg32) -> Transient {
        let duration = uniform_int(rng, *self.duration.start(), *self.duration.end());
        let amplitude = self.amplitude.sample(rng);
        let frequency = self.frequency.map(|range| range.sample(rng));

        Transient {
            onset,
            duration,
            amplitude,
            frequency,
            sharpness: self.sharpness,
        }
    }
}

/// How often transients are attempted across a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    /// `len / spacing` bursts, each at a uniformly random onset.
    Spaced {
        /// Samples per attempted burst.
        spacing: usize,
    },
    /// An independent trial at every sample; a hit starts a burst there.
    Bernoulli {
        /// Per-sample probability of starting a burst.
        probability: f64,
    },
}

/// A single concrete burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transient {
    /// Index of the first affected sample.
    pub onset: usize,
    /// Length of the burst in samples.
    pub duration: usize,
    /// Peak amplitude.
    pub amplitude: f64,
    /// Tone frequency in Hz, if tonal.
    pub frequency: Option<f64>,
    /// Decay sharpness divisor.
    pub sharpness: f64,
}

impl Transient {
    /// Value of the decay envelope `offset` samples into the burst.
    #[inline]
    pub fn envelope(&self, offset: usize) -> f64 {
        let time_constant = self.duration as f64 / self.sharpness;
        (-(offset as f64) / time_constant).exp()
    }

    /// Value of the burst `offset` samples after its onset.
    #[inline]
    pub fn value_at(&self, offset: usize, sample_rate: f64) -> f64 {
        let level = self.amplitude * self.envelope(offset);
        match self.frequency {
            Some(freq) => level * (2.0 * PI * freq * offset as f64 / sample_rate).sin(),
            None => level,
        }
    }

    /// Adds the burst into `buffer`, stopping at the end of the buffer.
    pub fn apply(&self, buffer: &mut [f64], sample_rate: f64) {
        if self.onset >= buffer.len() {
            return;
        }
        let end = (self.onset + self.duration).min(buffer.len());
        for (offset, sample) in buffer[self.onset..end].iter_mut().enumerate() {
            *sample += self.value_at(offset, sample_rate);
        }
    }
}

/// Draws transients over the whole buffer and sums them in place.
///
/// Returns the number of bursts placed.
pub fn scatter(
    buffer: &mut [f64],
    shape: &TransientShape,
    density: Density,
    sample_rate: f64,
    rng: &mut Pcg32,
) -> usize {
    let len = buffer.len();
    let mut placed = 0;

    match density {
        Density::Spaced { spacing } => {
            let attempts = if spacing == 0 { 0 } else { len / spacing };
            for _ in 0..attempts {
                let onset = uniform_int(rng, 0, len - 1);
                shape.sample(onset, rng).apply(buffer, sample_rate);
                placed += 1;
            }
        }
        Density::Bernoulli { probability } => {
            for onset in 0..len {
                if chance(rng, probability) {
                    shape.sample(onset, rng).apply(buffer, sample_rate);
                    placed += 1;
                }
            }
        }
    }

    placed
}
