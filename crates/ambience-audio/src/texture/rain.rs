//! Rain textures.
//!
//! Light rain is a softened white-noise bed with sparse raindrop hits on top.
//! Heavy rain is a brighter bed over a brown-noise rumble with a slow surge.

use rand_pcg::Pcg32;

use crate::filter::low_pass;
use crate::mixer::Mixer;
use crate::modulation::Lfo;
use crate::synthesis::noise::{brown_noise, white_noise};
use crate::synthesis::transient::{scatter, Density, ParamRange, TransientShape};

/// Pure-decay raindrop hits.
pub fn raindrop_shape() -> TransientShape {
    TransientShape {
        duration: 200..=600,
        amplitude: ParamRange::new(0.2, 0.4),
        frequency: None,
        sharpness: 6.0,
    }
}

/// One raindrop attempt every 700 samples.
pub const RAINDROP_DENSITY: Density = Density::Spaced { spacing: 700 };

/// Period of the heavy-rain surge, in seconds.
const SURGE_PERIOD: f64 = 0.7;
/// Depth of the heavy-rain surge.
const SURGE_DEPTH: f64 = 0.2;

/// Light rain: `clamp(lowpass(white, 0.3) * 0.7 + drops * 0.5)`.
pub fn rain_light(num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let bed = low_pass(&white_noise(rng, num_samples), 0.3);

    let mut drops = vec![0.0; num_samples];
    scatter(&mut drops, &raindrop_shape(), RAINDROP_DENSITY, sample_rate, rng);

    let mut mixer = Mixer::new(num_samples);
    mixer.add_mono(bed, 0.7).add_mono(drops, 0.5);
    mixer.mix_clipped()
}

/// Heavy rain: `clamp(lowpass(white, 0.6) * 0.8 + brown * 0.5 + surge)`.
pub fn rain_heavy(num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    let bed = low_pass(&white_noise(rng, num_samples), 0.6);
    let rumble = brown_noise(rng, num_samples);

    let surge_lfo = Lfo::new(SURGE_PERIOD, sample_rate);
    let surge: Vec<f64> = (0..num_samples)
        .map(|i| SURGE_DEPTH * surge_lfo.bipolar(i))
        .collect();

    let mut mixer = Mixer::new(num_samples);
    mixer
        .add_mono(bed, 0.8)
        .add_mono(rumble, 0.5)
        .add_mono(surge, 1.0);
    mixer.mix_clipped()
}
