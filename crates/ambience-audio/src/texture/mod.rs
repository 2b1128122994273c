//! The fixed catalog of ambient loop textures.
//!
//! Each texture is a pure function of its length, the sample rate and its own
//! RNG. The set is closed, so it is an enum rather than a name lookup table.

pub mod fireplace;
pub mod forest;
pub mod ocean;
pub mod rain;

use std::fmt;
use std::str::FromStr;

use rand_pcg::Pcg32;

use crate::synthesis::noise::NoiseColor;
use crate::synthesis::Synthesizer;

/// One entry of the texture catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// Plain white noise.
    WhiteNoise,
    /// Plain pink noise.
    PinkNoise,
    /// Plain brown noise.
    BrownNoise,
    /// Soft rain with sparse drops.
    RainLight,
    /// Dense rain over a low rumble.
    RainHeavy,
    /// Forest ambience with bird chirps.
    ForestBirds,
    /// Filtered noise under slow swells.
    OceanWaves,
    /// Brown-noise fire with crackles.
    FireplaceCozy,
}

impl Texture {
    /// All textures in catalog order.
    pub const ALL: [Texture; 8] = [
        Texture::WhiteNoise,
        Texture::PinkNoise,
        Texture::BrownNoise,
        Texture::RainLight,
        Texture::RainHeavy,
        Texture::ForestBirds,
        Texture::OceanWaves,
        Texture::FireplaceCozy,
    ];

    /// File stem used for this texture's outputs.
    pub fn name(&self) -> &'static str {
        match self {
            Texture::WhiteNoise => "white_noise_loop",
            Texture::PinkNoise => "pink_noise_loop",
            Texture::BrownNoise => "brown_noise_loop",
            Texture::RainLight => "rain_light_loop",
            Texture::RainHeavy => "rain_heavy_loop",
            Texture::ForestBirds => "forest_birds_loop",
            Texture::OceanWaves => "ocean_waves_loop",
            Texture::FireplaceCozy => "fireplace_cozy_loop",
        }
    }

    /// Position in the catalog; also the seed-derivation index.
    pub fn index(&self) -> u32 {
        match self {
            Texture::WhiteNoise => 0,
            Texture::PinkNoise => 1,
            Texture::BrownNoise => 2,
            Texture::RainLight => 3,
            Texture::RainHeavy => 4,
            Texture::ForestBirds => 5,
            Texture::OceanWaves => 6,
            Texture::FireplaceCozy => 7,
        }
    }

    /// Looks a texture up by its file stem.
    pub fn from_name(name: &str) -> Option<Texture> {
        Texture::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Texture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Texture::from_name(s).ok_or_else(|| format!("unknown texture: {}", s))
    }
}

impl Synthesizer for Texture {
    fn synthesize(&self, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
        match self {
            Texture::WhiteNoise => NoiseColor::White.synthesize(num_samples, sample_rate, rng),
            Texture::PinkNoise => NoiseColor::Pink.synthesize(num_samples, sample_rate, rng),
            Texture::BrownNoise => NoiseColor::Brown.synthesize(num_samples, sample_rate, rng),
            Texture::RainLight => rain::rain_light(num_samples, sample_rate, rng),
            Texture::RainHeavy => rain::rain_heavy(num_samples, sample_rate, rng),
            Texture::ForestBirds => forest::forest_birds(num_samples, sample_rate, rng),
            Texture::OceanWaves => ocean::ocean_waves(num_samples, sample_rate, rng),
            Texture::FireplaceCozy => fireplace::fireplace_cozy(num_samples, sample_rate, rng),
        }
    }
}
