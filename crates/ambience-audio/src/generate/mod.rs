//! Main entry point for rendering the texture catalog.
//!
//! Each texture is synthesized once at the master rate with its own RNG,
//! decimated to the app rate, and encoded to WAV for both tiers.

mod settings;


use rayon::prelude::*;

use crate::error::AudioResult;
use crate::resample::downsample;
use crate::rng::create_texture_rng;
use crate::synthesis::Synthesizer;
use crate::texture::Texture;
use crate::wav::WavResult;

pub use settings::{RateTier, RenderSettings};

/// Rendered outputs for one texture.
#[derive(Debug, Clone)]
pub struct TextureRender {
    /// The texture that was rendered.
    pub texture: Texture,
    /// Master-rate WAV.
    pub master: WavResult,
    /// App-rate WAV.
    pub app: WavResult,
}

impl TextureRender {
    /// Returns the WAV for a tier.
    pub fn tier(&self, tier: RateTier) -> &WavResult {
        match tier {
            RateTier::Master => &self.master,
            RateTier::App => &self.app,
        }
    }
}

/// Synthesizes a texture at the master rate.
///
/// The result is clamped to [-1.0, 1.0] and has
/// `settings.master_num_samples()` samples.
pub fn synthesize_texture(texture: Texture, settings: &RenderSettings) -> AudioResult<Vec<f64>> {
    settings.validate()?;

    let mut rng = create_texture_rng(settings.base_seed, texture.index());
    Ok(texture.synthesize(
        settings.master_num_samples(),
        settings.master_rate as f64,
        &mut rng,
    ))
}

/// Synthesizes a texture and returns the samples for both tiers.
pub fn synthesize_tiers(
    texture: Texture,
    settings: &RenderSettings,
) -> AudioResult<(Vec<f64>, Vec<f64>)> {
    let master = synthesize_texture(texture, settings)?;
    let app = downsample(&master, settings.decimation_factor());
    Ok((master, app))
}

/// Renders one texture to WAV at both tiers.
pub fn render_texture(texture: Texture, settings: &RenderSettings) -> AudioResult<TextureRender> {
    let (master, app) = synthesize_tiers(texture, settings)?;

    Ok(TextureRender {
        texture,
        master: WavResult::from_mono(&master, settings.master_rate),
        app: WavResult::from_mono(&app, settings.app_rate),
    })
}

/// Renders every texture, one after another, in catalog order.
pub fn render_catalog(settings: &RenderSettings) -> AudioResult<Vec<TextureRender>> {
    Texture::ALL
        .iter()
        .map(|&texture| render_texture(texture, settings))
        .collect()
}

/// Renders every texture concurrently.
///
/// Every texture owns an independently seeded RNG, so the output matches
/// [`render_catalog`] exactly. Results come back in catalog order.
pub fn render_catalog_parallel(settings: &RenderSettings) -> AudioResult<Vec<TextureRender>> {
    settings.validate()?;

    Texture::ALL
        .par_iter()
        .map(|&texture| render_texture(texture, settings))
        .collect()
}
