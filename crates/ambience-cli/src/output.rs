//! Output layout and file writing.
//!
//! Rendered loops land under `<out_root>/<tier>/<texture>.wav`, one
//! directory per sample-rate tier.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use ambience_audio::{RateTier, Texture, TextureRender};

use crate::commands::json_output::GeneratedFile;

/// Output root used when none is given on the command line.
pub const DEFAULT_OUT_ROOT: &str = "assets/audio";

/// Path of a texture's WAV relative to the output root.
pub fn relative_path(tier: RateTier, texture: Texture) -> PathBuf {
    Path::new(tier.dir_name()).join(format!("{}.wav", texture.name()))
}

/// Creates the directory for every tier under `out_root`.
pub fn prepare_tier_dirs(out_root: &Path) -> Result<()> {
    for tier in RateTier::ALL {
        let dir = out_root.join(tier.dir_name());
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }
    Ok(())
}

/// Writes bytes to `out_root/rel_path`, creating parent directories.
///
/// Returns the full path that was written.
pub fn write_output_bytes(out_root: &Path, rel_path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let output_path = out_root.join(rel_path);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    fs::write(&output_path, bytes)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    Ok(output_path)
}

/// Writes both tiers of a rendered texture, master first.
pub fn write_render(out_root: &Path, render: &TextureRender) -> Result<Vec<GeneratedFile>> {
    RateTier::ALL
        .iter()
        .map(|&tier| {
            let wav = render.tier(tier);
            let path = write_output_bytes(
                out_root,
                &relative_path(tier, render.texture),
                &wav.wav_data,
            )?;
            Ok(GeneratedFile {
                tier: tier.dir_name().to_string(),
                path: path.display().to_string(),
                sample_rate: wav.sample_rate,
                num_samples: wav.num_samples,
                pcm_hash: wav.pcm_hash.clone(),
            })
        })
        .collect()
}
