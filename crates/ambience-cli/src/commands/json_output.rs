//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `generate` and `list`, so scripts
//! can pick up output paths and PCM hashes without scraping console text.

use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Audio backend errors pass their own `AUDIO_XXX` codes through.
pub mod error_codes {
    /// Output directory or file could not be written
    pub const OUTPUT_WRITE: &str = "CLI_001";
    /// Generation error not covered by a more specific code
    pub const GENERATION_ERROR: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "AUDIO_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new JSON error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One WAV file written by `generate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Tier directory name ("master" or "app")
    pub tier: String,
    /// Path the file was written to
    pub path: String,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of samples in the file
    pub num_samples: usize,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// Everything written for one texture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextureOutput {
    /// Texture file stem
    pub name: String,
    /// Files written, master first
    pub files: Vec<GeneratedFile>,
}

/// Output for the `generate --json` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether every texture was written
    pub success: bool,
    /// Output root directory
    pub out_root: String,
    /// Base seed of the render
    pub seed: u32,
    /// Loop length in seconds
    pub duration_seconds: u32,
    /// Textures written, in catalog order
    pub textures: Vec<TextureOutput>,
    /// Errors (if any)
    pub errors: Vec<JsonError>,
    /// Total wall-clock time in milliseconds
    pub elapsed_ms: u64,
}

impl GenerateOutput {
    /// Creates a successful report.
    pub fn success(
        out_root: String,
        seed: u32,
        duration_seconds: u32,
        textures: Vec<TextureOutput>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            success: true,
            out_root,
            seed,
            duration_seconds,
            textures,
            errors: Vec::new(),
            elapsed_ms,
        }
    }

    /// Creates a failed report. Textures written before the failure are kept.
    pub fn failure(
        out_root: String,
        seed: u32,
        duration_seconds: u32,
        textures: Vec<TextureOutput>,
        errors: Vec<JsonError>,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            success: false,
            out_root,
            seed,
            duration_seconds,
            textures,
            errors,
            elapsed_ms,
        }
    }
}

/// One row of the `list --json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Texture file stem
    pub name: String,
    /// Samples in the master file
    pub master_samples: usize,
    /// Samples in the app file
    pub app_samples: usize,
}
