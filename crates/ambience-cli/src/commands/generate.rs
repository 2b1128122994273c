//! Generate command implementation
//!
//! Renders every texture in the catalog and writes a master-rate and an
//! app-rate WAV for each one.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use ambience_audio::{
    render_catalog_parallel, render_texture, AudioError, RateTier, RenderSettings, Texture,
};

use super::json_output::{error_codes, GenerateOutput, JsonError, TextureOutput};
use crate::output::{prepare_tier_dirs, write_render, DEFAULT_OUT_ROOT};

/// Number of hash characters shown next to each generated texture.
const SHORT_HASH_LEN: usize = 12;

/// Run the generate command
///
/// # Arguments
/// * `out_root` - Output root directory (default: assets/audio)
/// * `json` - Whether to print a JSON report instead of colored output
/// * `parallel` - Whether to render textures concurrently
///
/// # Returns
/// Exit code: 0 success, 1 if any texture could not be written
pub fn run(out_root: Option<&str>, json: bool, parallel: bool) -> Result<ExitCode> {
    let out_root = Path::new(out_root.unwrap_or(DEFAULT_OUT_ROOT));
    run_with_settings(out_root, &RenderSettings::default(), json, parallel)
}

/// Run the generate command with explicit render settings.
pub fn run_with_settings(
    out_root: &Path,
    settings: &RenderSettings,
    json: bool,
    parallel: bool,
) -> Result<ExitCode> {
    if json {
        run_json(out_root, settings, parallel)
    } else {
        run_human(out_root, settings, parallel)
    }
}

/// Renders and writes the whole catalog.
///
/// `on_written` is called once per texture, in catalog order, after both of
/// its files are on disk. In parallel mode every texture is rendered before
/// the first file is written.
pub fn generate_catalog(
    out_root: &Path,
    settings: &RenderSettings,
    parallel: bool,
    mut on_written: impl FnMut(TextureOutput),
) -> Result<()> {
    settings.validate()?;
    prepare_tier_dirs(out_root)?;

    if parallel {
        let renders = render_catalog_parallel(settings)?;
        for render in &renders {
            let files = write_render(out_root, render)?;
            on_written(TextureOutput {
                name: render.texture.name().to_string(),
                files,
            });
        }
    } else {
        for texture in Texture::ALL {
            let render = render_texture(texture, settings)
                .with_context(|| format!("Failed to render {}", texture))?;
            let files = write_render(out_root, &render)?;
            on_written(TextureOutput {
                name: texture.name().to_string(),
                files,
            });
        }
    }

    Ok(())
}

fn run_human(out_root: &Path, settings: &RenderSettings, parallel: bool) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{}", "======================================".cyan());
    println!("{}", "  Ambience Loop Generator".cyan());
    println!("{}", "======================================".cyan());
    println!();
    println!("{} {}", "Output directory:".blue().bold(), out_root.display());
    println!(
        "{} {}s",
        "Duration:".blue().bold(),
        settings.duration_seconds
    );
    println!(
        "{} {} Hz ({}), {} Hz ({})",
        "Sample rates:".blue().bold(),
        settings.master_rate,
        RateTier::Master.dir_name(),
        settings.app_rate,
        RateTier::App.dir_name()
    );
    println!("{} {}", "Seed:".blue().bold(), settings.base_seed);
    if parallel {
        println!("{} parallel", "Mode:".blue().bold());
    }
    println!();

    let mut textures = 0usize;
    let mut files = 0usize;
    generate_catalog(out_root, settings, parallel, |texture| {
        let hash = texture
            .files
            .first()
            .map(|f| short_hash(&f.pcm_hash))
            .unwrap_or_default();
        println!(
            "  {} {} {}",
            "Generated".green().bold(),
            texture.name,
            format!("[{}]", hash).dimmed()
        );
        textures += 1;
        files += texture.files.len();
    })?;

    println!();
    println!(
        "{} {} textures ({} files) in {:.2}s",
        "Done:".green().bold(),
        textures,
        files,
        start.elapsed().as_secs_f64()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(out_root: &Path, settings: &RenderSettings, parallel: bool) -> Result<ExitCode> {
    let (output, code) = generate_report(out_root, settings, parallel);

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize JSON report")?;
    println!("{}", json);
    Ok(code)
}

/// Runs the catalog and builds the `--json` report with its exit code.
///
/// Failures end up inside the report rather than as an `Err`.
pub fn generate_report(
    out_root: &Path,
    settings: &RenderSettings,
    parallel: bool,
) -> (GenerateOutput, ExitCode) {
    let start = Instant::now();
    let out_root_str = out_root.display().to_string();

    let mut written = Vec::new();
    let result = generate_catalog(out_root, settings, parallel, |texture| written.push(texture));
    let elapsed_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(()) => (
            GenerateOutput::success(
                out_root_str,
                settings.base_seed,
                settings.duration_seconds,
                written,
                elapsed_ms,
            ),
            ExitCode::SUCCESS,
        ),
        Err(e) => (
            GenerateOutput::failure(
                out_root_str,
                settings.base_seed,
                settings.duration_seconds,
                written,
                vec![JsonError::new(error_code(&e), format!("{:#}", e))],
                elapsed_ms,
            ),
            ExitCode::from(1),
        ),
    }
}

/// Maps an error to its stable report code.
fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(audio) = err.downcast_ref::<AudioError>() {
        audio.code()
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        error_codes::OUTPUT_WRITE
    } else {
        error_codes::GENERATION_ERROR
    }
}

fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}
