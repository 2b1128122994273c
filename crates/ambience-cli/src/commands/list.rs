//! List command implementation
//!
//! Prints the texture catalog with the sample count of each tier.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use ambience_audio::{RateTier, RenderSettings, Texture};

use super::json_output::CatalogEntry;

/// Run the list command
///
/// # Arguments
/// * `json` - Whether to print the catalog as JSON
pub fn run(json: bool) -> Result<ExitCode> {
    let entries = catalog_entries(&RenderSettings::default());

    if json {
        let json = serde_json::to_string_pretty(&entries).context("Failed to serialize catalog")?;
        println!("{}", json);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{:<24} {:>10} {:>10}",
        "Texture".bold(),
        RateTier::Master.dir_name().bold(),
        RateTier::App.dir_name().bold()
    );
    for entry in &entries {
        println!(
            "{:<24} {:>10} {:>10}",
            entry.name, entry.master_samples, entry.app_samples
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Builds one entry per texture, in catalog order.
pub fn catalog_entries(settings: &RenderSettings) -> Vec<CatalogEntry> {
    Texture::ALL
        .iter()
        .map(|texture| CatalogEntry {
            name: texture.name().to_string(),
            master_samples: settings.num_samples(RateTier::Master),
            app_samples: settings.num_samples(RateTier::App),
        })
        .collect()
}
