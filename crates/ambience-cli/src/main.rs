//! Ambience CLI - Command-line interface for rendering ambient loops
//!
//! Running `ambience` with no arguments renders the full catalog into
//! `assets/audio/{master,app}`.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use ambience_cli::commands;

/// Ambience - Procedural Ambient Loop Generator
#[derive(Parser)]
#[command(name = "ambience")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every texture to WAV at both sample-rate tiers (default)
    Generate(GenerateArgs),

    /// List the texture catalog with per-tier sample counts
    List {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Output root directory (default: assets/audio)
    #[arg(short, long)]
    out_root: Option<String>,

    /// Output a machine-readable JSON report (no colored output)
    #[arg(long)]
    json: bool,

    /// Render textures concurrently
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => {
            commands::generate::run(args.out_root.as_deref(), args.json, args.parallel)
        }
        Commands::List { json } => commands::list::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}
