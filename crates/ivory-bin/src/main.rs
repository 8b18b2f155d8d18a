// ivory — headless driver for the piano input core.
//
// Plays song notation to stdout and replays scripted input sessions.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ivory_config::PianoConfig;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ivory", about = "Piano input and song notation driver")]
struct Args {
    /// Path to piano config JSON file (defaults are used if missing).
    #[arg(long, global = true, default_value = "ivory.json")]
    config: PathBuf,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the notes of each step of a song file.
    Play {
        /// Song notation file.
        song: PathBuf,
    },
    /// Drive an input session from a JSON input script.
    Replay {
        /// JSON array of input steps.
        script: PathBuf,
    },
    /// Write the default configuration to a file.
    InitConfig {
        /// Destination path.
        path: PathBuf,
    },
}

fn load_config(path: &Path) -> Result<PianoConfig> {
    if path.exists() {
        info!("Loading config from {}", path.display());
        PianoConfig::read(path)
    } else {
        info!("Config {} not found, using defaults", path.display());
        Ok(PianoConfig::default())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Play { song } => {
            let config = load_config(&args.config)?;
            let reader = ivory_song::open_song(&song)?;
            commands::play(&config, reader, &mut out)?;
        }
        Command::Replay { script } => {
            let config = load_config(&args.config)?;
            let json = std::fs::read_to_string(&script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let summary = commands::replay(&config, &json, &mut out)?;
            info!(
                ticks = summary.ticks,
                presses = summary.presses,
                mode_changes = summary.mode_changes,
                exited = summary.exited,
                "replay finished"
            );
        }
        Command::InitConfig { path } => {
            PianoConfig::default().write(&path)?;
            info!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}
