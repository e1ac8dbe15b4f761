use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hs_core::{DownloadSettings, DEFAULT_SETTINGS_FILE};
use hs_factory::{command, downloader};
use std::{path::PathBuf, process::ExitCode};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "HLS Shell")]
#[command(version)]
#[command(about = "Headless front-end for the N_m3u8DL-RE downloader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download using a settings file (or the last session's settings)
    Run {
        #[arg(short, long)]
        settings: Option<PathBuf>,

        #[arg(short, long)]
        url: Option<String>,
    },

    /// Print the command line that `run` would execute
    Generate {
        #[arg(short, long)]
        settings: Option<PathBuf>,

        #[arg(short, long)]
        url: Option<String>,
    },

    /// Write a settings file filled with defaults
    Init {
        #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
        output: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("HS_LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

/// Explicit file, else last session, else defaults; then the URL override.
fn resolve_settings(path: Option<&PathBuf>, url: Option<String>) -> Result<DownloadSettings> {
    let mut settings = match path {
        Some(p) => hs_core::load_from_file(p)?,
        None => hs_core::load_last().unwrap_or_default(),
    };
    if let Some(u) = url {
        settings.m3u8_url = u;
    }
    Ok(settings)
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        // [1] RUN
        Commands::Run { settings, url } => {
            let mut settings = resolve_settings(settings.as_ref(), url)?;
            let outcome = downloader::run_cli(&mut settings)?;

            match hs_core::save_last(&settings) {
                Ok(path) => info!(path = %path.display(), "last settings saved"),
                Err(e) => warn!(error = %e, "could not save last settings"),
            }

            println!("{}", outcome.summary());
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        // [2] GENERATE
        Commands::Generate { settings, url } => {
            let settings = resolve_settings(settings.as_ref(), url)?;
            println!("{}", command::build_command(&settings));
            Ok(ExitCode::SUCCESS)
        }

        // [3] INIT
        Commands::Init { output } => {
            hs_core::save_to_file(&DownloadSettings::default(), &output)
                .with_context(|| format!("Could not write {}", output.display()))?;
            println!("✅ Default settings written to {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
