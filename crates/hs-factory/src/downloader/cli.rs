use super::core::process_download;
use super::types::{DownloadJob, DownloadStatus, ExitOutcome};
use crate::command::{build_command, preflight, resolve_work_dir};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use hs_core::DownloadSettings;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::AtomicBool;

/// Runs one download in the terminal.
///
/// Prompts for the URL when `settings` has none, so the caller sees the
/// value that was actually used afterwards.
pub fn run_cli(settings: &mut DownloadSettings) -> Result<ExitOutcome> {
    if settings.m3u8_url.trim().is_empty() {
        settings.m3u8_url = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter M3U8 URL")
            .interact_text()?;
    }

    preflight(settings)?;

    let job = DownloadJob {
        command: build_command(settings),
        work_dir: resolve_work_dir(settings),
    };

    println!("\n🚀 Starting: {}", job.command.program);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>3}% {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );

    let pb_clone = pb.clone();
    // Ctrl-C takes the child down with us; nothing ever sets this.
    let never = AtomicBool::new(false);

    let outcome = process_download(&job, &never, move |status| match status {
        DownloadStatus::CommandReady(_) => {
            pb_clone.set_message("Downloading...");
        }
        DownloadStatus::Log(line) => {
            pb_clone.println(line);
        }
        DownloadStatus::Progress(pct) => {
            pb_clone.set_position(pct as u64);
        }
        DownloadStatus::Finished(outcome) => {
            if outcome.is_success() {
                pb_clone.set_position(100);
                pb_clone.finish_with_message(outcome.summary());
            } else {
                pb_clone.abandon_with_message(outcome.summary());
            }
        }
    });

    Ok(outcome)
}
