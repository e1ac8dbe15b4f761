use super::types::{DownloadJob, DownloadStatus, ExitOutcome};
use super::utils::extract_percentage;
use anyhow::{Context, Result};
use std::{
    io::{BufReader, Read},
    process::{Child, Command, ExitStatus, Stdio},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvTimeoutError, Sender},
    },
    thread,
    time::Duration,
};
use tracing::{debug, info, warn};

const POLL: Duration = Duration::from_millis(100);

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Runs `job` to completion, relaying its console output through `callback`.
///
/// Stdout and stderr are merged into one line stream. Setting `stop` kills
/// the child at the next poll. Exactly one [`DownloadStatus::Finished`] is
/// emitted, and its outcome is returned as well.
pub fn process_download<F>(job: &DownloadJob, stop: &AtomicBool, callback: F) -> ExitOutcome
where
    F: Fn(DownloadStatus),
{
    let rendered = job.command.to_string();
    callback(DownloadStatus::Log(format!("Executing: {}", rendered)));
    callback(DownloadStatus::CommandReady(rendered));

    let outcome = match supervise(job, stop, &callback) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %format!("{:#}", e), "download aborted");
            callback(DownloadStatus::Log(format!("Download thread error: {:#}", e)));
            ExitOutcome::Error(format!("{:#}", e))
        }
    };

    info!(code = outcome.code(), "download finished");
    callback(DownloadStatus::Finished(outcome.clone()));
    outcome
}

fn supervise<F>(job: &DownloadJob, stop: &AtomicBool, callback: &F) -> Result<ExitOutcome>
where
    F: Fn(DownloadStatus),
{
    let mut cmd = Command::new(&job.command.program);
    cmd.args(&job.command.args)
        .current_dir(&job.work_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    #[cfg(target_os = "windows")]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    let mut child = cmd
        .spawn()
        .with_context(|| format!("Failed to spawn '{}'", job.command.program))?;
    info!(pid = child.id(), work_dir = %job.work_dir.display(), "downloader started");

    let (tx, rx) = mpsc::channel::<String>();
    if let Some(stdout) = child.stdout.take() {
        spawn_line_reader(stdout, tx.clone());
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_line_reader(stderr, tx.clone());
    }
    // Readers hold the only senders; the channel closes when both pipes do.
    drop(tx);

    loop {
        if stop.load(Ordering::SeqCst) {
            return terminate(&mut child);
        }
        match rx.recv_timeout(POLL) {
            Ok(line) => relay_line(&line, callback),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Output is drained; the process may still be shutting down.
    loop {
        if stop.load(Ordering::SeqCst) {
            return terminate(&mut child);
        }
        if let Some(status) = child.try_wait().context("Failed to poll downloader")? {
            return Ok(outcome_from_status(status));
        }
        thread::sleep(POLL);
    }
}

fn terminate(child: &mut Child) -> Result<ExitOutcome> {
    info!(pid = child.id(), "stopping downloader");
    // Already exited is fine; reaping below covers it.
    let _ = child.kill();
    child.wait().context("Failed to reap stopped downloader")?;
    Ok(ExitOutcome::Stopped)
}

fn relay_line<F>(raw: &str, callback: &F)
where
    F: Fn(DownloadStatus),
{
    let line = raw.trim();
    if line.is_empty() {
        return;
    }
    callback(DownloadStatus::Log(line.to_string()));
    if let Some(pct) = extract_percentage(line) {
        callback(DownloadStatus::Progress(pct));
    }
}

fn outcome_from_status(status: ExitStatus) -> ExitOutcome {
    match status.code() {
        Some(0) => ExitOutcome::Completed,
        Some(code) => ExitOutcome::Failed(code),
        None => ExitOutcome::Failed(ExitOutcome::NO_CODE),
    }
}

/// Forwards `pipe` line by line, splitting on `\r` as well as `\n` so
/// in-place progress redraws arrive as separate lines. Invalid UTF-8 is
/// replaced, never fatal.
fn spawn_line_reader<R>(pipe: R, tx: Sender<String>)
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(pipe);
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!(error = %e, "pipe read failed");
                    break;
                }
            };

            for &byte in &chunk[..n] {
                if byte == b'\n' || byte == b'\r' {
                    if !buffer.is_empty() {
                        let line = String::from_utf8_lossy(&buffer).into_owned();
                        buffer.clear();
                        if tx.send(line).is_err() {
                            return;
                        }
                    }
                } else {
                    buffer.push(byte);
                }
            }
        }

        if !buffer.is_empty() {
            let _ = tx.send(String::from_utf8_lossy(&buffer).into_owned());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_map_to_outcomes() {
        assert_eq!(ExitOutcome::Completed.code(), 0);
        assert_eq!(ExitOutcome::Stopped.code(), -1);
        assert_eq!(ExitOutcome::Error("boom".into()).code(), -2);
        assert_eq!(ExitOutcome::Failed(3).code(), 3);
    }

    #[test]
    fn blank_lines_are_not_relayed() {
        let seen = std::cell::RefCell::new(Vec::new());
        relay_line("   \t ", &|s| seen.borrow_mut().push(s));
        assert!(seen.borrow().is_empty());

        relay_line("  Vid 10.5% 1MB ", &|s| seen.borrow_mut().push(s));
        assert_eq!(
            *seen.borrow(),
            vec![
                DownloadStatus::Log("Vid 10.5% 1MB".into()),
                DownloadStatus::Progress(10),
            ]
        );
    }
}
