#![cfg(unix)]

use hs_core::DownloadSettings;
use hs_factory::command::{build_command, preflight, resolve_work_dir, CommandLine};
use hs_factory::downloader::{
    process_download, run_async, DownloadJob, DownloadStatus, ExitOutcome,
};
use std::{
    cell::RefCell,
    fs,
    os::unix::fs::PermissionsExt,
    path::Path,
    sync::{atomic::AtomicBool, mpsc},
    time::Duration,
};

fn shell_job(script: &str, work_dir: &Path) -> DownloadJob {
    let mut command = CommandLine::new("/bin/sh");
    command.arg("-c").arg(script);
    DownloadJob {
        command,
        work_dir: work_dir.to_path_buf(),
    }
}

fn collect(job: &DownloadJob) -> (ExitOutcome, Vec<DownloadStatus>) {
    let seen = RefCell::new(Vec::new());
    let stop = AtomicBool::new(false);
    let outcome = process_download(job, &stop, |s| seen.borrow_mut().push(s));
    (outcome, seen.into_inner())
}

fn logs(statuses: &[DownloadStatus]) -> Vec<String> {
    statuses
        .iter()
        .filter_map(|s| match s {
            DownloadStatus::Log(l) => Some(l.clone()),
            _ => None,
        })
        .collect()
}

fn progress(statuses: &[DownloadStatus]) -> Vec<u8> {
    statuses
        .iter()
        .filter_map(|s| match s {
            DownloadStatus::Progress(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn relays_both_pipes_and_parses_progress() {
    let dir = tempfile::tempdir().unwrap();
    let job = shell_job(
        "echo 'Vid 1080p 10.00% 1MB'; echo 'warn: slow 55.5%' 1>&2; printf '\\n\\n'; echo 'Vid 1080p 100.00% 9MB'",
        dir.path(),
    );

    let (outcome, statuses) = collect(&job);
    assert_eq!(outcome, ExitOutcome::Completed);

    assert!(matches!(&statuses[0], DownloadStatus::Log(l) if l.starts_with("Executing: /bin/sh -c")));
    assert!(matches!(&statuses[1], DownloadStatus::CommandReady(c) if c.starts_with("/bin/sh -c")));
    assert_eq!(
        statuses.last(),
        Some(&DownloadStatus::Finished(ExitOutcome::Completed))
    );

    let lines = logs(&statuses);
    assert!(lines.contains(&"Vid 1080p 10.00% 1MB".to_string()));
    assert!(lines.contains(&"warn: slow 55.5%".to_string()));
    assert!(lines.iter().all(|l| !l.is_empty()));

    let mut pcts = progress(&statuses);
    pcts.sort_unstable();
    assert_eq!(pcts, vec![10, 55, 100]);
}

#[test]
fn carriage_returns_split_progress_redraws() {
    let dir = tempfile::tempdir().unwrap();
    let job = shell_job("printf '12%%\\r47%%\\r90%%\\n'", dir.path());

    let (_, statuses) = collect(&job);
    assert_eq!(progress(&statuses), vec![12, 47, 90]);
}

#[test]
fn nonzero_exit_is_a_failure_with_its_code() {
    let dir = tempfile::tempdir().unwrap();
    let (outcome, statuses) = collect(&shell_job("echo bad; exit 3", dir.path()));

    assert_eq!(outcome, ExitOutcome::Failed(3));
    assert_eq!(outcome.code(), 3);
    assert_eq!(
        statuses.iter().filter(|s| matches!(s, DownloadStatus::Finished(_))).count(),
        1
    );
}

#[test]
fn signal_death_reports_no_code() {
    let dir = tempfile::tempdir().unwrap();
    let (outcome, statuses) = collect(&shell_job("echo hi; kill -9 $$", dir.path()));

    assert_eq!(outcome, ExitOutcome::Failed(ExitOutcome::NO_CODE));
    assert_eq!(outcome.code(), -3);
    assert!(logs(&statuses).contains(&"hi".to_string()));
}

#[test]
fn spawn_failure_reports_error_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let job = DownloadJob {
        command: CommandLine::new("/nonexistent/N_m3u8DL-RE"),
        work_dir: dir.path().to_path_buf(),
    };

    let (outcome, statuses) = collect(&job);
    assert!(matches!(outcome, ExitOutcome::Error(_)));
    assert_eq!(outcome.code(), -2);
    assert!(logs(&statuses)
        .iter()
        .any(|l| l.contains("Failed to spawn")));
    assert!(matches!(
        statuses.last(),
        Some(DownloadStatus::Finished(ExitOutcome::Error(_)))
    ));
}

#[test]
fn runs_inside_the_work_dir() {
    let dir = tempfile::tempdir().unwrap();
    let (_, statuses) = collect(&shell_job("pwd", dir.path()));

    let name = dir.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(logs(&statuses).iter().any(|l| l.ends_with(&name)));
}

#[test]
fn invalid_utf8_is_replaced_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (outcome, statuses) = collect(&shell_job("printf '\\377ok\\n'", dir.path()));

    assert_eq!(outcome, ExitOutcome::Completed);
    assert!(logs(&statuses).contains(&"\u{FFFD}ok".to_string()));
}

#[test]
fn stop_kills_a_running_job() {
    let dir = tempfile::tempdir().unwrap();
    let (tx, rx) = mpsc::channel();
    let handle = run_async(shell_job("echo waiting; sleep 30", dir.path()), tx);

    // Wait until the child is demonstrably alive.
    loop {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            DownloadStatus::Log(l) if l == "waiting" => break,
            _ => {}
        }
    }
    handle.stop();
    assert!(handle.is_stopping());

    let finished = loop {
        if let DownloadStatus::Finished(o) = rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            break o;
        }
    };
    assert_eq!(finished, ExitOutcome::Stopped);
    assert_eq!(finished.code(), -1);
}

#[test]
fn settings_drive_a_real_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("fake-dl");
    fs::write(&exe, "#!/bin/sh\necho \"$@\"\necho 'Vid 73.00%'\n").unwrap();
    fs::set_permissions(&exe, fs::Permissions::from_mode(0o755)).unwrap();

    let settings = DownloadSettings {
        executable: exe.to_string_lossy().into_owned(),
        m3u8_url: "https://example.com/master.m3u8".into(),
        headers: "Referer: https://example.com/".into(),
        ..Default::default()
    };
    preflight(&settings).unwrap();

    let job = DownloadJob {
        command: build_command(&settings),
        work_dir: resolve_work_dir(&settings),
    };
    assert_eq!(job.work_dir, dir.path());

    let (outcome, statuses) = collect(&job);
    assert!(outcome.is_success());

    let echoed = logs(&statuses)
        .into_iter()
        .find(|l| l.starts_with("https://example.com/master.m3u8"))
        .expect("arguments echoed");
    assert!(echoed.contains("-H Referer: https://example.com/"));
    assert!(echoed.contains("--thread-count 32"));
    assert_eq!(progress(&statuses), vec![73]);
}
