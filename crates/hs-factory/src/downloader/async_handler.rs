use super::core::process_download;
use super::types::{DownloadJob, DownloadStatus};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::Sender,
    Arc,
};
use std::thread::{self, JoinHandle};
use tracing::warn;

/// Control side of a job started with [`run_async`].
///
/// Dropping the handle leaves the job running.
pub struct DownloadHandle {
    stop: Arc<AtomicBool>,
    worker: JoinHandle<()>,
}

impl DownloadHandle {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_stopping(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Blocks until the worker has emitted its final status.
    pub fn join(self) {
        if self.worker.join().is_err() {
            warn!("download worker panicked");
        }
    }
}

pub fn run_async(job: DownloadJob, sender: Sender<DownloadStatus>) -> DownloadHandle {
    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);

    // A background thread keeps the GUI frame loop free
    let worker = thread::spawn(move || {
        process_download(&job, &stop_flag, |status| {
            let _ = sender.send(status);
        });
    });

    DownloadHandle { stop, worker }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::command::CommandLine;
    use std::sync::mpsc;

    #[test]
    fn join_waits_for_the_final_status() {
        let mut command = CommandLine::new("/bin/sh");
        command.arg("-c").arg("exit 0");
        let job = DownloadJob {
            command,
            work_dir: std::env::temp_dir(),
        };

        let (tx, rx) = mpsc::channel();
        run_async(job, tx).join();

        let last = rx.try_iter().last();
        assert!(matches!(last, Some(DownloadStatus::Finished(_))));
    }
}
