use crate::command::CommandLine;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadJob {
    pub command: CommandLine,
    pub work_dir: PathBuf,
}

/// Events emitted while a job runs, in order.
///
/// Every job ends with exactly one `Finished`.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    CommandReady(String),
    Log(String),
    Progress(u8), // 0 - 100
    Finished(ExitOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    Completed,
    Failed(i32),
    Stopped,
    Error(String),
}

impl ExitOutcome {
    pub const STOPPED_CODE: i32 = -1;
    pub const ERROR_CODE: i32 = -2;
    /// Child ended without an exit code (killed by a signal we did not send).
    pub const NO_CODE: i32 = -3;

    /// Integer form kept for log lines and scripts: 0, the child's code
    /// (`NO_CODE` when it had none), -1 when stopped or -2 on error.
    pub fn code(&self) -> i32 {
        match self {
            ExitOutcome::Completed => 0,
            ExitOutcome::Failed(code) => *code,
            ExitOutcome::Stopped => Self::STOPPED_CODE,
            ExitOutcome::Error(_) => Self::ERROR_CODE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExitOutcome::Completed)
    }

    pub fn summary(&self) -> String {
        match self {
            ExitOutcome::Completed => "✅ Download complete!".into(),
            ExitOutcome::Stopped => "⏹️ Download stopped".into(),
            ExitOutcome::Failed(code) => format!("❌ Download failed, exit code: {}", code),
            ExitOutcome::Error(e) => format!(
                "❌ Download failed, exit code: {} ({})",
                Self::ERROR_CODE,
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_summary_names_its_code() {
        assert_eq!(
            ExitOutcome::Failed(ExitOutcome::NO_CODE).summary(),
            "❌ Download failed, exit code: -3"
        );
        assert_eq!(
            ExitOutcome::Error("spawn failed".into()).summary(),
            "❌ Download failed, exit code: -2 (spawn failed)"
        );
        assert_eq!(ExitOutcome::Stopped.summary(), "⏹️ Download stopped");
    }
}
