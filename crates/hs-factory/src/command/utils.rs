use super::types::PreflightError;
use hs_core::{placeholder, DownloadSettings};
use std::path::{Path, PathBuf};

/// Splits the `;`-separated header field into individual `Name: Value` entries.
pub fn split_headers(raw: &str) -> Vec<&str> {
    raw.split(';')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect()
}

/// `start-end` for `--custom-range`, or `None` when both ends are zero.
pub fn custom_range(start: &str, end: &str) -> Option<String> {
    if start == placeholder::RANGE_ZERO && end == placeholder::RANGE_ZERO {
        return None;
    }
    Some(format!("{}-{}", start, end))
}

/// True when a templated field still shows its hint text (or was emptied).
pub fn is_unset(value: &str, hint: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == hint
}

pub fn preflight(settings: &DownloadSettings) -> Result<(), PreflightError> {
    let exe = settings.executable.trim();
    let found = !exe.is_empty() && (Path::new(exe).is_file() || which::which(exe).is_ok());
    if !found {
        return Err(PreflightError::MissingExecutable(exe.to_string()));
    }
    if settings.m3u8_url.trim().is_empty() {
        return Err(PreflightError::MissingUrl);
    }
    Ok(())
}

/// The work directory field, else the folder holding the executable.
pub fn resolve_work_dir(settings: &DownloadSettings) -> PathBuf {
    if !settings.work_dir.trim().is_empty() {
        return PathBuf::from(settings.work_dir.trim());
    }
    Path::new(settings.executable.trim())
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_empty_pieces_dropped() {
        assert_eq!(
            split_headers(" Cookie: a=1 ;; Referer: https://x.y/ ; "),
            vec!["Cookie: a=1", "Referer: https://x.y/"]
        );
        assert!(split_headers("  ").is_empty());
    }

    #[test]
    fn range_only_when_an_end_moves() {
        assert_eq!(custom_range("00:00:00", "00:00:00"), None);
        assert_eq!(
            custom_range("00:00:00", "00:10:00").as_deref(),
            Some("00:00:00-00:10:00")
        );
        assert_eq!(
            custom_range("00:01:30", "00:00:00").as_deref(),
            Some("00:01:30-00:00:00")
        );
    }

    #[test]
    fn placeholders_and_blanks_are_unset() {
        assert!(is_unset("HH:mm:ss", placeholder::RECORD_LIMIT));
        assert!(is_unset("   ", placeholder::RECORD_LIMIT));
        assert!(!is_unset("01:00:00", placeholder::RECORD_LIMIT));
    }

    #[test]
    fn preflight_rejects_missing_pieces() {
        let mut settings = DownloadSettings {
            executable: "/definitely/not/here/N_m3u8DL-RE".into(),
            m3u8_url: "https://example.com/index.m3u8".into(),
            ..Default::default()
        };
        assert!(matches!(
            preflight(&settings),
            Err(PreflightError::MissingExecutable(_))
        ));

        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("fake-dl");
        std::fs::write(&exe, b"").unwrap();
        settings.executable = exe.to_string_lossy().into_owned();
        assert_eq!(preflight(&settings), Ok(()));

        settings.m3u8_url = "  ".into();
        assert_eq!(preflight(&settings), Err(PreflightError::MissingUrl));
    }

    #[test]
    fn work_dir_falls_back_to_executable_folder() {
        let mut settings = DownloadSettings {
            executable: "/opt/tools/N_m3u8DL-RE".into(),
            ..Default::default()
        };
        assert_eq!(resolve_work_dir(&settings), PathBuf::from("/opt/tools"));

        settings.executable = "N_m3u8DL-RE".into();
        assert_eq!(resolve_work_dir(&settings), PathBuf::from("."));

        settings.work_dir = "/srv/media".into();
        assert_eq!(resolve_work_dir(&settings), PathBuf::from("/srv/media"));
    }
}
