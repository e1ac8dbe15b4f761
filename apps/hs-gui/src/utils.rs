use hs_core::DEFAULT_SETTINGS_FILE;
use std::path::{Path, PathBuf};

#[cfg(windows)]
const EXECUTABLE_EXTS: &[&str] = &["exe"];
#[cfg(not(windows))]
const EXECUTABLE_EXTS: &[&str] = &[];

/// Starts dialogs next to the current value when it points somewhere real.
fn start_dir(current: &str) -> Option<PathBuf> {
    let path = Path::new(current.trim());
    if path.is_dir() {
        return Some(path.to_path_buf());
    }
    path.parent().filter(|p| p.is_dir()).map(Path::to_path_buf)
}

fn dialog(current: &str) -> rfd::FileDialog {
    let dialog = rfd::FileDialog::new();
    match start_dir(current) {
        Some(dir) => dialog.set_directory(dir),
        None => dialog,
    }
}

pub fn pick_executable(current: &str) -> Option<PathBuf> {
    let dialog = dialog(current);
    if EXECUTABLE_EXTS.is_empty() {
        dialog.pick_file()
    } else {
        dialog.add_filter("Executable", EXECUTABLE_EXTS).pick_file()
    }
}

pub fn pick_folder(current: &str) -> Option<PathBuf> {
    dialog(current).pick_folder()
}

pub fn pick_any_file(current: &str) -> Option<PathBuf> {
    dialog(current).pick_file()
}

pub fn pick_media_file(current: &str) -> Option<PathBuf> {
    dialog(current)
        .add_filter("Media", &["mp4", "mkv", "ts", "m4a", "aac", "srt", "vtt"])
        .add_filter("All files", &["*"])
        .pick_file()
}

pub fn pick_log_file(current: &str) -> Option<PathBuf> {
    dialog(current)
        .add_filter("Log", &["txt", "log"])
        .set_file_name("log.txt")
        .save_file()
}

pub fn pick_settings_to_save() -> Option<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    rfd::FileDialog::new()
        .set_title("Save settings")
        .set_directory(cwd)
        .set_file_name(DEFAULT_SETTINGS_FILE)
        .add_filter("JSON", &["json"])
        .save_file()
}

pub fn pick_settings_to_load() -> Option<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    rfd::FileDialog::new()
        .set_title("Load settings")
        .set_directory(cwd)
        .add_filter("JSON", &["json"])
        .add_filter("All files", &["*"])
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_dir_prefers_existing_locations() {
        let dir = std::env::temp_dir();
        assert_eq!(start_dir(&dir.to_string_lossy()), Some(dir.clone()));

        let inside = dir.join("not-created-yet.json");
        assert_eq!(start_dir(&inside.to_string_lossy()), Some(dir));

        assert_eq!(start_dir(""), None);
        assert_eq!(start_dir("relative-tool"), None);
    }
}
