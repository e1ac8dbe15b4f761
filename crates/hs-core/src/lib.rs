pub mod options;
pub mod persist;
pub mod settings;

pub use options::{DecryptionEngine, HlsMethod, LogLevel, SubFormat, UiLanguage};
pub use persist::{
    last_settings_path, load_from_file, load_last, save_last, save_to_file, SettingsError,
    DEFAULT_SETTINGS_FILE, LAST_SETTINGS_ENV, LAST_SETTINGS_FILE,
};
pub use settings::DownloadSettings;

/// Placeholder texts that mean "leave this flag out".
pub mod placeholder {
    pub const RANGE_ZERO: &str = "00:00:00";
    pub const RECORD_LIMIT: &str = "HH:mm:ss";
    pub const TASK_START_AT: &str = "yyyyMMddHHmmss";
}
