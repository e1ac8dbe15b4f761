use crate::settings::DownloadSettings;
use serde::Serialize;
use serde_json::{Map, Value};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_SETTINGS_FILE: &str = "m3u8_downloader_settings.json";
pub const LAST_SETTINGS_FILE: &str = "m3u8_downloader_last_settings.json";
pub const LAST_SETTINGS_ENV: &str = "HS_LAST_SETTINGS";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot serialize settings for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("home directory could not be determined")]
    NoHomeDir,
}

pub fn load_from_file(path: &Path) -> Result<DownloadSettings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let parse_err = |source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    };

    // Only an object is a settings file; derived struct impls also take arrays.
    let fields: Map<String, Value> = serde_json::from_str(&raw).map_err(parse_err)?;
    let mut settings: DownloadSettings =
        serde_json::from_value(Value::Object(fields)).map_err(parse_err)?;
    settings.normalize();

    debug!(path = %path.display(), "settings loaded");
    Ok(settings)
}

/// Writes `settings` as 4-space indented JSON, keeping non-ASCII text as-is.
pub fn save_to_file(settings: &DownloadSettings, path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    settings
        .serialize(&mut ser)
        .map_err(|source| SettingsError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, buf).map_err(io_err)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn last_settings_path() -> Result<PathBuf, SettingsError> {
    if let Some(custom) = env::var_os(LAST_SETTINGS_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(custom));
    }
    dirs::home_dir()
        .map(|home| home.join(LAST_SETTINGS_FILE))
        .ok_or(SettingsError::NoHomeDir)
}

/// Restores the settings of the previous session.
///
/// Absence is normal on first start; a broken file is logged and skipped.
pub fn load_last() -> Option<DownloadSettings> {
    let path = match last_settings_path() {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "no location for last settings");
            return None;
        }
    };

    if !path.exists() {
        return None;
    }

    match load_from_file(&path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(error = %e, "ignoring last settings");
            None
        }
    }
}

pub fn save_last(settings: &DownloadSettings) -> Result<PathBuf, SettingsError> {
    let path = last_settings_path()?;
    save_to_file(settings, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HlsMethod;

    #[test]
    fn file_roundtrip_keeps_unicode_and_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(DEFAULT_SETTINGS_FILE);

        let settings = DownloadSettings {
            title: "纪录片 第一集".into(),
            custom_hls_method: HlsMethod::Cenc,
            ..Default::default()
        };
        save_to_file(&settings, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("纪录片 第一集"));
        assert!(raw.contains("\n    \"executable\""));

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_from_file(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn array_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("positional.json");

        fs::write(&path, r#"["/usr/bin/rm", "/"]"#).unwrap();
        assert!(matches!(
            load_from_file(&path),
            Err(SettingsError::Parse { .. })
        ));

        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load_from_file(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn unknown_option_token_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{ "m3u8_url": "https://example.com/a.m3u8", "sub_format": "ASS" }"#,
        )
        .unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn write_side_errors_do_not_claim_a_bad_file() {
        let source = serde_json::from_str::<u8>("x").unwrap_err();
        let err = SettingsError::Serialize {
            path: PathBuf::from("out.json"),
            source,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("cannot serialize settings for out.json"));
        assert!(!msg.contains("invalid settings file"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn last_settings_follow_the_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("last.json");
        env::set_var(LAST_SETTINGS_ENV, &path);

        assert_eq!(last_settings_path().unwrap(), path);
        assert!(load_last().is_none());

        let settings = DownloadSettings {
            m3u8_url: "https://cdn.example.com/live.m3u8".into(),
            always_on_top: true,
            ..Default::default()
        };
        save_last(&settings).unwrap();
        assert_eq!(load_last(), Some(settings));

        fs::write(&path, "[]").unwrap();
        assert!(load_last().is_none());

        env::remove_var(LAST_SETTINGS_ENV);
    }
}
