//! User settings read from `settings.json` in the platform config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use dioxus::logger::tracing::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeError;
use time::UtcOffset;

use crate::domain::DisplayZone;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Shipster";
const APP_NAME: &str = "Shipster";

/// Overrides `api_url` from the settings file when set.
pub const API_URL_ENV: &str = "SHIPSTER_API_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Load board endpoint. Bundled sample data is used when absent.
    #[serde(default)]
    pub api_url: Option<String>,
    /// IANA zone name for displayed times, e.g. `America/Chicago`. Host zone otherwise.
    #[serde(default)]
    pub time_zone: Option<String>,
}

impl Settings {
    /// Settings file merged with environment overrides.
    pub fn load() -> Self {
        let mut settings = match settings_file() {
            Some(path) => match load_from(&path) {
                Ok(Some(settings)) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Ok(None) => Settings::default(),
                Err(err) => {
                    warn!("Ignoring unreadable settings at {}: {err}", path.display());
                    Settings::default()
                }
            },
            None => Settings::default(),
        };
        settings.apply_env(std::env::var(API_URL_ENV).ok());
        settings
    }

    fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
            self.api_url = Some(url);
        }
    }

    /// Configured zone, else the host zone, else a fixed `host_offset`.
    pub fn display_zone(&self, host_offset: UtcOffset) -> DisplayZone {
        if let Some(name) = self.time_zone.as_deref() {
            match DisplayZone::named(name) {
                Some(zone) => return zone,
                None => warn!("Unknown time zone {name:?} in settings, using the host zone"),
            }
        }
        DisplayZone::system().unwrap_or_else(|| {
            warn!("Host time zone not recognised, showing times at fixed offset {host_offset}");
            DisplayZone::Fixed(host_offset)
        })
    }
}

fn settings_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
}

/// `Ok(None)` when the file does not exist.
pub fn load_from(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::offset;

    fn save_to(path: &Path, settings: &Settings) {
        fs::create_dir_all(path.parent().expect("parent dir")).expect("mkdir");
        let json = serde_json::to_string_pretty(settings).expect("serialize");
        fs::write(path, json).expect("write settings");
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("shipster-settings-{}-{name}", std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn missing_file_is_none() {
        let path = scratch_path("missing");
        assert!(load_from(&path).expect("no io error").is_none());
    }

    #[test]
    fn saved_settings_load_back() {
        let path = scratch_path("saved");
        let settings = Settings {
            api_url: Some("https://loads.example.com/v1/loads".into()),
            time_zone: Some("America/Chicago".into()),
        };
        save_to(&path, &settings);
        assert_eq!(load_from(&path).expect("read settings"), Some(settings));
        let _ = fs::remove_dir_all(path.parent().expect("parent dir"));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let path = scratch_path("partial");
        fs::create_dir_all(path.parent().expect("parent dir")).expect("mkdir");
        fs::write(&path, r#"{ "time_zone": "Europe/Paris" }"#).expect("write");
        let settings = load_from(&path).expect("read").expect("present");
        assert_eq!(settings.api_url, None);
        assert_eq!(settings.time_zone.as_deref(), Some("Europe/Paris"));
        let _ = fs::remove_dir_all(path.parent().expect("parent dir"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().expect("parent dir")).expect("mkdir");
        fs::write(&path, "{ api_url").expect("write");
        assert!(matches!(load_from(&path), Err(SettingsError::Serde(_))));
        let _ = fs::remove_dir_all(path.parent().expect("parent dir"));
    }

    #[test]
    fn env_override_wins_over_file() {
        let mut settings = Settings {
            api_url: Some("https://file.example.com".into()),
            time_zone: None,
        };
        settings.apply_env(Some("  ".into()));
        assert_eq!(settings.api_url.as_deref(), Some("https://file.example.com"));
        settings.apply_env(Some("https://env.example.com".into()));
        assert_eq!(settings.api_url.as_deref(), Some("https://env.example.com"));
    }

    #[test]
    fn display_zone_prefers_configured_name() {
        let settings = Settings {
            api_url: None,
            time_zone: Some("Asia/Kolkata".into()),
        };
        assert_eq!(
            settings.display_zone(offset!(+2)),
            DisplayZone::Named(chrono_tz::Asia::Kolkata)
        );
    }

    #[test]
    fn unknown_zone_name_falls_back_to_host() {
        let settings = Settings {
            api_url: None,
            time_zone: Some("Nowhere/Special".into()),
        };
        let expected = DisplayZone::system().unwrap_or(DisplayZone::Fixed(offset!(+2)));
        assert_eq!(settings.display_zone(offset!(+2)), expected);
    }
}
