//! Settings store for the countdown title and target date
//!
//! The settings document is a flat JSON object with two recognized keys:
//! `title` (string) and `target_date` (`YYYY-MM-DD`). Unknown keys are
//! ignored and each recognized key is recovered independently, so a
//! malformed date never costs the user their title.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::{countdown, format, settings};

/// Date used when nothing valid is persisted
pub const FALLBACK_DATE: NaiveDate = {
    let (year, month, day) = countdown::FALLBACK_DATE;
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("fallback date must be a valid calendar day"),
    }
};

/// The countdown record: what to display and when it ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownConfig {
    pub title: String,
    pub target_date: NaiveDate,
}

/// Fields recovered from the settings file; `None` means absent or unusable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedSettings {
    pub title: Option<String>,
    pub target_date: Option<NaiveDate>,
}

/// Initial configuration plus whether the user must be asked for one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub config: CountdownConfig,
    pub needs_setup: bool,
    /// False when the title came from the default rather than the file
    pub has_title: bool,
}

/// On-disk shape of the settings document
#[derive(Debug, Serialize)]
struct SettingsDocument<'a> {
    title: &'a str,
    target_date: String,
}

/// Normalize a user- or file-supplied title; blank becomes the default
pub fn normalize_title(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        countdown::DEFAULT_TITLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a stored `YYYY-MM-DD` calendar day.
/// Surrounding whitespace is rejected; single-digit month or day is accepted.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.trim() != raw {
        return None;
    }
    NaiveDate::parse_from_str(raw, format::STORED_DATE).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(format::STORED_DATE).to_string()
}

impl CountdownConfig {
    pub fn new(title: &str, target_date: NaiveDate) -> Self {
        Self {
            title: normalize_title(title),
            target_date,
        }
    }

    /// Fill absent fields with defaults.
    ///
    /// Setup is required when either field is missing. A target date in the
    /// past is valid and does not trigger setup.
    pub fn resolve(loaded: LoadedSettings) -> StartupConfig {
        let has_title = loaded.title.is_some();
        let needs_setup = !has_title || loaded.target_date.is_none();
        let config = CountdownConfig::new(
            loaded.title.as_deref().unwrap_or_default(),
            loaded.target_date.unwrap_or(FALLBACK_DATE),
        );
        StartupConfig {
            config,
            needs_setup,
            has_title,
        }
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self::new(countdown::DEFAULT_TITLE, FALLBACK_DATE)
    }
}

impl LoadedSettings {
    fn from_map(mut doc: Map<String, Value>) -> Self {
        let title = match doc.remove("title") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
            Some(Value::String(_)) | None => None,
            Some(other) => {
                warn!(value = %other, "Ignoring non-string title in settings");
                None
            }
        };

        let target_date = match doc.remove("target_date") {
            Some(Value::String(s)) => {
                let parsed = parse_date(&s);
                if parsed.is_none() {
                    warn!(target_date = %s, "Ignoring malformed target_date in settings");
                }
                parsed
            }
            None => None,
            Some(other) => {
                warn!(value = %other, "Ignoring non-string target_date in settings");
                None
            }
        };

        Self { title, target_date }
    }
}

/// Reads and writes the settings document at a fixed path
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(settings::FILENAME)
    }
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings document.
    ///
    /// A missing file yields both fields absent. A file that is not a JSON
    /// object is logged and treated the same way. Other read failures are
    /// returned to the caller.
    pub fn load(&self) -> Result<LoadedSettings> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Settings file not found, starting unconfigured");
                return Ok(LoadedSettings::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read settings from {}", self.path.display())
                });
            }
        };

        let doc = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(path = %self.path.display(), value = %other, "Settings file is not a JSON object, ignoring it");
                return Ok(LoadedSettings::default());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Settings file is not valid JSON, ignoring it");
                return Ok(LoadedSettings::default());
            }
        };

        let loaded = LoadedSettings::from_map(doc);
        info!(
            path = %self.path.display(),
            has_title = loaded.title.is_some(),
            has_target_date = loaded.target_date.is_some(),
            "Loaded settings"
        );
        Ok(loaded)
    }

    /// Write `config`, replacing whatever the file held before
    pub fn save(&self, config: &CountdownConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
        }

        let doc = SettingsDocument {
            title: &config.title,
            target_date: format_date(config.target_date),
        };
        let json = serde_json::to_string_pretty(&doc)
            .context("Failed to serialize settings to JSON")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        info!(path = %self.path.display(), title = %config.title, target_date = %config.target_date, "Saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::new(dir.path().join("settings.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let loaded = store_in(&dir).load().unwrap();
        assert_eq!(loaded, LoadedSettings::default());

        let startup = CountdownConfig::resolve(loaded);
        assert!(startup.needs_setup);
        assert_eq!(startup.config.title, "Countdown");
        assert_eq!(startup.config.target_date, FALLBACK_DATE);
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let config = CountdownConfig::new("Product Launch", date(2027, 3, 14));

        store.save(&config).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.title.as_deref(), Some("Product Launch"));
        assert_eq!(loaded.target_date, Some(date(2027, 3, 14)));

        let startup = CountdownConfig::resolve(loaded);
        assert!(!startup.needs_setup);
        assert_eq!(startup.config, config);
    }

    #[test]
    fn test_save_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let config = CountdownConfig::new("Vacation", date(2026, 12, 20));

        store.save(&config).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();
        store.save(&config).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.load().unwrap().title.as_deref(), Some("Vacation"));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"title": "Old", "target_date": "2020-01-01", "extra": 1}"#).unwrap();

        store.save(&CountdownConfig::new("New", date(2030, 6, 1))).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(!contents.contains("extra"));
        assert!(contents.contains("\"target_date\": \"2030-06-01\""));
    }

    #[test]
    fn test_malformed_date_keeps_title() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"title": "Launch", "target_date": "not-a-date"}"#).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.title.as_deref(), Some("Launch"));
        assert_eq!(loaded.target_date, None);

        let startup = CountdownConfig::resolve(loaded);
        assert_eq!(startup.config.title, "Launch");
        assert_eq!(startup.config.target_date, FALLBACK_DATE);
        assert!(startup.needs_setup);
    }

    #[test]
    fn test_impossible_calendar_day_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"title": "Leap", "target_date": "2026-02-29"}"#).unwrap();

        assert_eq!(store.load().unwrap().target_date, None);
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"title": 42, "target_date": [2026, 1, 1]}"#).unwrap();

        assert_eq!(store.load().unwrap(), LoadedSettings::default());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"title": "Exam", "target_date": "2026-11-02", "theme": "dark"}"#,
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.title.as_deref(), Some("Exam"));
        assert_eq!(loaded.target_date, Some(date(2026, 11, 2)));
    }

    #[test]
    fn test_empty_title_with_valid_date_needs_setup() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"title": "  ", "target_date": "2026-11-02"}"#).unwrap();

        let startup = CountdownConfig::resolve(store.load().unwrap());
        assert!(startup.needs_setup);
        assert_eq!(startup.config.title, "Countdown");
        assert_eq!(startup.config.target_date, date(2026, 11, 2));
    }

    #[test]
    fn test_past_date_does_not_need_setup() {
        let loaded = LoadedSettings {
            title: Some("Done".to_string()),
            target_date: Some(date(2001, 1, 1)),
        };
        assert!(!CountdownConfig::resolve(loaded).needs_setup);
    }

    #[test]
    fn test_corrupt_document_treated_as_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ this is not json").unwrap();

        assert_eq!(store.load().unwrap(), LoadedSettings::default());
    }

    #[test]
    fn test_non_object_document_treated_as_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for contents in [r#"["Launch", "2026-01-01"]"#, r#""Launch""#, "null"] {
            fs::write(store.path(), contents).unwrap();
            assert_eq!(store.load().unwrap(), LoadedSettings::default(), "contents={contents}");
        }
    }

    #[test]
    fn test_padded_date_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"title": "Trip", "target_date": " 2026-01-05 "}"#).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.title.as_deref(), Some("Trip"));
        assert_eq!(loaded.target_date, None);
    }

    #[test]
    fn test_parse_date_accepts_single_digit_fields() {
        assert_eq!(parse_date("2026-01-05"), Some(date(2026, 1, 5)));
        assert_eq!(parse_date("2026-1-5"), Some(date(2026, 1, 5)));
        assert_eq!(parse_date("2026-01-05 "), None);
        assert_eq!(parse_date(" 2026-01-05"), None);
        assert_eq!(parse_date("05/01/2026"), None);
    }

    #[test]
    fn test_resolve_records_missing_title() {
        let missing = CountdownConfig::resolve(LoadedSettings {
            title: None,
            target_date: Some(date(2026, 1, 5)),
        });
        assert!(!missing.has_title);
        assert_eq!(missing.config.title, "Countdown");

        let present = CountdownConfig::resolve(LoadedSettings {
            title: Some("Trip".to_string()),
            target_date: None,
        });
        assert!(present.has_title);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path().join("nested/deeper/settings.json"));

        store.save(&CountdownConfig::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_to_directory_path_fails() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());

        assert!(store.save(&CountdownConfig::default()).is_err());
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Launch  "), "Launch");
        assert_eq!(normalize_title(""), "Countdown");
        assert_eq!(normalize_title(" \t"), "Countdown");
    }

    #[test]
    fn test_default_store_uses_relative_filename() {
        assert_eq!(SettingsStore::default().path(), Path::new("settings.json"));
    }
}
