//! Load/save of the persisted document
//!
//! The store owns nothing but its path. Loading never fails: a missing or
//! unreadable file yields the default document and leaves the file alone.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::document::PersistedDocument;
use crate::constants::config::{APP_DIR, FILENAME, TEMP_SUFFIX};

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at the per-user default location
    pub fn new() -> Self {
        Self::at(Self::default_path())
    }

    /// Store at an explicit path (CLI override, tests)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, falling back to defaults on any failure
    pub fn load(&self) -> PersistedDocument {
        match self.try_load() {
            Ok(Some(mut document)) => {
                document.settings.validate_and_clamp();
                info!(
                    path = %self.path.display(),
                    occupied = document.slots.occupied(),
                    "Loaded hotbar config"
                );
                document
            }
            Ok(None) => {
                info!(path = %self.path.display(), "Config file not found, using defaults");
                PersistedDocument::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = ?e, "Failed to load config, using defaults");
                PersistedDocument::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<PersistedDocument>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read config from {:?}", self.path));
            }
        };

        let document = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", self.path))?;
        Ok(Some(document))
    }

    /// Overwrite the file with `document`
    ///
    /// Written to a sibling temp file first, then renamed into place. Errors
    /// are logged here; callers may ignore the returned result.
    pub fn save(&self, document: &PersistedDocument) -> Result<()> {
        self.try_save(document).inspect_err(|e| {
            error!(path = %self.path.display(), error = ?e, "Failed to save config");
        })
    }

    fn try_save(&self, document: &PersistedDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(document)
            .context("Failed to serialize config to JSON")?;

        let temp_path = self.path.with_extension(TEMP_SUFFIX);
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write config to {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to move {:?} into place at {:?}", temp_path, self.path))?;

        info!(path = %self.path.display(), "Saved config");
        Ok(())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::document::{AppBinding, SlotCollection, WindowLevel};
    use crate::types::Position;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::at(dir.path().join("desktophotbar").join("config.json"))
    }

    fn sample_document() -> PersistedDocument {
        let mut slots = SlotCollection::default();
        slots.set(0, Some(AppBinding {
            name: "Terminal".to_string(),
            icon: "utilities-terminal".to_string(),
            exec: "gnome-terminal".to_string(),
            source_path: PathBuf::from("/usr/share/applications/org.gnome.Terminal.desktop"),
        }));
        slots.set(8, Some(AppBinding {
            name: "Files".to_string(),
            icon: "./icons/files.png".to_string(),
            exec: "nautilus --new-window %U".to_string(),
            source_path: PathBuf::from("/home/user/Desktop/files.desktop"),
        }));

        let mut document = PersistedDocument { slots, ..PersistedDocument::default() };
        document.settings.level = WindowLevel::AlwaysOnBottom;
        document.settings.is_movable = false;
        document.settings.scale = 1.25;
        document.settings.window_position = Some(Position::new(320, 1000));
        document
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), PersistedDocument::default());
        // Loading must not create anything
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let document = sample_document();

        store.save(&document).unwrap();
        assert_eq!(store.load(), document);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::at(dir.path().join("a").join("b").join("config.json"));
        store.save(&PersistedDocument::default()).unwrap();
        assert!(store.path().is_file());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample_document()).unwrap();
        assert!(!store.path().with_extension(TEMP_SUFFIX).exists());
    }

    #[test]
    fn test_invalid_json_same_as_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ this is not json").unwrap();

        assert_eq!(store.load(), PersistedDocument::default());
        // Corrupt file is left untouched
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ this is not json");
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&sample_document()).unwrap();
        store.save(&PersistedDocument::default()).unwrap();
        assert_eq!(store.load(), PersistedDocument::default());
    }

    #[test]
    fn test_loads_file_written_by_older_release() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"{
    "settings": {"level": 1, "is_movable": true, "scale": 2.0,
                 "window_position": {"x": 10, "y": 20}},
    "slots": [null, {"name": "Vim", "icon": "gvim", "exec": "gvim -f %F",
                     "path": "/usr/share/applications/gvim.desktop"},
              null, null, null, null, null, null, null]
}"#,
        )
        .unwrap();

        let document = store.load();
        assert_eq!(document.settings.level, WindowLevel::Normal);
        assert_eq!(document.settings.scale, 2.0);
        assert_eq!(document.settings.window_position, Some(Position::new(10, 20)));
        assert_eq!(document.slots.get(1).map(|b| b.exec.as_str()), Some("gvim -f %F"));
    }

    #[test]
    fn test_save_to_unwritable_location_reports_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();
        let store = ConfigStore::at(blocker.join("config.json"));
        assert!(store.save(&PersistedDocument::default()).is_err());
    }
}
