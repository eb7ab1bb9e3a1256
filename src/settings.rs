use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";

/// Durable key/value storage for user preferences.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Settings kept as a flat JSON object of strings.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text)
            .with_context(|| format!("invalid settings file {}", self.path.display()))
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // An unreadable file is replaced rather than blocking the write
        let mut entries = self.read_all().unwrap_or_else(|e| {
            tracing::warn!("{:#}. Rewriting settings", e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Color theme of the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    pub fn toggled(self) -> ThemePreference {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            _ => Err(anyhow::anyhow!("unknown theme: {}", s)),
        }
    }
}

/// Theme preference backed by a settings store.
pub struct ThemeSettings<S> {
    store: S,
    current: ThemePreference,
}

impl<S: SettingsStore> ThemeSettings<S> {
    /// Read the stored theme once. Missing, unknown or unreadable values fall back to dark.
    pub fn load(store: S) -> Result<Self> {
        let stored = store.get(THEME_KEY).unwrap_or_else(|e| {
            tracing::warn!("{:#}. Falling back to {}", e, ThemePreference::default());
            None
        });
        let current = match stored {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}. Falling back to {}", e, ThemePreference::default());
                ThemePreference::default()
            }),
            None => ThemePreference::default(),
        };
        tracing::debug!("Loaded theme: {}", current);
        Ok(Self { store, current })
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Result<ThemePreference> {
        let next = self.current.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.current = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(HashMap<String, String>);

    impl SettingsStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("urlcheck-test-{}", uuid::Uuid::new_v4()))
            .join("settings.json")
    }

    #[test]
    fn defaults_to_dark() {
        let theme = ThemeSettings::load(MemoryStore::default()).unwrap();
        assert_eq!(theme.current(), ThemePreference::Dark);
    }

    #[test]
    fn unknown_value_falls_back_to_dark() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "solarized").unwrap();
        let theme = ThemeSettings::load(store).unwrap();
        assert_eq!(theme.current(), ThemePreference::Dark);
    }

    #[test]
    fn toggle_twice_restores_preference() {
        let mut theme = ThemeSettings::load(MemoryStore::default()).unwrap();
        assert_eq!(theme.toggle().unwrap(), ThemePreference::Light);
        assert_eq!(theme.store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(theme.toggle().unwrap(), ThemePreference::Dark);
        assert_eq!(theme.store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_survives_reload() {
        let path = temp_settings_path();

        let mut theme = ThemeSettings::load(FileSettingsStore::new(&path)).unwrap();
        assert_eq!(theme.current(), ThemePreference::Dark);
        theme.toggle().unwrap();

        let reloaded = ThemeSettings::load(FileSettingsStore::new(&path)).unwrap();
        assert_eq!(reloaded.current(), ThemePreference::Light);

        let mut again = reloaded;
        again.toggle().unwrap();
        let reloaded = ThemeSettings::load(FileSettingsStore::new(&path)).unwrap();
        assert_eq!(reloaded.current(), ThemePreference::Dark);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn corrupt_file_falls_back_and_is_repaired() {
        let path = temp_settings_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        for garbage in [r#"{"theme": 1}"#, "garbage"] {
            fs::write(&path, garbage).unwrap();
            let mut theme = ThemeSettings::load(FileSettingsStore::new(&path)).unwrap();
            assert_eq!(theme.current(), ThemePreference::Dark);
            assert_eq!(theme.toggle().unwrap(), ThemePreference::Light);

            let reloaded = ThemeSettings::load(FileSettingsStore::new(&path)).unwrap();
            assert_eq!(reloaded.current(), ThemePreference::Light);
        }

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn file_store_keeps_other_entries() {
        let path = temp_settings_path();
        let mut store = FileSettingsStore::new(&path);
        store.set("endpoint", "http://scanner.local/check").unwrap();
        store.set(THEME_KEY, "light").unwrap();

        let store = FileSettingsStore::new(&path);
        assert_eq!(store.get("endpoint").unwrap().as_deref(), Some("http://scanner.local/check"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.get("missing").unwrap(), None);

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
