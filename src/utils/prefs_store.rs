//! PrefsStore - Local Preference Storage

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::prefs::Preferences;
use crate::i18n::Locale;

const PREFS_FILE: &str = "preferences.json";

/// Get the application data directory
pub fn app_data_dir() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not find local data directory"))?
        .join("bika-gui");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

/// Load preferences, falling back to defaults when the file is missing
pub fn load_preferences() -> Result<Preferences> {
    load_preferences_from(&app_data_dir()?)
}

/// Save preferences to disk
pub fn save_preferences(prefs: &Preferences) -> Result<()> {
    save_preferences_to(&app_data_dir()?, prefs)
}

/// The saved language, when one was stored and still parses
pub fn saved_locale() -> Option<Locale> {
    let prefs = load_preferences().ok()?;
    Locale::from_code(&prefs.language?)
}

fn load_preferences_from(dir: &Path) -> Result<Preferences> {
    let path = dir.join(PREFS_FILE);

    if !path.exists() {
        return Ok(Preferences::default());
    }

    let content = fs::read_to_string(&path)?;
    let prefs: Preferences = serde_json::from_str(&content)?;
    Ok(prefs)
}

fn save_preferences_to(dir: &Path, prefs: &Preferences) -> Result<()> {
    let path = dir.join(PREFS_FILE);
    let content = serde_json::to_string_pretty(prefs)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = load_preferences_from(dir.path()).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.language.is_none());
    }

    #[test]
    fn language_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences {
            language: Some("rw".to_string()),
        };
        save_preferences_to(dir.path(), &prefs).unwrap();

        let loaded = load_preferences_from(dir.path()).unwrap();
        assert_eq!(loaded, prefs);
        assert_eq!(
            loaded.language.as_deref().and_then(Locale::from_code),
            Some(Locale::Rw)
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PREFS_FILE);
        fs::write(&path, r#"{"language":"fr","theme":"dark"}"#).unwrap();

        let loaded = load_preferences_from(dir.path()).unwrap();
        assert_eq!(loaded.language.as_deref(), Some("fr"));
    }
}
