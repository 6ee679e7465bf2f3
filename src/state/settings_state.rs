//! Settings toggle state

use std::collections::HashMap;

use crate::domain::settings_menu;

/// In-memory switch positions for every toggle row across the settings
/// pages. Seeded from the fixture defaults; not persisted.
pub struct SettingsState {
    toggles: HashMap<&'static str, bool>,
}

impl SettingsState {
    pub fn new() -> Self {
        Self {
            toggles: settings_menu::default_toggles(),
        }
    }

    pub fn is_on(&self, id: &str) -> bool {
        self.toggles.get(id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: &'static str) {
        let entry = self.toggles.entry(id).or_insert(false);
        *entry = !*entry;
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_from_defaults_and_flips() {
        let mut state = SettingsState::new();
        assert!(!state.is_on("dark-mode"));
        assert!(state.is_on("push-updates"));

        state.toggle("dark-mode");
        assert!(state.is_on("dark-mode"));
        state.toggle("dark-mode");
        assert!(!state.is_on("dark-mode"));
    }

    #[test]
    fn unknown_ids_read_as_off() {
        let state = SettingsState::new();
        assert!(!state.is_on("no-such-toggle"));
    }
}
