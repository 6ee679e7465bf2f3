//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here. State is split by
//! update frequency rather than kept in one monolith.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    alert_state::AlertState, i18n_state::I18nState, nav_state::NavState, scan_state::ScanState,
    settings_state::SettingsState,
};
use crate::utils::prefs_store;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Navigation stack and active tab
    pub nav: Entity<NavState>,
    /// Active locale
    pub i18n: Entity<I18nState>,
    /// Scan session state
    pub scan: Entity<ScanState>,
    /// Modal alert state
    pub alert: Entity<AlertState>,
    /// Settings toggle positions
    pub settings: Entity<SettingsState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        let saved = prefs_store::saved_locale();

        Self {
            nav: cx.new(|_| NavState::new()),
            i18n: cx.new(|_| I18nState::new(saved)),
            scan: cx.new(|_| ScanState::new()),
            alert: cx.new(|_| AlertState::new()),
            settings: cx.new(|_| SettingsState::new()),
        }
    }
}
