//! Settings Menu Controller

use gpui::App;

use crate::app::entities::AppEntities;
use crate::i18n::Locale;
use crate::services::service_hub::ServiceHub;

/// Settings menu controller
pub struct SettingsMenuController {
    entities: AppEntities,
}

impl SettingsMenuController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Flip a toggle row
    pub fn toggle(&self, id: &'static str, cx: &mut App) {
        self.entities.settings.update(cx, |settings, cx| {
            settings.toggle(id);
            cx.notify();
        });
    }

    /// Switch the app locale and persist the choice in the background
    pub fn apply_language(&self, locale: Locale, cx: &mut App) {
        self.entities.i18n.update(cx, |i18n, cx| {
            i18n.set_locale(locale);
            cx.notify();
        });
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.persist_language(locale);
        }
    }

    pub fn go_back(&self, cx: &mut App) {
        self.entities.nav.update(cx, |nav, cx| {
            nav.back();
            cx.notify();
        });
    }
}
