//! Settings menu configuration
//!
//! The account screen links to nine settings pages. Each page is pure
//! configuration rendered by a single generic screen, so the content
//! lives here as data.

use std::collections::HashMap;

use gpui::SharedString;

use crate::i18n::{self, Locale};

/// Keys for the settings pages reachable from the account menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsMenuKey {
    Profile,
    Storage,
    Billing,
    Notifications,
    Referrals,
    Language,
    Preferences,
    About,
    Security,
}

impl SettingsMenuKey {
    pub fn all() -> &'static [SettingsMenuKey] {
        &[
            Self::Profile,
            Self::Storage,
            Self::Billing,
            Self::Notifications,
            Self::Referrals,
            Self::Language,
            Self::Preferences,
            Self::About,
            Self::Security,
        ]
    }

    /// Stable slug carried in the navigation route
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Storage => "storage",
            Self::Billing => "billing",
            Self::Notifications => "notifications",
            Self::Referrals => "referrals",
            Self::Language => "language",
            Self::Preferences => "preferences",
            Self::About => "about",
            Self::Security => "security",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::all().iter().copied().find(|key| key.slug() == slug)
    }

    /// Translated page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Profile => "menu-profile",
            Self::Storage => "menu-storage",
            Self::Billing => "menu-billing",
            Self::Notifications => "menu-notifications",
            Self::Referrals => "menu-referrals",
            Self::Language => "menu-language",
            Self::Preferences => "menu-preferences",
            Self::About => "menu-about",
            Self::Security => "menu-security",
        }
    }

    /// Tile glyph on the account screen grid
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Profile => "☺",
            Self::Storage => "▤",
            Self::Billing => "▦",
            Self::Notifications => "◍",
            Self::Referrals => "↗",
            Self::Language => "◎",
            Self::Preferences => "❖",
            Self::About => "ℹ",
            Self::Security => "▣",
        }
    }
}

/// Display copy that is either a fixture literal or a translation key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyText {
    Literal(&'static str),
    Key(&'static str),
}

impl CopyText {
    pub fn resolve(&self, locale: Locale) -> SharedString {
        match self {
            Self::Literal(text) => SharedString::from(*text),
            Self::Key(key) => i18n::t(locale, key),
        }
    }
}

/// One row inside a settings section
#[derive(Debug, Clone, Copy)]
pub enum SectionRow {
    /// Label with a read-only value
    Detail { label: CopyText, value: CopyText },
    /// Switch row; state lives in SettingsState keyed by `id`
    Toggle {
        id: &'static str,
        label: CopyText,
        description: CopyText,
        default_on: bool,
    },
    /// Storage bar with a caption
    Progress {
        label: CopyText,
        used_gb: f32,
        total_gb: f32,
    },
    /// Highlighted explanatory card
    Note { title: CopyText, body: CopyText },
    /// Tappable row that is inert in this fixture build
    Action { label: CopyText },
    /// Selectable language entry on the language page
    LanguageOption { locale: Locale },
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: Option<CopyText>,
    pub description: Option<CopyText>,
    pub rows: Vec<SectionRow>,
}

/// Full configuration for one settings page
#[derive(Debug, Clone)]
pub struct MenuConfig {
    pub key: SettingsMenuKey,
    pub title: CopyText,
    pub sections: Vec<Section>,
    /// Optional primary call to action pinned under the sections
    pub cta: Option<CopyText>,
}

impl MenuConfig {
    /// Builds the page configuration for a key. Total over all keys.
    pub fn for_key(key: SettingsMenuKey) -> MenuConfig {
        use CopyText::{Key, Literal};
        use SectionRow::*;

        let (sections, cta) = match key {
            SettingsMenuKey::Profile => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Display name"),
                                value: Literal("Digne Mellow"),
                            },
                            Detail {
                                label: Literal("Email"),
                                value: Literal("cnrukundo@gmail.com"),
                            },
                            Toggle {
                                id: "dark-mode",
                                label: Literal("Dark appearance"),
                                description: Literal("Match the system theme across the app."),
                                default_on: false,
                            },
                            Toggle {
                                id: "compact-mode",
                                label: Literal("Compact layout"),
                                description: Literal(
                                    "Reduce spacing for dense information views.",
                                ),
                                default_on: false,
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Shortcuts")),
                        description: None,
                        rows: vec![
                            Action {
                                label: Literal("Customize home cards"),
                            },
                            Action {
                                label: Literal("Keyboard shortcuts"),
                            },
                            Action {
                                label: Literal("Notification preferences"),
                            },
                        ],
                    },
                ],
                None,
            ),
            SettingsMenuKey::Storage => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Progress {
                                label: Literal("Storage used"),
                                used_gb: 4.5,
                                total_gb: 15.0,
                            },
                            Detail {
                                label: Literal("Current plan"),
                                value: Literal("Free • 15 GB"),
                            },
                            Detail {
                                label: Literal("Pinned folders"),
                                value: Literal("6 folders"),
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Smart cleanup")),
                        description: None,
                        rows: vec![
                            Action {
                                label: Literal("Review large files"),
                            },
                            Action {
                                label: Literal("Empty recycle bin"),
                            },
                        ],
                    },
                ],
                Some(Literal("Upgrade plan")),
            ),
            SettingsMenuKey::Billing => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Current plan"),
                                value: Literal("Standard • paid 28 Nov"),
                            },
                            Detail {
                                label: Literal("Billing cycle"),
                                value: Literal("Monthly"),
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Payment method")),
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Primary card"),
                                value: Literal("Mastercard •••• 9284"),
                            },
                            Action {
                                label: Literal("Add backup method"),
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Invoices")),
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Last invoice"),
                                value: Literal("Nov 2025 • Paid"),
                            },
                            Action {
                                label: Literal("View all invoices"),
                            },
                        ],
                    },
                ],
                Some(Literal("Change plan")),
            ),
            SettingsMenuKey::Notifications => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Toggle {
                                id: "email-updates",
                                label: Literal("Email summaries"),
                                description: Literal(
                                    "Weekly overview of shared items and storage.",
                                ),
                                default_on: true,
                            },
                            Toggle {
                                id: "push-updates",
                                label: Literal("Push notifications"),
                                description: Literal(
                                    "Instant updates for mentions, shares and approvals.",
                                ),
                                default_on: true,
                            },
                            Toggle {
                                id: "sms-updates",
                                label: Literal("SMS alerts"),
                                description: Literal("Security notifications like new logins."),
                                default_on: false,
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Focus")),
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Quiet hours"),
                                value: Literal("Daily • 10pm – 7am"),
                            },
                            Action {
                                label: Literal("Edit schedule"),
                            },
                        ],
                    },
                ],
                None,
            ),
            SettingsMenuKey::Referrals => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Referral code"),
                                value: Literal("DIGNEX25"),
                            },
                            Note {
                                title: Literal("Reward"),
                                body: Literal(
                                    "Earn 2GB bonus storage for every friend who upgrades within 30 days.",
                                ),
                            },
                            Action {
                                label: Literal("Share via email"),
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Progress")),
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Invites sent"),
                                value: Literal("12"),
                            },
                            Detail {
                                label: Literal("Rewards earned"),
                                value: Literal("6 GB"),
                            },
                        ],
                    },
                ],
                Some(Literal("Copy link")),
            ),
            SettingsMenuKey::Language => (
                vec![Section {
                    title: Some(Key("language-section-title")),
                    description: Some(Key("language-section-desc")),
                    rows: Locale::all()
                        .iter()
                        .map(|&locale| LanguageOption { locale })
                        .collect(),
                }],
                Some(Key("action-apply")),
            ),
            SettingsMenuKey::Preferences => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Open files in"),
                                value: Literal("Native viewer"),
                            },
                            Toggle {
                                id: "smart-sync",
                                label: Literal("Smart sync"),
                                description: Literal(
                                    "Only download files when opened on this device.",
                                ),
                                default_on: true,
                            },
                            Toggle {
                                id: "auto-update",
                                label: Literal("Auto update app"),
                                description: Literal(
                                    "Install updates when connected to Wi-Fi.",
                                ),
                                default_on: true,
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Privacy")),
                        description: None,
                        rows: vec![
                            Toggle {
                                id: "activity-insights",
                                label: Literal("Activity insights"),
                                description: Literal(
                                    "Allow teammates to see when you view shared files.",
                                ),
                                default_on: false,
                            },
                            Toggle {
                                id: "usage-metrics",
                                label: Literal("Product analytics"),
                                description: Literal(
                                    "Share anonymous usage data to improve the experience.",
                                ),
                                default_on: true,
                            },
                            Detail {
                                label: Literal("Automatic cloud backup"),
                                value: Literal("Weekly"),
                            },
                            Action {
                                label: Literal("Manage backup schedule"),
                            },
                        ],
                    },
                ],
                None,
            ),
            SettingsMenuKey::About => (
                vec![Section {
                    title: None,
                    description: None,
                    rows: vec![
                        Detail {
                            label: Literal("Current version"),
                            value: Literal("3.7.2"),
                        },
                        Detail {
                            label: Literal("Last updated"),
                            value: Literal("Nov 29, 2025"),
                        },
                        Action {
                            label: Literal("Check for updates"),
                        },
                    ],
                }],
                None,
            ),
            SettingsMenuKey::Security => (
                vec![
                    Section {
                        title: None,
                        description: None,
                        rows: vec![
                            Toggle {
                                id: "two-factor",
                                label: Literal("Two-factor authentication"),
                                description: Literal("Require a 6-digit code on sign in."),
                                default_on: true,
                            },
                            Toggle {
                                id: "biometric",
                                label: Literal("Biometric unlock"),
                                description: Literal(
                                    "Use Face ID or Touch ID on this device.",
                                ),
                                default_on: true,
                            },
                        ],
                    },
                    Section {
                        title: Some(Literal("Sessions")),
                        description: None,
                        rows: vec![
                            Detail {
                                label: Literal("Active devices"),
                                value: Literal("3"),
                            },
                            Action {
                                label: Literal("Review sign-in activity"),
                            },
                            Action {
                                label: Literal("Sign out other devices"),
                            },
                        ],
                    },
                ],
                None,
            ),
        };

        MenuConfig {
            key,
            title: Key(key.title_key()),
            sections,
            cta,
        }
    }
}

/// Initial switch states gathered from every page's toggle rows
pub fn default_toggles() -> HashMap<&'static str, bool> {
    let mut toggles = HashMap::new();
    for &key in SettingsMenuKey::all() {
        for section in MenuConfig::for_key(key).sections {
            for row in section.rows {
                if let SectionRow::Toggle { id, default_on, .. } = row {
                    toggles.insert(id, default_on);
                }
            }
        }
    }
    toggles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for &key in SettingsMenuKey::all() {
            assert_eq!(SettingsMenuKey::from_slug(key.slug()), Some(key));
        }
        assert_eq!(SettingsMenuKey::from_slug("payments"), None);
    }

    #[test]
    fn every_key_has_a_config_with_rows() {
        for &key in SettingsMenuKey::all() {
            let config = MenuConfig::for_key(key);
            assert_eq!(config.key, key);
            assert!(!config.sections.is_empty(), "{} has no sections", key.slug());
            let rows: usize = config.sections.iter().map(|s| s.rows.len()).sum();
            assert!(rows > 0, "{} has no rows", key.slug());
        }
    }

    #[test]
    fn language_page_lists_every_locale() {
        let config = MenuConfig::for_key(SettingsMenuKey::Language);
        let options: Vec<_> = config
            .sections
            .iter()
            .flat_map(|s| &s.rows)
            .filter(|row| matches!(row, SectionRow::LanguageOption { .. }))
            .collect();
        assert_eq!(options.len(), Locale::all().len());
        assert_eq!(config.cta, Some(CopyText::Key("action-apply")));
    }

    #[test]
    fn toggle_ids_are_unique_across_pages() {
        let mut seen = Vec::new();
        for &key in SettingsMenuKey::all() {
            for section in MenuConfig::for_key(key).sections {
                for row in section.rows {
                    if let SectionRow::Toggle { id, .. } = row {
                        assert!(!seen.contains(&id), "duplicate toggle id {id}");
                        seen.push(id);
                    }
                }
            }
        }
        assert_eq!(seen.len(), default_toggles().len());
    }

    #[test]
    fn defaults_match_the_fixture_switches() {
        let toggles = default_toggles();
        assert_eq!(toggles.get("dark-mode"), Some(&false));
        assert_eq!(toggles.get("email-updates"), Some(&true));
        assert_eq!(toggles.get("sms-updates"), Some(&false));
        assert_eq!(toggles.get("two-factor"), Some(&true));
        assert_eq!(toggles.get("activity-insights"), Some(&false));
    }

    #[test]
    fn copy_text_resolves_literals_and_keys() {
        assert_eq!(
            CopyText::Literal("DIGNEX25").resolve(Locale::Fr),
            "DIGNEX25"
        );
        assert_eq!(CopyText::Key("menu-storage").resolve(Locale::En), "Storage");
    }
}
