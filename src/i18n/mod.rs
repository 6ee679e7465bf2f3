//! i18n - Internationalization Module
//!
//! Static translation tables with English fallback, mirroring the eight
//! languages the Bika mobile client ships.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

mod locales;

/// Horizontal text direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (default and fallback)
    #[default]
    En,
    /// Kinyarwanda
    Rw,
    /// French
    Fr,
    /// Arabic
    Ar,
    /// Amharic
    Am,
    /// Hindi
    Hi,
    /// Chinese (Simplified)
    Zh,
    /// Swahili
    Sw,
}

impl Locale {
    /// All supported locales, in catalog order
    pub fn all() -> &'static [Locale] {
        &[
            Locale::Rw,
            Locale::En,
            Locale::Fr,
            Locale::Ar,
            Locale::Am,
            Locale::Hi,
            Locale::Zh,
            Locale::Sw,
        ]
    }

    /// Short locale code used for persistence and lookup
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Rw => "rw",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
            Locale::Am => "am",
            Locale::Hi => "hi",
            Locale::Zh => "zh",
            Locale::Sw => "sw",
        }
    }

    /// English display label
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Rw => "Kinya",
            Locale::Fr => "French",
            Locale::Ar => "Arabic",
            Locale::Am => "Amharic",
            Locale::Hi => "Indian (Hindi)",
            Locale::Zh => "Chinese",
            Locale::Sw => "Swahili",
        }
    }

    /// Name of the language in the language itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Rw => "Ikinyarwanda",
            Locale::Fr => "Français",
            Locale::Ar => "العربية",
            Locale::Am => "አማርኛ",
            Locale::Hi => "हिन्दी",
            Locale::Zh => "中文",
            Locale::Sw => "Kiswahili",
        }
    }

    /// Text direction; only Arabic renders right-to-left
    pub fn direction(&self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Parse a locale from a stored or detected code.
    ///
    /// Accepts full tags like `en-US` or `fr_FR`; only the primary
    /// subtag is considered.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or(code)
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "rw" => Some(Locale::Rw),
            "fr" => Some(Locale::Fr),
            "ar" => Some(Locale::Ar),
            "am" => Some(Locale::Am),
            "hi" => Some(Locale::Hi),
            "zh" => Some(Locale::Zh),
            "sw" => Some(Locale::Sw),
            _ => None,
        }
    }

    /// Detect the locale from the system settings, falling back to English.
    pub fn from_system() -> Locale {
        let current = locale_config::Locale::current().to_string();
        Self::from_tags(&current)
    }

    /// Resolve the first supported locale from a comma-separated tag list.
    fn from_tags(tags: &str) -> Locale {
        tags.split(',')
            .filter_map(Locale::from_code)
            .next()
            .unwrap_or(Locale::En)
    }
}

/// Per-locale translation tables, built once on first use
static TABLES: OnceLock<HashMap<Locale, HashMap<&'static str, &'static str>>> = OnceLock::new();

fn tables() -> &'static HashMap<Locale, HashMap<&'static str, &'static str>> {
    TABLES.get_or_init(|| {
        let mut map = HashMap::new();
        for &locale in Locale::all() {
            map.insert(locale, locales::pairs(locale).iter().copied().collect());
        }
        map
    })
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    tables().get(&locale).and_then(|table| table.get(key)).copied()
}

/// Translate a key.
///
/// Resolution order: requested locale, then English, then the key itself.
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(value) = lookup(locale, key) {
        SharedString::from(value)
    } else if let Some(value) = lookup(Locale::En, key) {
        SharedString::from(value)
    } else {
        SharedString::from(key.to_string())
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_with(locale: Locale, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut resolved = t(locale, key).to_string();
    for (name, value) in args {
        resolved = resolved.replace(&format!("{{{name}}}"), value);
    }
    SharedString::from(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_in_requested_locale() {
        assert_eq!(t(Locale::Fr, "tab-home"), "Accueil");
        assert_eq!(t(Locale::Zh, "tab-home"), "首页");
    }

    #[test]
    fn falls_back_to_english_then_key() {
        // every locale carries the full key set, so fabricate a miss
        assert_eq!(t(Locale::Fr, "no-such-key"), "no-such-key");
        assert_eq!(t(Locale::En, "tab-home"), "Home");
    }

    #[test]
    fn interpolates_placeholders() {
        let greeting = t_with(Locale::En, "home-greeting-morning", &[("name", "Digne")]);
        assert_eq!(greeting, "Good morning, Digne");

        let usage = t_with(
            Locale::En,
            "home-usage",
            &[("used", "4.5"), ("total", "15")],
        );
        assert_eq!(usage, "4.5 GB of 15 GB used");
    }

    #[test]
    fn all_locales_carry_the_english_key_set() {
        let english: Vec<&str> = locales::pairs(Locale::En).iter().map(|(k, _)| *k).collect();
        for &locale in Locale::all() {
            let keys: std::collections::HashSet<&str> =
                locales::pairs(locale).iter().map(|(k, _)| *k).collect();
            assert_eq!(
                keys.len(),
                english.len(),
                "{} has a different key count",
                locale.code()
            );
            for key in &english {
                assert!(keys.contains(key), "{} is missing {key}", locale.code());
            }
        }
    }

    #[test]
    fn parses_codes_and_tags() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr_FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_code("RW"), Some(Locale::Rw));
        assert_eq!(Locale::from_code("pt-BR"), None);

        assert_eq!(Locale::from_tags("de-DE,ar-EG"), Locale::Ar);
        assert_eq!(Locale::from_tags(""), Locale::En);
    }

    #[test]
    fn only_arabic_is_rtl() {
        for &locale in Locale::all() {
            let expected = if locale == Locale::Ar {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            };
            assert_eq!(locale.direction(), expected, "{}", locale.code());
        }
    }

    #[test]
    fn code_round_trips() {
        for &locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }
}
