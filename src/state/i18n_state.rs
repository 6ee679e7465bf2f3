//! Active locale

use crate::i18n::Locale;

pub struct I18nState {
    locale: Locale,
}

impl I18nState {
    /// Start from a stored preference when one exists, otherwise from
    /// the system locale.
    pub fn new(saved: Option<Locale>) -> Self {
        Self {
            locale: saved.unwrap_or_else(Locale::from_system),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preference_wins_over_system() {
        let state = I18nState::new(Some(Locale::Rw));
        assert_eq!(state.locale(), Locale::Rw);
    }

    #[test]
    fn set_locale_switches() {
        let mut state = I18nState::new(Some(Locale::En));
        state.set_locale(Locale::Ar);
        assert_eq!(state.locale(), Locale::Ar);
    }
}
