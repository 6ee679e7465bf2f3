//! Per-locale translation tables.
//!
//! Each table carries the same key set; parity is asserted in the
//! i18n tests.

use super::Locale;

mod am;
mod ar;
mod en;
mod fr;
mod hi;
mod rw;
mod sw;
mod zh;

pub(super) fn pairs(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => en::PAIRS,
        Locale::Rw => rw::PAIRS,
        Locale::Fr => fr::PAIRS,
        Locale::Ar => ar::PAIRS,
        Locale::Am => am::PAIRS,
        Locale::Hi => hi::PAIRS,
        Locale::Zh => zh::PAIRS,
        Locale::Sw => sw::PAIRS,
    }
}
