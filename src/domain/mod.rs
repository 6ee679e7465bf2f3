//! Domain - Fixture Data and Pure Types
//!
//! These types don't depend on GPUI and represent the drive content the
//! screens render. Everything here is static fixture data; nothing is
//! fetched or persisted except the language preference.

pub mod entry;
pub mod folder;
pub mod home;
pub mod plan;
pub mod prefs;
pub mod scan;
pub mod settings_menu;
pub mod shared;
