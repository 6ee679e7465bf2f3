//! Utils - Shared Utilities

pub mod format;
pub mod prefs_store;
