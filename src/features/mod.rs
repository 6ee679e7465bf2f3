//! Features - Screen Slices
//!
//! Each feature owns its page view and, where it has behavior, a
//! controller that mediates between the page and the global state.

pub mod account;
pub mod activity;
pub mod auth;
pub mod favourites;
pub mod files;
pub mod folder;
pub mod home;
pub mod plans;
pub mod scan;
pub mod security;
pub mod settings_menu;
pub mod shared;
