//! Bika Client Library
//!
//! This crate provides the main application logic for the Bika cloud
//! drive client, a mobile-shaped GPUI app for storing, sharing and
//! scanning documents.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
