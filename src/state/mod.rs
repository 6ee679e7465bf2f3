//! State - Entity-backed application state
//!
//! Plain structs wrapped in `Entity<T>` by the app layer. Mutation goes
//! through `Entity::update` so observers get notified.

pub mod alert_state;
pub mod i18n_state;
pub mod nav_state;
pub mod scan_state;
pub mod settings_state;
