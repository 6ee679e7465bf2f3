//! Services - Background Work
//!
//! Camera, library import and preference persistence run off the UI
//! thread and report back through the event channel.

pub mod camera;
pub mod gallery;
pub mod service_hub;
