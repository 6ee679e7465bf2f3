//! Components - Reusable UI Building Blocks

pub mod composite;
pub mod layout;
pub mod primitives;
