//! Common types and traits for all entities

pub mod entity;
pub mod envelope;

// Re-exports
pub use entity::{DeleteGuard, EntityRecord};
pub use envelope::{extract_list, extract_record};
