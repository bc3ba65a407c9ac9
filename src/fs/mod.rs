// src/fs/mod.rs
//! Filesystem module - extension classification, MIME detection and
//! directory listing.

pub mod detection;
pub mod listing;

// Re-export commonly used types
pub use detection::{Classifier, IconClass, MediaKind};
pub use listing::{human_size, load_records};
