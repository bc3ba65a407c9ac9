// src/ui/widgets/mod.rs
//! Custom widgets for the peeky UI.

pub mod file_list;
pub mod modal;

// Re-export widget types and rendering functions
pub use file_list::{render_file_list, row_line};
pub use modal::{FsLoader, Media, MediaLoader, Modal, NullLoader, render_modal};
