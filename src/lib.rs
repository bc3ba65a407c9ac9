// src/lib.rs
//! Peeky - a terminal file browser with media preview.
//!
//! This library provides all the core functionality for the peeky browser.

pub mod app;
pub mod config;
pub mod fs;
pub mod source;
pub mod ui;
