// src/fs/listing.rs
//! Local directory listing as display-ready file records.

use std::{fs, path::Path, time::SystemTime};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::source::FileRecord;

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// List the regular files in `dir` as display-ready records, sorted
/// case-insensitively by name. Directories and other non-file entries are
/// skipped.
pub fn load_records(dir: &Path) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for entry in fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if !meta.is_file() {
            continue;
        }

        let modified = meta.modified().map(format_timestamp).unwrap_or_default();
        records.push(FileRecord {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: human_size(meta.len()),
            modified,
        });
    }

    records.sort_by_key(|r| r.name.to_lowercase());
    Ok(records)
}

/// Render a byte count with a unit suffix, in increments of 1024 and one
/// decimal place.
pub fn human_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.1} {}", size, SIZE_UNITS[unit])
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
