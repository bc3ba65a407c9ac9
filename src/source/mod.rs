// src/source/mod.rs
//! File record acquisition - demo literal, HTTP endpoint or local
//! directory.

pub mod api;
pub mod demo;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::fs::listing;

/// Display-ready metadata for one listed file. `size` and `modified` are
/// opaque strings, formatted by whoever produced the record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "file-name")]
    pub name: String,
    pub size: String,
    pub modified: String,
}

/// Where the record list comes from.
#[derive(Debug, Clone)]
pub enum FileSource {
    /// Built-in static list, demo/test mode.
    Demo,
    /// One HTTP GET expecting a JSON array of records.
    Api { url: String },
    /// Local directory scan.
    Dir { path: PathBuf },
}

impl FileSource {
    /// Directory source, validated up front so a bad path fails loudly at
    /// startup instead of rendering an empty browser.
    pub fn dir(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let path = path
            .canonicalize()
            .with_context(|| format!("cannot open directory {}", path.display()))?;
        Ok(Self::Dir { path })
    }

    /// Acquire the record list. Acquisition failure is logged and yields an
    /// empty list; it is never fatal and never retried.
    pub fn load(&self) -> Vec<FileRecord> {
        let result = match self {
            FileSource::Demo => Ok(demo::records()),
            FileSource::Api { url } => api::fetch_records(url),
            FileSource::Dir { path } => listing::load_records(path),
        };

        match result {
            Ok(records) => {
                info!(count = records.len(), source = %self.title(), "loaded file records");
                records
            }
            Err(err) => {
                warn!(%err, source = %self.title(), "failed to load file records");
                Vec::new()
            }
        }
    }

    /// Human-readable label for the header line.
    pub fn title(&self) -> String {
        match self {
            FileSource::Demo => "demo".to_string(),
            FileSource::Api { url } => url.clone(),
            FileSource::Dir { path } => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_key_file_name_maps_to_name() {
        let body = r#"[{"file-name":"cat.png","size":"2.4 MB","modified":"2024-03-12 18:22:40"}]"#;
        let records: Vec<FileRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records[0].name, "cat.png");
        assert_eq!(records[0].size, "2.4 MB");
    }

    #[test]
    fn demo_source_loads_without_a_network() {
        let records = FileSource::Demo.load();
        assert!(!records.is_empty());
    }

    #[test]
    fn failed_fetch_yields_an_empty_list() {
        // Port 9 (discard) is not listening; the load must come back empty
        // instead of propagating the transport error.
        let source = FileSource::Api {
            url: "http://127.0.0.1:9/api".to_string(),
        };
        assert!(source.load().is_empty());
    }

    #[test]
    fn non_2xx_fetch_yields_an_empty_list() {
        let source = FileSource::Api {
            url: api::serve_once("HTTP/1.1 500 Internal Server Error"),
        };
        assert!(source.load().is_empty());
    }

    #[test]
    fn missing_directory_fails_at_construction() {
        assert!(FileSource::dir("/definitely/not/a/real/path").is_err());
    }
}
