// src/config/mod.rs
//! Command line configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::fs::Classifier;
use crate::source::FileSource;

/// Terminal file browser with image/video preview.
#[derive(Debug, Parser)]
#[command(name = "peeky", version, about)]
pub struct Config {
    /// Directory to browse
    #[arg(default_value = ".", value_name = "DIR")]
    pub dir: PathBuf,

    /// Fetch the file list from this HTTP endpoint instead of a directory
    #[arg(long, value_name = "URL", conflicts_with = "demo")]
    pub api: Option<String>,

    /// Use the built-in demo file list
    #[arg(long)]
    pub demo: bool,

    /// Do not treat .ico files as previewable images
    #[arg(long)]
    pub no_ico: bool,

    /// Directory the log file is written to
    #[arg(long, env = "PEEKY_LOG_DIR", default_value = ".", value_name = "DIR")]
    pub log_dir: PathBuf,
}

impl Config {
    pub fn classifier(&self) -> Classifier {
        Classifier {
            ico_as_image: !self.no_ico,
        }
    }

    /// Resolve the record source: api beats demo beats directory.
    pub fn source(&self) -> Result<FileSource> {
        if let Some(url) = &self.api {
            Ok(FileSource::Api { url: url.clone() })
        } else if self.demo {
            Ok(FileSource::Demo)
        } else {
            FileSource::dir(&self.dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_flag_selects_the_api_source() {
        let config = Config::parse_from(["peeky", "--api", "http://localhost:8080/api"]);
        assert!(matches!(
            config.source().unwrap(),
            FileSource::Api { url } if url == "http://localhost:8080/api"
        ));
    }

    #[test]
    fn demo_flag_selects_the_demo_source() {
        let config = Config::parse_from(["peeky", "--demo"]);
        assert!(matches!(config.source().unwrap(), FileSource::Demo));
    }

    #[test]
    fn no_ico_narrows_the_image_set() {
        let config = Config::parse_from(["peeky", "--no-ico", "--demo"]);
        assert!(!config.classifier().ico_as_image);
        assert!(Config::parse_from(["peeky", "--demo"]).classifier().ico_as_image);
    }
}
