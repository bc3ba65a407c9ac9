// src/fs/detection.rs
//! Extension-based classification plus MIME detection for local files.
//!
//! Preview and icon classification are pure functions of the lowercase
//! suffix after the last `.` in a name; they never touch file contents.
//! MIME detection (magic numbers with extension fallback) exists only for
//! the status line and stays out of the classification path.

use std::path::Path;

use anyhow::Result;
use infer::Infer;
use mime_guess::MimeGuess;

/// Media kinds the preview modal can handle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MediaKind {
    Image,
    Video,
    Unsupported,
}

/// Glyph classes for file list rows.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum IconClass {
    Image,
    Video,
    Document,
    Archive,
    Generic,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv"];

/// Extension -> kind/glyph mapper.
///
/// The source variants disagreed on whether `ico` counts as an image, so
/// its membership is the one configuration knob.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    pub ico_as_image: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self { ico_as_image: true }
    }
}

impl Classifier {
    /// Classify a file name for the preview modal.
    pub fn kind(&self, name: &str) -> MediaKind {
        let ext = extension(name);
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) || (self.ico_as_image && ext == "ico") {
            MediaKind::Image
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Unsupported
        }
    }

    /// Classify a file name for its row glyph. Unknown or missing
    /// extensions land on `Generic`; that is the default branch, not an
    /// error.
    pub fn icon_class(&self, name: &str) -> IconClass {
        match self.kind(name) {
            MediaKind::Image => IconClass::Image,
            MediaKind::Video => IconClass::Video,
            MediaKind::Unsupported => match extension(name).as_str() {
                "pdf" => IconClass::Document,
                "zip" => IconClass::Archive,
                _ => IconClass::Generic,
            },
        }
    }
}

/// Lowercase substring after the last `.`; the whole lowercase name when
/// there is no dot (suffix-pop semantics).
pub fn extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Detect a MIME type for a local file.
///
/// 1. Magic-number sniffing via `infer`
/// 2. Fallback to extension-based lookup via `mime_guess`
pub fn detect_mime(path: &Path) -> Result<String> {
    if let Some(kind) = Infer::new().get_from_path(path)? {
        return Ok(kind.mime_type().to_string());
    }

    Ok(MimeGuess::from_path(path)
        .first_or_octet_stream() // defaults to application/octet-stream
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_matches_extension_sets() {
        let c = Classifier::default();
        for name in ["a.png", "b.jpg", "c.jpeg", "d.svg", "e.ico"] {
            assert_eq!(c.kind(name), MediaKind::Image, "{name}");
        }
        for name in ["clip.mp4", "movie.mkv"] {
            assert_eq!(c.kind(name), MediaKind::Video, "{name}");
        }
        for name in ["doc.pdf", "arch.zip", "notes.txt", "no_extension"] {
            assert_eq!(c.kind(name), MediaKind::Unsupported, "{name}");
        }
    }

    #[test]
    fn classification_is_case_insensitive() {
        let c = Classifier::default();
        assert_eq!(c.kind("PHOTO.PNG"), MediaKind::Image);
        assert_eq!(c.kind("Movie.MKV"), MediaKind::Video);
        assert_eq!(c.icon_class("REPORT.PDF"), IconClass::Document);
    }

    #[test]
    fn ico_membership_is_configurable() {
        let without = Classifier { ico_as_image: false };
        assert_eq!(without.kind("favicon.ico"), MediaKind::Unsupported);
        assert_eq!(without.icon_class("favicon.ico"), IconClass::Generic);
        assert_eq!(Classifier::default().kind("favicon.ico"), MediaKind::Image);
    }

    #[test]
    fn icon_classes_cover_the_table() {
        let c = Classifier::default();
        assert_eq!(c.icon_class("a.jpeg"), IconClass::Image);
        assert_eq!(c.icon_class("b.mp4"), IconClass::Video);
        assert_eq!(c.icon_class("c.pdf"), IconClass::Document);
        assert_eq!(c.icon_class("d.zip"), IconClass::Archive);
        assert_eq!(c.icon_class("e.rs"), IconClass::Generic);
        assert_eq!(c.icon_class("Makefile"), IconClass::Generic);
    }

    #[test]
    fn extension_pops_the_last_suffix() {
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("NOTES.TXT"), "txt");
        assert_eq!(extension("no_dot"), "no_dot");
    }
}
