// src/source/demo.rs
//! Built-in record list for demo mode.

use super::FileRecord;

/// A fixed list with one file per icon class, handy for eyeballing the
/// renderer and the modal without a directory or an endpoint.
pub fn records() -> Vec<FileRecord> {
    [
        ("sunset-over-harbor.jpg", "2.4 MB", "2024-03-12 18:22:40"),
        ("launch-day.mp4", "148.6 MB", "2024-05-01 09:14:03"),
        ("quarterly-report.pdf", "812.3 KB", "2024-04-30 16:51:27"),
        ("site-backup.zip", "1.2 GB", "2024-02-19 02:00:11"),
        ("favicon.ico", "4.2 KB", "2023-11-08 11:45:56"),
        ("wiring-diagram.svg", "96.1 KB", "2024-01-23 14:09:32"),
        ("notes.txt", "1.8 KB", "2024-05-02 08:30:00"),
        ("teaser-trailer.mkv", "96.0 MB", "2023-12-25 20:15:44"),
        ("README", "3.1 KB", "2023-10-02 10:01:19"),
    ]
    .into_iter()
    .map(|(name, size, modified)| FileRecord {
        name: name.to_string(),
        size: size.to_string(),
        modified: modified.to_string(),
    })
    .collect()
}
