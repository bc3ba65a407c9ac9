// src/ui/widgets/file_list.rs
//! File record list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::fs::Classifier;
use crate::source::FileRecord;
use crate::ui::icons::glyph_for;

/// One display line for a record: glyph, name, then the size and modified
/// strings verbatim.
pub fn row_line(record: &FileRecord, classifier: &Classifier) -> String {
    format!(
        "{} {:<40} {:>10}  {}",
        glyph_for(classifier.icon_class(&record.name)),
        record.name,
        record.size,
        record.modified
    )
}

/// Render the file record list. Rebuilt from `records` every frame, so a
/// repeat render with new data never leaves stale rows behind.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    records: &[FileRecord],
    classifier: &Classifier,
    state: &mut ListState,
) {
    let items: Vec<ListItem> = records
        .iter()
        .map(|record| ListItem::new(row_line(record, classifier)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::IconClass;

    fn record(name: &str) -> FileRecord {
        FileRecord {
            name: name.to_string(),
            size: "2.4 MB".to_string(),
            modified: "2024-03-12 18:22:40".to_string(),
        }
    }

    #[test]
    fn row_line_carries_all_record_fields() {
        let line = row_line(&record("cat.png"), &Classifier::default());
        assert!(line.starts_with(glyph_for(IconClass::Image)));
        assert!(line.contains("cat.png"));
        assert!(line.contains("2.4 MB"));
        assert!(line.contains("2024-03-12 18:22:40"));
    }

    #[test]
    fn row_line_uses_the_generic_glyph_for_unknown_extensions() {
        let line = row_line(&record("Makefile"), &Classifier::default());
        assert!(line.starts_with(glyph_for(IconClass::Generic)));
    }
}
