// src/app/state.rs
//! Application state management.

use anyhow::Result;
use crossterm::event::KeyEvent;
use mime_guess::MimeGuess;
use ratatui::{
    Frame,
    widgets::{Block, Borders, ListState, Paragraph},
};
use ratatui_image::picker::{Picker, ProtocolType};

use crate::{
    config::Config,
    fs::{Classifier, detection},
    source::{FileRecord, FileSource},
    ui::{
        keybindings::{NavigationAction, key_to_action},
        layout::compute_layout,
        widgets::{FsLoader, MediaLoader, Modal, NullLoader, render_file_list, render_modal},
    },
};

const KEY_HINTS: &str = "↑/↓ select · Enter preview · Esc close · r reload · q quit";

/// Main application state.
pub struct App {
    /// Where the records came from (drives reload and media resolution)
    pub source: FileSource,
    /// Current record list, in presentation order
    pub records: Vec<FileRecord>,
    /// List widget state
    pub state: ListState,
    /// Currently selected index
    pub selected: usize,
    /// Extension classifier shared by rows and the modal
    pub classifier: Classifier,
    /// Media preview modal
    pub modal: Modal,

    /// Image picker for preview rendering
    picker: Picker,
    /// Detected MIME of the selected record, for the status line
    detail: Option<String>,
}

impl App {
    /// Create a new application instance from the parsed configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let classifier = config.classifier();
        let source = config.source()?;
        let records = source.load();

        // Only the directory source can hand real pixels to the modal;
        // demo/API identifiers are not local paths.
        let loader: Box<dyn MediaLoader> = match &source {
            FileSource::Dir { path } => Box::new(FsLoader { root: path.clone() }),
            _ => Box::new(NullLoader),
        };

        let mut state = ListState::default();
        state.select(Some(0));

        // Create picker with fallback if stdio query fails
        let mut picker =
            Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 12)));
        picker.set_protocol_type(ProtocolType::Kitty);

        let mut app = Self {
            source,
            records,
            state,
            selected: 0,
            classifier,
            modal: Modal::new(classifier, loader),
            picker,
            detail: None,
        };
        app.refresh_detail();
        Ok(app)
    }

    /// Handle a key event and return true if the app should quit.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key_to_action(&key) {
            NavigationAction::Quit => return true,
            NavigationAction::CloseModal => self.modal.close(),
            NavigationAction::Down => {
                if self.selected + 1 < self.records.len() {
                    self.selected += 1;
                    self.refresh_detail();
                }
            }
            NavigationAction::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                    self.refresh_detail();
                }
            }
            NavigationAction::Open => {
                if let Some(record) = self.records.get(self.selected) {
                    let name = record.name.clone();
                    self.modal.show(&name);
                }
            }
            NavigationAction::Reload => {
                self.records = self.source.load();
                if self.selected >= self.records.len() {
                    self.selected = self.records.len().saturating_sub(1);
                }
                self.refresh_detail();
            }
            NavigationAction::None => {}
        }

        self.state.select(Some(self.selected));
        false
    }

    /// Draw the application UI.
    pub fn draw(&mut self, f: &mut Frame<'_>) {
        let areas = compute_layout(f.area());

        let header = Block::default().borders(Borders::ALL).title(format!(
            " peeky: {} ({} files) ",
            self.source.title(),
            self.records.len()
        ));
        f.render_widget(header, areas.header);

        render_file_list(
            f,
            areas.list,
            "Files",
            &self.records,
            &self.classifier,
            &mut self.state,
        );

        f.render_widget(Paragraph::new(self.status_line()), areas.status);

        render_modal(f, &self.modal, &mut self.picker);
    }

    fn status_line(&self) -> String {
        match &self.detail {
            Some(mime) => format!("{mime} · {KEY_HINTS}"),
            None => KEY_HINTS.to_string(),
        }
    }

    /// Recompute the detected MIME for the selected record. For the
    /// directory source this sniffs file contents; elsewhere only the name
    /// is available.
    fn refresh_detail(&mut self) {
        self.detail = self.records.get(self.selected).map(|record| match &self.source {
            FileSource::Dir { path } => detection::detect_mime(&path.join(&record.name))
                .unwrap_or_else(|_| "application/octet-stream".to_string()),
            _ => MimeGuess::from_path(record.name.as_str())
                .first_or_octet_stream()
                .to_string(),
        });
    }
}
