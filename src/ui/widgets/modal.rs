// src/ui/widgets/modal.rs
//! Media preview modal.

use std::path::PathBuf;

use image::DynamicImage;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{Image, Resize, picker::Picker};
use tracing::debug;

use crate::fs::{Classifier, MediaKind, detection};
use crate::ui::layout::modal_area;

/// Supplies decoded image data for a file identifier. Injected so the
/// modal itself never touches the filesystem or the network.
pub trait MediaLoader {
    fn load(&self, identifier: &str) -> Option<DynamicImage>;
}

/// Reads images relative to a local root directory.
pub struct FsLoader {
    pub root: PathBuf,
}

impl MediaLoader for FsLoader {
    fn load(&self, identifier: &str) -> Option<DynamicImage> {
        let bytes = std::fs::read(self.root.join(identifier)).ok()?;
        image::load_from_memory(&bytes).ok()
    }
}

/// For sources whose identifiers are not local paths; every image preview
/// falls back to its placeholder.
pub struct NullLoader;

impl MediaLoader for NullLoader {
    fn load(&self, _identifier: &str) -> Option<DynamicImage> {
        None
    }
}

/// Current modal content, at most one at a time.
#[derive(Debug)]
pub enum Media {
    /// `image` is None when the loader could not produce pixels; the src
    /// string then doubles as the alt text.
    Image {
        src: String,
        image: Option<DynamicImage>,
    },
    /// Playback placeholder; the terminal cannot decode video.
    Video { src: String },
    /// Unsupported file type notice.
    Notice { message: String },
}

/// The preview modal. Owns its visibility and its single media slot.
pub struct Modal {
    classifier: Classifier,
    loader: Box<dyn MediaLoader>,
    visible: bool,
    content: Option<Media>,
}

impl Modal {
    pub fn new(classifier: Classifier, loader: Box<dyn MediaLoader>) -> Self {
        Self {
            classifier,
            loader,
            visible: false,
            content: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&Media> {
        self.content.as_ref()
    }

    /// Swap the modal to `identifier`.
    ///
    /// Prior content is dropped and the modal hidden before the new name is
    /// classified. That reset runs on every call, including the first, so
    /// repeated invocations always leave at most one media element behind.
    pub fn show(&mut self, identifier: &str) {
        self.content = None;
        self.visible = false;

        let kind = self.classifier.kind(identifier);
        debug!(identifier, ?kind, "opening preview");

        let media = match kind {
            MediaKind::Image => Media::Image {
                src: identifier.to_string(),
                image: self.loader.load(identifier),
            },
            MediaKind::Video => Media::Video {
                src: identifier.to_string(),
            },
            MediaKind::Unsupported => Media::Notice {
                message: format!(
                    "Unsupported file type: {}",
                    detection::extension(identifier)
                ),
            },
        };

        self.content = Some(media);
        self.visible = true;
    }

    /// Hide the modal and drop whatever it was showing.
    pub fn close(&mut self) {
        self.content = None;
        self.visible = false;
    }
}

/// Render the modal as a centered popup over the frame. A hidden modal
/// renders nothing.
pub fn render_modal(f: &mut Frame<'_>, modal: &Modal, picker: &mut Picker) {
    if !modal.is_visible() {
        return;
    }

    let area = modal_area(f.area());
    f.render_widget(Clear, area);

    let block = Block::default().borders(Borders::ALL).title(" Preview ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    match modal.content() {
        Some(Media::Image { src, image }) => render_image(f, inner, src, image.as_ref(), picker),
        Some(Media::Video { src }) => render_video(f, inner, src),
        Some(Media::Notice { message }) => {
            f.render_widget(
                Paragraph::new(message.as_str())
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        None => {}
    }
}

fn render_image(
    f: &mut Frame<'_>,
    area: Rect,
    src: &str,
    image: Option<&DynamicImage>,
    picker: &mut Picker,
) {
    if let Some(img) = image {
        // protocol size uses 0,0 origin but same width/height in cells
        let proto_size = Rect::new(0, 0, area.width, area.height);
        if let Ok(proto) = picker.new_protocol(img.clone(), proto_size, Resize::Fit(None)) {
            f.render_widget(Image::new(&proto), area);
            return;
        }
    }

    // No pixels (remote source or undecodable file): show the alt text,
    // which is the src string.
    f.render_widget(
        Paragraph::new(src)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_video(f: &mut Frame<'_>, area: Rect, src: &str) {
    let lines = vec![
        Line::from(src),
        Line::from(""),
        Line::from(vec![
            Span::styled(" ⏮ ", Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(" ⏵ ", Style::default().fg(Color::Green)),
            Span::raw(" "),
            Span::styled(" ⏭ ", Style::default().fg(Color::Cyan)),
        ]),
        Line::from("video playback is not available in a terminal"),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
