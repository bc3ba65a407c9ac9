// src/ui/layout.rs
//! Layout computation for the UI areas.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed screen areas for one frame.
pub struct ScreenAreas {
    /// Header line with the source label
    pub header: Rect,
    /// File list
    pub list: Rect,
    /// Status/hint line at the bottom
    pub status: Rect,
}

/// Split the full frame into header, list and status areas.
pub fn compute_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        list: chunks[1],
        status: chunks[2],
    }
}

/// Centered popup area for the preview modal, 60% wide and 70% tall.
pub fn modal_area(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_area_stays_inside_the_frame() {
        let frame = Rect::new(0, 0, 100, 40);
        let modal = modal_area(frame);
        assert!(modal.x >= frame.x);
        assert!(modal.y >= frame.y);
        assert!(modal.right() <= frame.right());
        assert!(modal.bottom() <= frame.bottom());
        assert!(modal.width > 0 && modal.height > 0);
    }

    #[test]
    fn layout_reserves_header_and_status_lines() {
        let areas = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.list.height, 20);
    }
}
