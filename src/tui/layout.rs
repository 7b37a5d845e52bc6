//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: navigation bar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Navigation bar with the view tabs
    pub nav: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Navigation
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            nav: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the receipt form
pub struct FormLayout {
    /// Title input
    pub title: Rect,
    /// Note input
    pub note: Rect,
    /// Submit/cancel hints
    pub actions: Rect,
}

impl FormLayout {
    /// Calculate form layout inside the form block
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(4),    // Note
                Constraint::Length(1), // Actions
            ])
            .split(area);

        Self {
            title: chunks[0],
            note: chunks[1],
            actions: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for the `index`-th toast, stacked down from the top-right corner
pub fn toast_rect(index: u16, r: Rect) -> Option<Rect> {
    const WIDTH: u16 = 44;
    const HEIGHT: u16 = 4;

    let width = WIDTH.min(r.width);
    let y = r.y + 1 + index * HEIGHT;
    if y + HEIGHT > r.y + r.height {
        return None;
    }
    Some(Rect::new(
        r.x + r.width.saturating_sub(width + 1),
        y,
        width,
        HEIGHT,
    ))
}
