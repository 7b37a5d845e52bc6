//! Navigation bar
//!
//! Tabs for the form and the history, with the receipt count.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Tab labels for the current state
pub fn tab_titles(receipt_count: usize) -> [String; 2] {
    [
        "Создать чек".to_string(),
        format!("История ({})", receipt_count),
    ]
}

/// Render the navigation bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let titles = tab_titles(app.receipt_count())
        .into_iter()
        .enumerate()
        .map(|(i, title)| Line::from(format!("[{}] {}", i + 1, title)));

    let selected = match app.active_view {
        ActiveView::Create => 0,
        ActiveView::History => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" 📋 Чеки ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
