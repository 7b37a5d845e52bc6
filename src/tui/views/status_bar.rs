//! Status bar view
//!
//! Shows the current mode, the print backend, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let (mode, mode_color) = if app.is_editing() {
        (" РЕДАКТИРОВАНИЕ ", Color::Yellow)
    } else {
        (" СОЗДАНИЕ ", Color::Green)
    };

    let mut spans = vec![
        Span::styled(
            mode,
            Style::default()
                .fg(Color::Black)
                .bg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("Печать: {}", app.settings.print_backend),
            Style::default().fg(Color::Cyan),
        ),
    ];

    let hints = match app.active_view {
        ActiveView::Create => " Tab:Поле  Ctrl+S:Сохранить  Esc:Назад  F1:Помощь ",
        ActiveView::History => " j/k:Выбор  p/e/d:Действия  q:Выход  ?:Помощь ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
