//! History view
//!
//! Receipts newest first, with the per-item actions.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{note_preview, truncate};
use crate::models::Receipt;
use crate::tui::app::App;

/// Render the history list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let receipts = app.receipts();

    let block = Block::default()
        .title(format!(" История чеков ({}) ", receipts.len()))
        .title_bottom(Line::from(" p:Печать  e:Изменить  d:Удалить ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if receipts.is_empty() {
        let text = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "История чеков пуста",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Создайте первый чек на вкладке «Создать чек» (клавиша 1)",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .centered()
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let editing = app.controller.edit_target();
    let title_width = (area.width as usize).saturating_sub(40).clamp(10, 40);

    let items: Vec<ListItem> = receipts
        .iter()
        .map(|receipt| {
            let marker = if editing.as_ref() == Some(&receipt.id) {
                Span::styled("✎ ", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("  ")
            };
            ListItem::new(receipt_lines(receipt, marker, title_width))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn receipt_lines(receipt: &Receipt, marker: Span<'static>, title_width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        marker,
        Span::styled(
            format!("{:width$}", truncate(&receipt.title, title_width), width = title_width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} {}", receipt.date, receipt.time),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  №{}", receipt.id.to_uppercase()),
            Style::default().fg(Color::DarkGray),
        ),
    ])];

    if !receipt.note.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("    {}", note_preview(&receipt.note, title_width + 20)),
            Style::default().fg(Color::Gray),
        )));
    }

    lines
}
