//! Receipt form view
//!
//! Title and note inputs with the submit hint. While editing, the block title
//! names the receipt and a cancel hint appears.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FormField};
use crate::tui::layout::FormLayout;

/// Render the form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let heading = match app.controller.edit_target() {
        Some(id) => format!(" Редактирование чека №{} ", id.to_uppercase()),
        None => " Новый чек ".to_string(),
    };

    let outer = Block::default()
        .title(heading)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let layout = FormLayout::new(inner);

    render_input(
        frame,
        app,
        FormField::Title,
        layout.title,
        Line::from(vec![
            Span::raw(" Название чека "),
            Span::styled("*", Style::default().fg(Color::Red)),
            Span::raw(" "),
        ]),
    );
    render_input(
        frame,
        app,
        FormField::Note,
        layout.note,
        Line::from(" Примечание "),
    );

    render_actions(frame, app, layout.actions);
}

fn render_input(frame: &mut Frame, app: &App, field: FormField, area: Rect, title: Line<'static>) {
    let border_color = if app.focused_field == field {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = match field {
        FormField::Title => &app.title_input,
        FormField::Note => &app.note_input,
    };
    frame.render_widget(input, inner);
}

fn render_actions(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" [Ctrl+S] ", key_style),
        Span::styled(
            app.controller.submit_label(),
            Style::default().fg(Color::Green),
        ),
    ];

    if app.is_editing() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[Esc] ", key_style));
        spans.push(Span::raw("Отменить"));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
