//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Помощь ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(get_help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Общие клавиши"),
        Line::from(""),
        key_line("Ctrl+C", "Выход"),
        key_line("q", "Выход (вне формы)"),
        key_line("?/F1", "Показать/скрыть помощь"),
        key_line("1/2", "Создать чек / История (вне формы)"),
        Line::from(""),
    ];

    match app.active_view {
        ActiveView::Create => {
            lines.push(heading("Форма чека"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Следующее поле"));
            lines.push(key_line("Shift+Tab", "Предыдущее поле"));
            lines.push(key_line("Enter", "Новая строка в примечании"));
            lines.push(key_line("Ctrl+S/F2", app.controller.submit_label()));
            lines.push(key_line("Esc", "Отменить редактирование / к истории"));
        }
        ActiveView::History => {
            lines.push(heading("История"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Выбор чека"));
            lines.push(key_line("g/G", "Первый / последний"));
            lines.push(key_line("p", "Напечатать снова"));
            lines.push(key_line("e/Enter", "Редактировать"));
            lines.push(key_line("d", "Удалить"));
            lines.push(key_line("n/Tab", "К форме"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        format!("Документы: {}", app.paths.print_dir().display()),
        Style::default().fg(Color::DarkGray),
    )]));
    lines.push(Line::from(vec![Span::styled(
        "Нажмите любую клавишу, чтобы закрыть",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
