//! Text input widget
//!
//! A text input field with cursor support. The cursor counts characters, not
//! bytes, so Cyrillic input edits cleanly. Multi-line inputs accept newlines
//! and scroll to keep the cursor row visible.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Whether newlines are accepted
    pub multiline: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Accept newlines
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Replace the content and move the cursor to the end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor. Newlines are dropped unless multiline.
    pub fn insert(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Row and column of the cursor
    fn cursor_position(&self) -> (usize, usize) {
        let before: String = self.content.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|line| line.chars().count())
            .unwrap_or(0);
        (row, col)
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.content.is_empty() && !self.focused {
            buf.set_string(
                area.x,
                area.y,
                &self.placeholder,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let text_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let (cursor_row, cursor_col) = self.cursor_position();
        let height = area.height as usize;
        let scroll = cursor_row.saturating_sub(height - 1);

        for (i, line) in self.content.split('\n').skip(scroll).take(height).enumerate() {
            buf.set_stringn(
                area.x,
                area.y + i as u16,
                line,
                area.width as usize,
                text_style,
            );
        }

        if self.focused {
            let cursor_x = area.x + cursor_col as u16;
            let cursor_y = area.y + (cursor_row - scroll) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self
                    .content
                    .chars()
                    .nth(self.cursor)
                    .filter(|c| *c != '\n')
                    .unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    cursor_y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_editing() {
        let mut input = TextInput::new();
        for c in "Чек".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "Чек");
        assert_eq!(input.cursor(), 3);

        input.move_left();
        input.insert('!');
        assert_eq!(input.value(), "Че!к");

        input.backspace();
        input.delete();
        assert_eq!(input.value(), "Че");
    }

    #[test]
    fn test_newline_only_when_multiline() {
        let mut single = TextInput::new();
        single.insert('a');
        single.insert('\n');
        assert_eq!(single.value(), "a");

        let mut multi = TextInput::new().multiline(true);
        multi.set_value("Milk");
        multi.insert('\n');
        multi.insert('E');
        assert_eq!(multi.value(), "Milk\nE");
        assert_eq!(multi.cursor_position(), (1, 1));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new();
        input.set_value("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_start();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "ab");
        input.clear();
        assert_eq!(input.cursor(), 0);
        assert!(input.value().is_empty());
    }

    #[test]
    fn test_render_multiline() {
        let mut input = TextInput::new().multiline(true);
        input.set_value("Milk\nEggs");
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);

        (&input).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "M");
        assert_eq!(buf[(0, 1)].symbol(), "E");
    }
}
