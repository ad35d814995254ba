//! Body editor module
//!
//! Multi-line text editor for request bodies. The body is free text: nothing
//! here validates it, and formatting only happens when asked for.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

/// Cursor marker used when rendering the editor
pub const CURSOR: char = '│';

#[derive(Debug, Clone, Default)]
pub struct BodyEditor {
    /// The content being edited
    content: String,

    /// Cursor position (byte offset in content)
    cursor: usize,
}

impl BodyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with the cursor marker inserted, for display
    pub fn content_with_cursor(&self) -> String {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        let mut rendered = String::with_capacity(self.content.len() + CURSOR.len_utf8());
        rendered.push_str(&self.content[..cursor]);
        rendered.push(CURSOR);
        rendered.push_str(&self.content[cursor..]);
        rendered
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Replace all content, cursor at the end
    pub fn set_content(&mut self, content: String) {
        self.cursor = content.len();
        self.content = content;
    }

    pub fn insert_char(&mut self, c: char) {
        // Ensure cursor is at a valid UTF-8 boundary
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert(cursor, c);
        self.cursor = cursor + c.len_utf8();
    }

    pub fn insert_str(&mut self, s: &str) {
        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.insert_str(cursor, s);
        self.cursor = cursor + s.len();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert pasted text, converting curly quotes to straight ones
    pub fn insert_str_normalized(&mut self, s: &str) {
        let normalized = s
            .replace(['\u{201C}', '\u{201D}'], "\"")
            .replace(['\u{2018}', '\u{2019}'], "'");
        self.insert_str(&normalized);
    }

    /// Backspace
    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut cursor = self.cursor - 1;
        while cursor > 0 && !self.content.is_char_boundary(cursor) {
            cursor -= 1;
        }

        self.content.remove(cursor);
        self.cursor = cursor;
        true
    }

    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let cursor = self.clamp_cursor_to_boundary(self.cursor);
        self.content.remove(cursor);
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let mut new_cursor = self.cursor - 1;
        while new_cursor > 0 && !self.content.is_char_boundary(new_cursor) {
            new_cursor -= 1;
        }

        self.cursor = new_cursor;
        true
    }

    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }

        let mut new_cursor = self.cursor + 1;
        while new_cursor < self.content.len() && !self.content.is_char_boundary(new_cursor) {
            new_cursor += 1;
        }

        self.cursor = new_cursor.min(self.content.len());
        true
    }

    /// Move to the same column on the previous line, or the end of it if
    /// shorter
    pub fn move_cursor_up(&mut self) -> bool {
        let line_start = self.line_start(self.cursor);
        if line_start == 0 {
            return false;
        }
        let column = self.content[line_start..self.cursor].chars().count();
        let prev_start = self.line_start(line_start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
        true
    }

    pub fn move_cursor_down(&mut self) -> bool {
        let Some(newline) = self.content[self.cursor..].find('\n') else {
            return false;
        };
        let line_start = self.line_start(self.cursor);
        let column = self.content[line_start..self.cursor].chars().count();
        self.cursor = self.offset_in_line(self.cursor + newline + 1, column);
        true
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Pretty-print the content if it parses as JSON
    pub fn format_json(&mut self) -> Result<(), String> {
        let json = serde_json::from_str::<Value>(&self.content)
            .map_err(|e| format!("Invalid JSON: {e}"))?;
        self.content = serde_json::to_string_pretty(&json).map_err(|e| e.to_string())?;
        self.cursor = self.content.len();
        Ok(())
    }

    /// Handle a key event - returns true if the event was handled
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.insert_newline();
                true
            }
            KeyCode::Tab => {
                self.insert_str("  ");
                true
            }
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Up => self.move_cursor_up(),
            KeyCode::Down => self.move_cursor_down(),
            KeyCode::Home => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Handle paste batching - collects multiple character events in quick succession
    ///
    /// Terminal pastes arrive as a burst of key events. Returns the number of
    /// characters inserted.
    pub fn handle_paste_batch(&mut self, initial_char: char) -> usize {
        let mut text = String::from(initial_char);
        let mut count = 1;

        // Drain any immediately available character events
        while let Ok(true) = crossterm::event::poll(std::time::Duration::from_millis(0)) {
            match crossterm::event::read() {
                Ok(Event::Key(next_key)) => match next_key.code {
                    KeyCode::Char(c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                        text.push(c);
                    }
                    KeyCode::Enter => text.push('\n'),
                    _ => break,
                },
                _ => break,
            }
            count += 1;
        }

        self.insert_str_normalized(&text);
        count
    }

    fn line_start(&self, pos: usize) -> usize {
        self.content[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line = &self.content[line_start..];
        let line_len = line.find('\n').unwrap_or(line.len());
        line[..line_len]
            .char_indices()
            .nth(column)
            .map(|(i, _)| line_start + i)
            .unwrap_or(line_start + line_len)
    }

    /// Clamp cursor to valid UTF-8 character boundary
    fn clamp_cursor_to_boundary(&self, cursor: usize) -> usize {
        let mut pos = cursor.min(self.content.len());
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}
