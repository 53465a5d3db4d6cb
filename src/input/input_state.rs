use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

pub const PLACEHOLDER: &str = "Enter City...";

/// City input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

        Self { textarea }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Feed a key to the text area
    ///
    /// Returns true if the text changed. Keys that would open a second line
    /// are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if inserts_newline(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    /// Insert pasted text at the cursor, flattened to one line
    pub fn insert_text(&mut self, text: &str) -> bool {
        let flattened = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(flattened)
    }

    /// Replace the whole line, cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }
}

fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
