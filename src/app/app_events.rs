use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_events;
use crate::layout::region_at;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only key presses, to avoid duplicates on terminals that report releases
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.help.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.help.close();
            }
            return;
        }

        if self.handle_suggestion_keys(key) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.search(),
            _ => {
                if self.input.handle_key(key) {
                    self.on_query_changed();
                }
            }
        }
    }

    /// Keys that work regardless of popups
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if key.code == KeyCode::F(1) {
            self.help.toggle();
            return true;
        }

        false
    }

    /// Navigation and commit keys; Enter is swallowed even with no list open
    fn handle_suggestion_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down if self.autocomplete.is_visible() => {
                self.autocomplete.select_next();
                true
            }
            KeyCode::Up if self.autocomplete.is_visible() => {
                self.autocomplete.select_previous();
                true
            }
            KeyCode::Esc if self.autocomplete.is_visible() => {
                self.autocomplete.dismiss();
                true
            }
            KeyCode::Enter => {
                self.commit_selected();
                true
            }
            _ => false,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            mouse_events::handle_click(self, region, mouse);
        }
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.help.visible {
            return;
        }
        if self.input.insert_text(&text) {
            self.on_query_changed();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
