use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::autocomplete::Direction;
use crate::layout::region_at;

impl App {
    /// Handle one terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        self.handle_event_at(event, Instant::now());
    }

    pub fn handle_event_at(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key, now);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                mouse_click::handle_click(self, region, mouse, now);
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match key.code {
            KeyCode::Down => self.autocomplete.on_navigate(Direction::Down),
            KeyCode::Up => self.autocomplete.on_navigate(Direction::Up),
            KeyCode::Enter => self.commit_selection_at(now),
            _ => self.handle_text_input(key, now),
        }
    }

    /// Handle keys that exit the application
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Esc / Ctrl+C: Exit without output
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.quit();
            return true;
        }

        // Shift+Enter / Alt+Enter / Ctrl+Q: Exit and output the input text
        // Note: Some terminals don't send Shift+Enter or Alt+Enter, so Ctrl+Q
        // is provided as a universal fallback.
        if (key.code == KeyCode::Enter
            && (key.modifiers.contains(KeyModifiers::SHIFT)
                || key.modifiers.contains(KeyModifiers::ALT)))
            || (key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.accept_query();
            return true;
        }

        false
    }

    fn handle_text_input(&mut self, key: KeyEvent, now: Instant) {
        // Keep the field single-line: textarea treats these as newlines
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('j') | KeyCode::Char('m'))
        {
            return;
        }

        let content_changed = self.input.textarea.input(key);
        if content_changed {
            let text = self.query().to_string();
            self.autocomplete.on_type_at(&text, now);
            self.notice = None;
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
