use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Input field state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create a new InputState
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type to filter suggestions");

        Self { textarea }
    }

    /// Get the current input text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Replace the whole line, leaving the cursor at the end
    pub fn replace_with(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputState")
            .field("query", &self.query())
            .finish_non_exhaustive()
    }
}
