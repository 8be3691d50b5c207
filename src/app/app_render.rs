use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::autocomplete::autocomplete_render;
use crate::theme;

const FOOTER_HINTS: &str =
    " ↑/↓: Navigate | Enter: Select | Click: Pick | Ctrl+Q: Output Query | Esc: Quit";

impl App {
    /// Render the UI: input on top, suggestions below it, key hints at the bottom
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Input field
            Constraint::Min(0),    // Suggestion list
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

        let input_area = layout[0];
        let list_bounds = Rect {
            height: layout[0].height + layout[1].height,
            ..layout[0]
        };
        let footer_area = layout[2];

        self.layout_regions.clear();

        self.render_input_field(frame, input_area);
        self.layout_regions.input_field = Some(input_area);

        self.layout_regions.suggestion_list =
            autocomplete_render::render_list(self, frame, input_area, list_bounds);

        self.render_footer(frame, footer_area);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        self.input.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::styled(
                    " Search ",
                    Style::default().fg(theme::input::TITLE),
                ))
                .border_style(Style::default().fg(theme::input::BORDER)),
        );

        frame.render_widget(&self.input.textarea, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = match &self.notice {
            Some(notice) => Paragraph::new(format!(" {}", notice))
                .style(Style::default().fg(theme::footer::NOTICE)),
            None => Paragraph::new(FOOTER_HINTS).style(Style::default().fg(theme::footer::HINT)),
        };

        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
