//! Suggestion list rendering
//!
//! Draws the list below the input field: either the filtered results with the
//! matched part of each one highlighted, or a placeholder message.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::{ListStatus, SuggestionMatcher};
use crate::app::App;
use crate::theme;
use crate::widgets::popup;

const POPUP_BORDER_HEIGHT: u16 = 2;
// Two border columns plus the selection prefix
const POPUP_PADDING: u16 = 4;
const MIN_POPUP_WIDTH: u16 = 32;
const SELECTED_PREFIX: &str = "► ";
const NORMAL_PREFIX: &str = "  ";

/// Render the suggestion list below the input field, kept inside `bounds`
///
/// Returns the list area for region tracking.
pub fn render_list(app: &mut App, frame: &mut Frame, input_area: Rect, bounds: Rect) -> Option<Rect> {
    let status = app.autocomplete.status();
    let results_len = app.autocomplete.results().len();

    let row_count = match status {
        ListStatus::Results => results_len.min(app.max_visible),
        _ => 1,
    };
    let content_width = match status.message() {
        Some(message) => message.width() + 1,
        None => app
            .autocomplete
            .results()
            .iter()
            .map(|s| s.width())
            .max()
            .unwrap_or(0),
    };

    let width = (content_width as u16)
        .saturating_add(POPUP_PADDING)
        .max(MIN_POPUP_WIDTH);
    let height = (row_count as u16).saturating_add(POPUP_BORDER_HEIGHT);
    let area = popup::popup_below_anchor(input_area, bounds, width, height);
    if area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let viewport = (area.height - POPUP_BORDER_HEIGHT) as usize;
    app.list_offset = scroll_offset(
        app.list_offset,
        app.autocomplete.active_index(),
        viewport,
        results_len,
    );

    let autocomplete = &app.autocomplete;
    let (items, title, border_color) = match status.message() {
        Some(message) => (
            vec![ListItem::new(Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(theme::list::MESSAGE_FG),
            )))],
            " Suggestions ".to_string(),
            theme::list::BORDER,
        ),
        None => {
            let query = autocomplete.debounced_query();
            let selection = autocomplete.selection();
            let items: Vec<ListItem> = autocomplete
                .results()
                .iter()
                .enumerate()
                .skip(app.list_offset)
                .take(viewport)
                .map(|(index, text)| item(text, query, selection.is_selected(index)))
                .collect();
            let title = format!(
                " Suggestions ({}/{}) ",
                results_len,
                autocomplete.suggestions().len()
            );
            (items, title, theme::list::BORDER_ACTIVE)
        }
    };

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme::list::BACKGROUND)),
    );
    frame.render_widget(list, area);

    Some(area)
}

/// One result row with the matched part highlighted
fn item<'a>(text: &'a str, query: &str, selected: bool) -> ListItem<'a> {
    let (base, prefix) = if selected {
        (
            Style::default()
                .fg(theme::list::ITEM_SELECTED_FG)
                .bg(theme::list::ITEM_SELECTED_BG)
                .add_modifier(theme::list::ITEM_SELECTED_MODIFIER),
            SELECTED_PREFIX,
        )
    } else {
        (
            Style::default()
                .fg(theme::list::ITEM_FG)
                .bg(theme::list::BACKGROUND),
            NORMAL_PREFIX,
        )
    };
    let matched = base
        .fg(theme::list::MATCH_FG)
        .add_modifier(theme::list::MATCH_MODIFIER);

    let mut spans = vec![Span::styled(prefix, base)];
    match SuggestionMatcher::highlight_span(text, query) {
        Some(span) => {
            let (before, inside, after) = SuggestionMatcher::split_highlight(text, span);
            spans.push(Span::styled(before, base));
            spans.push(Span::styled(inside, matched));
            spans.push(Span::styled(after, base));
        }
        None => spans.push(Span::styled(text, base)),
    }

    ListItem::new(Line::from(spans)).style(base)
}

/// First visible result index so that the selected row stays on screen
pub fn scroll_offset(current: usize, active: Option<usize>, viewport: usize, len: usize) -> usize {
    if viewport == 0 || len <= viewport {
        return 0;
    }

    let offset = current.min(len - viewport);
    match active {
        None => 0,
        Some(index) if index < offset => index,
        Some(index) if index >= offset + viewport => index + 1 - viewport,
        Some(_) => offset,
    }
}

#[cfg(test)]
#[path = "autocomplete_render_tests.rs"]
mod autocomplete_render_tests;
