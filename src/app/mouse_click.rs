//! Mouse click handling
//!
//! A left click on a rendered suggestion picks it.

use std::time::Instant;

use ratatui::crossterm::event::MouseEvent;
use ratatui::layout::Rect;

use super::app_state::App;
use crate::layout::Region;
use crate::widgets::popup;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent, now: Instant) {
    if region == Some(Region::SuggestionList) {
        click_suggestion_list(app, mouse, now);
    }
}

fn click_suggestion_list(app: &mut App, mouse: MouseEvent, now: Instant) {
    let Some(list_rect) = app.layout_regions.suggestion_list else {
        return;
    };

    let Some(index) = suggestion_at(list_rect, app.list_offset, mouse.column, mouse.row) else {
        return;
    };

    // Placeholder rows and rows past the end map to nothing
    let Some(text) = app.autocomplete.results().get(index).cloned() else {
        return;
    };

    app.pick_suggestion_at(&text, now);
}

/// Result index under a screen position inside the bordered list
pub fn suggestion_at(list_rect: Rect, offset: usize, column: u16, row: u16) -> Option<usize> {
    let inner = popup::inner_rect(list_rect);

    if column < inner.x
        || column >= inner.x.saturating_add(inner.width)
        || row < inner.y
        || row >= inner.y.saturating_add(inner.height)
    {
        return None;
    }

    Some(offset + (row - inner.y) as usize)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
