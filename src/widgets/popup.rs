use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly below `anchor`, clamped so it stays inside `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bounds_bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(bounds_bottom.saturating_sub(popup_y)),
    }
}

/// Area inside a one-cell border
pub fn inner_rect(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
