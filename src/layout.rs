//! Layout module for tracking UI component regions
//!
//! The `LayoutRegions` struct records where components were drawn on the
//! last frame, and `region_at()` maps a screen position back to a component
//! for mouse handling.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SuggestionList,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggestion_list: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Component at the given screen position. The suggestion list is drawn on
/// top, so it wins when regions overlap.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    if regions
        .suggestion_list
        .is_some_and(|rect| contains(rect, column, row))
    {
        return Some(Region::SuggestionList);
    }

    if regions
        .input_field
        .is_some_and(|rect| contains(rect, column, row))
    {
        return Some(Region::InputField);
    }

    None
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
