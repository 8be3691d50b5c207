//! Keyboard selection over the filtered suggestions
//!
//! Navigation clamps at both ends instead of wrapping. Moving in either
//! direction from `Unselected` lands on the first item.

/// Navigation direction for arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    SelectedAt(usize),
}

impl Selection {
    /// Selected index, or `None` when nothing is highlighted
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Unselected => None,
            Selection::SelectedAt(index) => Some(index),
        }
    }

    pub fn is_selected(self, index: usize) -> bool {
        self.index() == Some(index)
    }

    pub fn navigate(&mut self, direction: Direction, len: usize) {
        match direction {
            Direction::Up => self.move_up(len),
            Direction::Down => self.move_down(len),
        }
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }

        *self = match *self {
            Selection::Unselected => Selection::SelectedAt(0),
            Selection::SelectedAt(index) => Selection::SelectedAt((index + 1).min(len - 1)),
        };
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.reset();
            return;
        }

        *self = match *self {
            Selection::Unselected => Selection::SelectedAt(0),
            Selection::SelectedAt(index) => Selection::SelectedAt(index.saturating_sub(1)),
        };
    }

    pub fn reset(&mut self) {
        *self = Selection::Unselected;
    }

    /// Drop a selection that no longer points into a list of `len` items
    pub fn clamp(&mut self, len: usize) {
        if matches!(*self, Selection::SelectedAt(index) if index >= len) {
            self.reset();
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
