use std::time::{Duration, Instant};

use super::input_state::InputState;
use crate::autocomplete::Autocomplete;
use crate::config::Config;
use crate::layout::LayoutRegions;

/// Longest the event loop sleeps while no debounce deadline is pending
pub const IDLE_POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Application state
#[derive(Debug)]
pub struct App {
    pub input: InputState,
    pub autocomplete: Autocomplete,
    pub layout_regions: LayoutRegions,
    /// Index of the first result drawn in the list
    pub list_offset: usize,
    pub max_visible: usize,
    /// One-off message shown in the footer until the next edit
    pub notice: Option<String>,
    pub should_quit: bool,
    /// Text printed on exit when the query was accepted
    pub output: Option<String>,
}

impl App {
    /// Create a new App over a fixed suggestion list
    pub fn new(suggestions: Vec<String>, config: &Config) -> Self {
        Self {
            input: InputState::new(),
            autocomplete: Autocomplete::new(suggestions, config.debounce.delay()),
            layout_regions: LayoutRegions::new(),
            list_offset: 0,
            max_visible: config.list.max_visible.max(1),
            notice: None,
            should_quit: false,
            output: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Get the current input text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout_at(Instant::now())
    }

    pub fn poll_timeout_at(&self, now: Instant) -> Duration {
        self.autocomplete
            .time_until_due(now)
            .map_or(IDLE_POLL_TIMEOUT, |due| due.min(IDLE_POLL_TIMEOUT))
    }

    /// Let a settled query refresh the results. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let changed = self.autocomplete.tick_at(now);
        if changed {
            self.list_offset = 0;
        }
        changed
    }

    /// Accept the highlighted suggestion into the input field
    pub fn commit_selection_at(&mut self, now: Instant) {
        if let Some(text) = self.autocomplete.on_commit_at(now) {
            self.input.replace_with(&text);
            self.list_offset = 0;
        }
    }

    /// Accept a suggestion chosen with the mouse
    pub fn pick_suggestion_at(&mut self, text: &str, now: Instant) {
        self.autocomplete.on_pick_at(text, now);
        self.input.replace_with(text);
        self.list_offset = 0;
    }

    /// Exit without output
    pub fn quit(&mut self) {
        self.autocomplete.teardown();
        self.should_quit = true;
    }

    /// Exit and print the current input text
    pub fn accept_query(&mut self) {
        self.output = Some(self.query().to_string());
        self.quit();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
