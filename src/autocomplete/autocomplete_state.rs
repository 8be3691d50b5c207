//! Autocomplete controller
//!
//! Owns the live query, its debounced copy, the filtered results and the
//! keyboard selection. Every user action is a named method; the event loop
//! calls `tick` after each wakeup so the debounced query can settle.

use std::time::{Duration, Instant};

use super::debouncer::Debouncer;
use super::matcher::SuggestionMatcher;
use super::selection::{Direction, Selection};

/// What the suggestion list area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Filtered results are available
    Results,
    /// The debounced query matched nothing
    NoSuggestions,
    /// The debounced query is empty
    StartTyping,
}

impl ListStatus {
    /// Placeholder text shown instead of the list
    pub fn message(self) -> Option<&'static str> {
        match self {
            ListStatus::Results => None,
            ListStatus::NoSuggestions => Some("No suggestions, keep typing"),
            ListStatus::StartTyping => Some("Start typing to search"),
        }
    }
}

#[derive(Debug)]
pub struct Autocomplete {
    suggestions: Vec<String>,
    query: String,
    debouncer: Debouncer<String>,
    debounced_query: String,
    results: Vec<String>,
    selection: Selection,
    torn_down: bool,
}

impl Autocomplete {
    pub fn new(suggestions: Vec<String>, delay: Duration) -> Self {
        Self {
            suggestions,
            query: String::new(),
            debouncer: Debouncer::new(delay),
            debounced_query: String::new(),
            results: Vec::new(),
            selection: Selection::Unselected,
            torn_down: false,
        }
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Live text of the input box
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn active_index(&self) -> Option<usize> {
        self.selection.index()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn active_suggestion(&self) -> Option<&str> {
        self.active_index()
            .and_then(|index| self.results.get(index))
            .map(String::as_str)
    }

    pub fn status(&self) -> ListStatus {
        if !self.results.is_empty() {
            ListStatus::Results
        } else if !self.debounced_query.is_empty() {
            ListStatus::NoSuggestions
        } else {
            ListStatus::StartTyping
        }
    }

    /// Deadline of the pending debounced query, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The input text was edited
    pub fn on_type(&mut self, text: &str) {
        self.on_type_at(text, Instant::now());
    }

    pub fn on_type_at(&mut self, text: &str, now: Instant) {
        self.selection.reset();
        self.set_query(text, now);
    }

    /// Arrow key navigation; ignored while there is nothing to select
    pub fn on_navigate(&mut self, direction: Direction) {
        if self.results.is_empty() {
            return;
        }
        self.selection.navigate(direction, self.results.len());
    }

    /// Accept the highlighted suggestion. Returns the accepted text, or
    /// `None` when nothing is highlighted.
    pub fn on_commit(&mut self) -> Option<String> {
        self.on_commit_at(Instant::now())
    }

    pub fn on_commit_at(&mut self, now: Instant) -> Option<String> {
        if self.torn_down {
            return None;
        }
        let chosen = self.active_suggestion()?.to_string();
        log::debug!("Committed suggestion {:?}", chosen);
        self.accept(&chosen, now);
        Some(chosen)
    }

    /// Accept a suggestion chosen with the mouse
    pub fn on_pick(&mut self, text: &str) {
        self.on_pick_at(text, Instant::now());
    }

    pub fn on_pick_at(&mut self, text: &str, now: Instant) {
        log::debug!("Picked suggestion {:?}", text);
        self.accept(text, now);
    }

    /// Release the debounced query if it has settled. Returns whether the
    /// visible state changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }

        let Some(settled) = self.debouncer.poll_at(now) else {
            return false;
        };

        self.results = SuggestionMatcher::filter(&settled, &self.suggestions);
        self.selection.reset();
        log::debug!(
            "Debounced query {:?} matched {} of {} suggestions",
            settled,
            self.results.len(),
            self.suggestions.len()
        );
        self.debounced_query = settled;
        true
    }

    /// Cancel any pending debounce. Later ticks leave the state untouched.
    pub fn teardown(&mut self) {
        if self.debouncer.is_pending() {
            log::debug!("Cancelled pending debounce on teardown");
        }
        self.debouncer.cancel();
        self.torn_down = true;
    }

    /// Always re-observes the accepted text, so the cleared list is rebuilt
    /// after the delay even when the text equals the debounced query.
    fn accept(&mut self, text: &str, now: Instant) {
        if self.torn_down {
            return;
        }
        self.results.clear();
        self.selection.reset();
        self.query = text.to_string();
        self.debouncer.observe_at(self.query.clone(), now);
    }

    fn set_query(&mut self, text: &str, now: Instant) {
        if self.torn_down || self.query == text {
            return;
        }
        self.query = text.to_string();
        self.debouncer.observe_at(self.query.clone(), now);
    }
}

impl Drop for Autocomplete {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
