//! Tests for the Autocomplete controller

use super::*;
use proptest::prelude::*;

const DELAY: Duration = Duration::from_millis(500);

fn fruit() -> Vec<String> {
    ["Apple", "AppleDoe", "Banana", "Cherry"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn settled(text: &str) -> (Autocomplete, Instant) {
    let start = Instant::now();
    let mut autocomplete = Autocomplete::new(fruit(), DELAY);
    autocomplete.on_type_at(text, start);
    autocomplete.tick_at(start + DELAY);
    (autocomplete, start + DELAY)
}

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_new_starts_empty() {
        let autocomplete = Autocomplete::new(fruit(), DELAY);
        assert_eq!(autocomplete.query(), "");
        assert_eq!(autocomplete.debounced_query(), "");
        assert!(autocomplete.results().is_empty());
        assert_eq!(autocomplete.active_index(), None);
        assert_eq!(autocomplete.status(), ListStatus::StartTyping);
        assert_eq!(autocomplete.suggestions().len(), 4);
    }

    #[test]
    fn test_teardown_cancels_pending_update() {
        let start = Instant::now();
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.on_type_at("ap", start);
        autocomplete.teardown();

        assert!(autocomplete.is_torn_down());
        assert!(autocomplete.next_deadline().is_none());
        assert!(!autocomplete.tick_at(start + DELAY * 2));
        assert_eq!(autocomplete.debounced_query(), "");
        assert!(autocomplete.results().is_empty());
    }

    #[test]
    fn test_commit_after_teardown_is_ignored() {
        let (mut autocomplete, now) = settled("ap");
        autocomplete.on_navigate(Direction::Down);
        autocomplete.teardown();

        assert_eq!(autocomplete.on_commit_at(now), None);
        assert_eq!(autocomplete.query(), "ap");
        assert_eq!(autocomplete.results(), ["Apple", "AppleDoe"]);
    }

    #[test]
    fn test_typing_after_teardown_is_ignored() {
        let start = Instant::now();
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.teardown();
        autocomplete.on_type_at("ap", start);

        assert!(autocomplete.next_deadline().is_none());
        assert!(!autocomplete.tick_at(start + DELAY));
    }
}

mod typing_tests {
    use super::*;

    #[test]
    fn test_typing_updates_query_but_not_results() {
        let start = Instant::now();
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.on_type_at("ap", start);

        assert_eq!(autocomplete.query(), "ap");
        assert_eq!(autocomplete.debounced_query(), "");
        assert!(autocomplete.results().is_empty());
        assert_eq!(autocomplete.next_deadline(), Some(start + DELAY));
    }

    #[test]
    fn test_results_appear_after_delay() {
        let start = Instant::now();
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.on_type_at("ap", start);

        assert!(!autocomplete.tick_at(start + DELAY - Duration::from_millis(1)));
        assert!(autocomplete.tick_at(start + DELAY));
        assert_eq!(autocomplete.debounced_query(), "ap");
        assert_eq!(autocomplete.results(), ["Apple", "AppleDoe"]);
        assert_eq!(autocomplete.status(), ListStatus::Results);
    }

    #[test]
    fn test_rapid_typing_skips_intermediate_queries() {
        let start = Instant::now();
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.on_type_at("b", start);
        autocomplete.on_type_at("ba", start + Duration::from_millis(100));
        autocomplete.on_type_at("ban", start + Duration::from_millis(200));

        assert!(!autocomplete.tick_at(start + DELAY));
        assert_eq!(autocomplete.debounced_query(), "");

        assert!(autocomplete.tick_at(start + Duration::from_millis(200) + DELAY));
        assert_eq!(autocomplete.debounced_query(), "ban");
        assert_eq!(autocomplete.results(), ["Banana"]);
    }

    #[test]
    fn test_typing_resets_selection_immediately() {
        let (mut autocomplete, now) = settled("ap");
        autocomplete.on_navigate(Direction::Down);
        assert_eq!(autocomplete.active_index(), Some(0));

        autocomplete.on_type_at("app", now);
        assert_eq!(autocomplete.active_index(), None);
        // Previous results stay visible until the new query settles
        assert_eq!(autocomplete.results().len(), 2);
    }

    #[test]
    fn test_no_match_status() {
        let (autocomplete, _) = settled("xyz");
        assert!(autocomplete.results().is_empty());
        assert_eq!(autocomplete.status(), ListStatus::NoSuggestions);
        assert_eq!(
            autocomplete.status().message(),
            Some("No suggestions, keep typing")
        );
    }

    #[test]
    fn test_clearing_input_shows_start_typing() {
        let (mut autocomplete, now) = settled("ap");
        autocomplete.on_type_at("", now);
        autocomplete.tick_at(now + DELAY);

        assert!(autocomplete.results().is_empty());
        assert_eq!(autocomplete.status(), ListStatus::StartTyping);
        assert_eq!(autocomplete.status().message(), Some("Start typing to search"));
    }

    #[test]
    fn test_new_results_reset_selection() {
        let (mut autocomplete, now) = settled("a");
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_navigate(Direction::Down);
        assert_eq!(autocomplete.active_index(), Some(1));

        autocomplete.on_type_at("ap", now);
        autocomplete.tick_at(now + DELAY);
        assert_eq!(autocomplete.active_index(), None);
    }
}

mod navigation_tests {
    use super::*;

    #[test]
    fn test_navigation_ignored_without_results() {
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.on_navigate(Direction::Down);
        assert_eq!(autocomplete.active_index(), None);
    }

    #[test]
    fn test_down_then_up_clamps() {
        let (mut autocomplete, _) = settled("ap");
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_navigate(Direction::Down);
        assert_eq!(autocomplete.active_index(), Some(1));
        assert_eq!(autocomplete.active_suggestion(), Some("AppleDoe"));

        autocomplete.on_navigate(Direction::Up);
        autocomplete.on_navigate(Direction::Up);
        assert_eq!(autocomplete.active_index(), Some(0));
    }

    #[test]
    fn test_up_from_unselected_selects_first() {
        let (mut autocomplete, _) = settled("ap");
        autocomplete.on_navigate(Direction::Up);
        assert_eq!(autocomplete.active_index(), Some(0));
    }
}

mod commit_tests {
    use super::*;

    #[test]
    fn test_commit_without_selection_is_noop() {
        let (mut autocomplete, now) = settled("ap");
        assert_eq!(autocomplete.on_commit_at(now), None);
        assert_eq!(autocomplete.query(), "ap");
        assert_eq!(autocomplete.results().len(), 2);
    }

    #[test]
    fn test_commit_scenario() {
        let start = Instant::now();
        let suggestions = vec!["Apple".to_string(), "Banana".to_string()];
        let mut autocomplete = Autocomplete::new(suggestions, DELAY);

        autocomplete.on_type_at("ap", start);
        autocomplete.tick_at(start + DELAY);
        assert_eq!(autocomplete.results(), ["Apple"]);
        let span = SuggestionMatcher::highlight_span("Apple", autocomplete.debounced_query());
        assert_eq!(span.map(|s| (s.start, s.end())), Some((0, 2)));

        autocomplete.on_navigate(Direction::Down);
        assert_eq!(autocomplete.active_index(), Some(0));

        let committed = autocomplete.on_commit_at(start + DELAY);
        assert_eq!(committed.as_deref(), Some("Apple"));
        assert_eq!(autocomplete.query(), "Apple");
        assert!(autocomplete.results().is_empty());
        assert_eq!(autocomplete.active_index(), None);
    }

    #[test]
    fn test_commit_feeds_committed_text_to_debouncer() {
        let (mut autocomplete, now) = settled("ap");
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_commit_at(now);

        assert_eq!(autocomplete.next_deadline(), Some(now + DELAY));
        assert!(autocomplete.tick_at(now + DELAY));
        assert_eq!(autocomplete.debounced_query(), "AppleDoe");
        assert_eq!(autocomplete.results(), ["AppleDoe"]);
        assert_eq!(autocomplete.active_index(), None);
    }

    #[test]
    fn test_commit_supersedes_pending_typing() {
        let (mut autocomplete, now) = settled("a");
        autocomplete.on_navigate(Direction::Down);
        // Navigation and typing interleave: the pending "ch" loses to the commit
        autocomplete.on_type_at("ch", now);
        autocomplete.on_navigate(Direction::Down);
        let committed = autocomplete.on_commit_at(now + Duration::from_millis(100));

        assert_eq!(committed.as_deref(), Some("Apple"));
        autocomplete.tick_at(now + Duration::from_millis(100) + DELAY);
        assert_eq!(autocomplete.debounced_query(), "Apple");
    }

    #[test]
    fn test_pick_sets_query_and_clears_results() {
        let (mut autocomplete, now) = settled("an");
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_pick_at("Banana", now);

        assert_eq!(autocomplete.query(), "Banana");
        assert!(autocomplete.results().is_empty());
        assert_eq!(autocomplete.active_index(), None);
    }

    #[test]
    fn test_commit_of_unchanged_text_rebuilds_list() {
        let (mut autocomplete, now) = settled("Banana");
        autocomplete.on_navigate(Direction::Down);
        autocomplete.on_commit_at(now);
        assert!(autocomplete.results().is_empty());

        assert!(autocomplete.tick_at(now + DELAY));
        assert_eq!(autocomplete.results(), ["Banana"]);
    }

    #[test]
    fn test_pick_without_results_still_sets_query() {
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        autocomplete.on_pick("Cherry");
        assert_eq!(autocomplete.query(), "Cherry");
        assert!(autocomplete.results().is_empty());
    }
}

#[derive(Debug, Clone)]
enum Action {
    Type(String),
    Navigate(Direction),
    Commit,
    Wait(u64),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-e]{0,3}".prop_map(Action::Type),
        Just(Action::Navigate(Direction::Up)),
        Just(Action::Navigate(Direction::Down)),
        Just(Action::Commit),
        (0u64..1000).prop_map(Action::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_state_invariants_hold(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut now = Instant::now();
        let mut autocomplete = Autocomplete::new(fruit(), DELAY);
        let mut queries_seen = vec![String::new()];

        for action in actions {
            match action {
                Action::Type(text) => autocomplete.on_type_at(&text, now),
                Action::Navigate(direction) => autocomplete.on_navigate(direction),
                Action::Commit => {
                    autocomplete.on_commit_at(now);
                }
                Action::Wait(millis) => {
                    now += Duration::from_millis(millis);
                    if autocomplete.tick_at(now) {
                        prop_assert_eq!(autocomplete.active_index(), None);
                    }
                }
            }
            queries_seen.push(autocomplete.query().to_string());

            if let Some(index) = autocomplete.active_index() {
                prop_assert!(index < autocomplete.results().len());
            }
            if autocomplete.debounced_query().is_empty() {
                prop_assert!(autocomplete.results().is_empty());
            }
            prop_assert!(queries_seen.iter().any(|q| q == autocomplete.debounced_query()));
        }
    }
}
