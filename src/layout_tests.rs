//! Tests for layout regions and hit testing

use super::*;

fn regions() -> LayoutRegions {
    LayoutRegions {
        input_field: Some(Rect::new(0, 0, 80, 3)),
        suggestion_list: Some(Rect::new(0, 3, 40, 6)),
    }
}

#[test]
fn test_new_regions_are_empty() {
    let regions = LayoutRegions::new();
    assert!(regions.input_field.is_none());
    assert!(regions.suggestion_list.is_none());
    assert_eq!(region_at(&regions, 0, 0), None);
}

#[test]
fn test_hit_input_field() {
    assert_eq!(region_at(&regions(), 10, 1), Some(Region::InputField));
}

#[test]
fn test_hit_suggestion_list() {
    assert_eq!(region_at(&regions(), 5, 4), Some(Region::SuggestionList));
    assert_eq!(region_at(&regions(), 39, 8), Some(Region::SuggestionList));
}

#[test]
fn test_edges_are_exclusive() {
    assert_eq!(region_at(&regions(), 40, 4), None);
    assert_eq!(region_at(&regions(), 5, 9), None);
}

#[test]
fn test_clear_forgets_regions() {
    let mut regions = regions();
    regions.clear();
    assert_eq!(regions, LayoutRegions::default());
}
