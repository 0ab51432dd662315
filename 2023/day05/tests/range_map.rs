use std::ops::Range;

use day05::RangeMap;

fn test_map() -> RangeMap {
    let block = [
        "a-to-b map:",
        "90 30 10",
        "50 10 5",
        "70 15 5",
    ]
    .map(String::from);

    RangeMap::try_from(block.as_slice()).unwrap()
}

fn map_range(range: Range<u64>) -> Vec<Range<u64>> {
    test_map().map_range(&range)
}

#[test]
fn range_ending_at_entry_start_is_unmapped() {
    assert_eq!(map_range(5..10), vec![5..10]);
}

#[test]
fn range_starting_at_entry_end_is_unmapped() {
    assert_eq!(map_range(40..45), vec![40..45]);
    assert_eq!(map_range(20..25), vec![20..25]);
}

#[test]
fn range_straddling_adjacent_entries_splits() {
    assert_eq!(map_range(12..18), vec![52..55, 70..73]);
}

#[test]
fn unmapped_gap_between_entries_keeps_values() {
    assert_eq!(map_range(18..35), vec![73..75, 20..30, 90..95]);
}

#[test]
fn range_covering_all_entries() {
    assert_eq!(
        map_range(0..50),
        vec![0..10, 50..55, 70..75, 20..30, 90..100, 40..50]
    );
}

#[test]
fn empty_range_maps_to_nothing() {
    assert!(map_range(12..12).is_empty());
    assert!(map_range(25..25).is_empty());
}

#[test]
fn single_values_follow_entries() {
    let map = test_map();
    assert_eq!(map.name(), "a-to-b");
    assert_eq!(map.map_value(9), 9);
    assert_eq!(map.map_value(10), 50);
    assert_eq!(map.map_value(19), 74);
    assert_eq!(map.map_value(20), 20);
    assert_eq!(map.map_value(39), 99);
}
