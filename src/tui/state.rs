//! Pure state transformations for the TUI (Functional Core)
//!
//! This module contains ONLY pure functions with no I/O: cursor math
//! over bar indexes, and the per-region bucket computation the chart
//! views draw from.

use crate::aggregate::{group_count, Bucket};
use crate::data::Character;
use crate::select::Region;

/// Grouped counts for a chart region, in first-occurrence order
pub fn region_buckets(records: &[Character], region: Region) -> Vec<Bucket> {
    match region {
        Region::Houses => group_count(records, |c| c.house.clone()),
        Region::Species => group_count(records, |c| c.species.clone()),
        Region::Blood => group_count(records, |c| c.blood_status_clean.clone()),
    }
}

/// Calculate new cursor index after moving left
pub fn move_cursor_left(current: usize) -> usize {
    current.saturating_sub(1)
}

/// Calculate new cursor index after moving right
pub fn move_cursor_right(current: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        (current + 1).min(max - 1)
    }
}

/// Clamp the cursor to a valid bar index
pub fn clamp_cursor(current: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        current.min(max - 1)
    }
}

/// Scroll the detail panel, clamped to the content length
pub fn scroll_detail(current: usize, delta: isize, total_lines: usize, visible: usize) -> usize {
    let max_scroll = total_lines.saturating_sub(visible);
    if delta >= 0 {
        (current + delta as usize).min(max_scroll)
    } else {
        current.saturating_sub((-delta) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(house: &str, species: &str, blood: &str) -> Character {
        Character::from_raw("", house, "Male", blood, species)
    }

    #[test]
    fn test_region_buckets_dispatch() {
        let records = vec![
            character("Gryffindor", "Human", "Pure-blood"),
            character("Gryffindor", "Ghost", ""),
            character("Slytherin", "Human", "Pure-blood"),
        ];

        let houses = region_buckets(&records, Region::Houses);
        assert_eq!(houses[0], Bucket::new("Gryffindor", 2));
        assert_eq!(houses[1], Bucket::new("Slytherin", 1));

        let species = region_buckets(&records, Region::Species);
        assert_eq!(species.len(), 2);

        let blood = region_buckets(&records, Region::Blood);
        assert_eq!(
            blood,
            vec![Bucket::new("Pure-blood", 2), Bucket::new("Unknown", 1)]
        );
    }

    #[test]
    fn test_move_cursor() {
        assert_eq!(move_cursor_left(3), 2);
        assert_eq!(move_cursor_left(0), 0);

        assert_eq!(move_cursor_right(0, 4), 1);
        assert_eq!(move_cursor_right(3, 4), 3);
        assert_eq!(move_cursor_right(0, 0), 0);
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(2, 4), 2);
        assert_eq!(clamp_cursor(9, 4), 3);
        assert_eq!(clamp_cursor(2, 0), 0);
    }

    #[test]
    fn test_scroll_detail() {
        assert_eq!(scroll_detail(0, 2, 30, 10), 2);
        assert_eq!(scroll_detail(5, -2, 30, 10), 3);
        // Clamp to max
        assert_eq!(scroll_detail(18, 5, 30, 10), 20);
        // Clamp to 0
        assert_eq!(scroll_detail(1, -5, 30, 10), 0);
    }
}
