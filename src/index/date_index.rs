//! Date index - ordered mapping for calendar-date range queries
//!
//! Maps date → Vec<Position> over a `BTreeMap`, so a range query is a key
//! scan over `[start, end]` instead of a sweep of every known date.
//!
//! # Example
//! ```ignore
//! // Query: postcards from the first week of 2020
//! let positions = date_index.find_range(jan_1, jan_7);
//! // positions = [0, 4, 9]
//! ```

use crate::index::Position;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Ordered date → positions mapping
///
/// Position lists preserve insertion order; duplicates are allowed when the
/// same key repeats at different positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateIndex {
    index: BTreeMap<NaiveDate, Vec<Position>>,
}

impl DateIndex {
    /// Create an empty date index
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }

    /// Append a position to the tail of a date's list
    pub fn add(&mut self, date: NaiveDate, position: Position) {
        self.index.entry(date).or_insert_with(Vec::new).push(position);
    }

    /// Positions recorded under an exact date
    pub fn find(&self, date: NaiveDate) -> &[Position] {
        self.index.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Positions for every date within `[start, end]` inclusive.
    ///
    /// Dates are visited in ascending order; within one date, positions keep
    /// insertion order. An inverted range yields no matches.
    pub fn find_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Position> {
        if start > end {
            // BTreeMap::range panics on an inverted range
            return Vec::new();
        }

        self.index
            .range(start..=end)
            .flat_map(|(_, positions)| positions.iter().copied())
            .collect()
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Number of distinct dates indexed
    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    /// Total number of position entries across all dates
    pub fn entry_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    /// Check whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut index = DateIndex::new();
        index.add(date(2020, 1, 1), 0);
        index.add(date(2020, 1, 5), 1);
        index.add(date(2020, 1, 1), 2);

        assert_eq!(index.find(date(2020, 1, 1)), &[0, 2]);
        assert_eq!(index.find(date(2020, 1, 5)), &[1]);
        assert!(index.find(date(2020, 1, 2)).is_empty());
    }

    #[test]
    fn test_find_range_inclusive_bounds() {
        let mut index = DateIndex::new();
        index.add(date(2020, 1, 1), 0);
        index.add(date(2020, 1, 5), 1);
        index.add(date(2020, 1, 10), 2);

        // Both endpoints are included
        assert_eq!(index.find_range(date(2020, 1, 1), date(2020, 1, 10)), vec![0, 1, 2]);
        assert_eq!(index.find_range(date(2020, 1, 5), date(2020, 1, 5)), vec![1]);
        assert_eq!(index.find_range(date(2020, 1, 2), date(2020, 1, 9)), vec![1]);
    }

    #[test]
    fn test_find_range_no_matches() {
        let mut index = DateIndex::new();
        index.add(date(2020, 1, 1), 0);

        assert!(index.find_range(date(2021, 1, 1), date(2021, 12, 31)).is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut index = DateIndex::new();
        index.add(date(2020, 1, 1), 0);

        assert!(index.find_range(date(2020, 2, 1), date(2020, 1, 1)).is_empty());
    }

    #[test]
    fn test_positions_keep_insertion_order() {
        let mut index = DateIndex::new();
        for position in [3, 1, 7] {
            index.add(date(2020, 6, 15), position);
        }

        assert_eq!(index.find(date(2020, 6, 15)), &[3, 1, 7]);
    }

    #[test]
    fn test_clear_and_counts() {
        let mut index = DateIndex::new();
        index.add(date(2020, 1, 1), 0);
        index.add(date(2020, 1, 1), 1);
        index.add(date(2020, 1, 2), 2);

        assert_eq!(index.key_count(), 2);
        assert_eq!(index.entry_count(), 3);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.entry_count(), 0);
    }
}
