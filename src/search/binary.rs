//! Binary search over a sorted copy of the table, with substring probes.
//!
//! The probe loop steers left or right by ordinary lexicographic comparison,
//! but stops at the first probed key that *contains* the keyword. From that
//! anchor it collects the matching neighbours on each side. Keys containing a
//! substring are not contiguous in sorted order in general, so matches that
//! are separated from the anchor's run by a non-matching key are not
//! returned. Use [`linear_search`](super::linear_search) for full recall.

use super::{normalize, normalize_keyword};
use crate::models::{Record, SearchField, SearchResult, Table};

/// Sorted view entry: lower-cased key and the record it came from
type Keyed<'a> = (String, &'a Record);

/// Find the contiguous run of records around a binary-search anchor whose
/// `field` contains `keyword`, ignoring case.
///
/// The result lists the anchor, then its matching left neighbours going
/// outward, then its matching right neighbours going outward.
pub fn binary_search(table: &Table, keyword: &str, field: SearchField) -> SearchResult {
    if table.is_empty() {
        return SearchResult::default();
    }

    let keyword = normalize_keyword(keyword);
    let sorted = sorted_view(table, field);

    let Some(anchor) = find_anchor(&sorted, &keyword) else {
        return SearchResult::default();
    };

    let left = sorted[..=anchor]
        .iter()
        .rev()
        .take_while(|(key, _)| key.contains(&keyword));
    let right = sorted[anchor + 1..]
        .iter()
        .take_while(|(key, _)| key.contains(&keyword));

    left.chain(right).map(|(_, record)| (*record).clone()).collect()
}

/// Stable ascending sort by key. Ties keep table order.
fn sorted_view(table: &Table, field: SearchField) -> Vec<Keyed<'_>> {
    let mut sorted: Vec<Keyed<'_>> = table
        .iter()
        .map(|record| (normalize(record, field), record))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    sorted
}

/// Index of the first probed key containing `keyword`.
fn find_anchor(sorted: &[Keyed<'_>], keyword: &str) -> Option<usize> {
    // `right` is one past the inclusive upper bound, so the probe
    // `(left + right - 1) / 2` is the midpoint of `[left, right - 1]`.
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = (left + right - 1) / 2;
        let key = sorted[mid].0.as_str();

        if key.contains(keyword) {
            return Some(mid);
        } else if key < keyword {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::linear_search;

    fn titled(titles: &[&str]) -> Table {
        titles.iter().map(|t| Record::new(*t, "", 0)).collect()
    }

    fn titles(result: &SearchResult) -> Vec<&str> {
        result.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_empty_table() {
        assert!(binary_search(&Table::default(), "", SearchField::Title).is_empty());
    }

    #[test]
    fn test_source_table_not_reordered() {
        let table = titled(&["zeta", "alpha", "mid"]);
        let before = table.clone();
        let _ = binary_search(&table, "a", SearchField::Title);
        assert_eq!(table, before);
    }

    #[test]
    fn test_walk_order_left_then_right() {
        // sorted: deep a, deep b, deep c, zeta; first probe lands on "deep b"
        let table = titled(&["zeta", "Deep C", "Deep A", "Deep B"]);
        let result = binary_search(&table, "deep", SearchField::Title);
        assert_eq!(titles(&result), vec!["Deep B", "Deep A", "Deep C"]);
    }

    #[test]
    fn test_matches_outside_run_are_missed() {
        // sorted: ab, bax, xab, zzz
        // probe "bax" (no match, > "ab") -> go left, probe "ab" -> anchor 0.
        // the run stops at "bax", so "xab" is not returned.
        let table = titled(&["xab", "zzz", "bax", "ab"]);

        let binary = binary_search(&table, "ab", SearchField::Title);
        assert_eq!(titles(&binary), vec!["ab"]);

        let linear = linear_search(&table, "ab", SearchField::Title);
        assert_eq!(titles(&linear), vec!["xab", "ab"]);
    }

    #[test]
    fn test_probe_can_miss_every_match() {
        // sorted: aaa, bxy, cab; probes "bxy" then "aaa" and gives up.
        let table = titled(&["cab", "aaa", "bxy"]);
        assert!(binary_search(&table, "ab", SearchField::Title).is_empty());
        assert_eq!(linear_search(&table, "ab", SearchField::Title).len(), 1);
    }

    #[test]
    fn test_empty_keyword_returns_whole_sorted_run() {
        let table = titled(&["b", "c", "a"]);
        let result = binary_search(&table, "", SearchField::Title);
        // anchor is the middle of the sorted view
        assert_eq!(titles(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = Table::new(vec![
            Record::new("Same", "first", 0),
            Record::new("same", "second", 0),
            Record::new("SAME", "third", 0),
        ]);
        // all keys equal "same"; anchor is index 1
        let result = binary_search(&table, "same", SearchField::Title);
        let authors: Vec<&str> = result.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, vec!["second", "first", "third"]);
    }

    #[test]
    fn test_year_sorted_as_string() {
        let table = Table::new(vec![
            Record::new("a", "", 2020),
            Record::new("b", "", 0),
            Record::new("c", "", 1999),
        ]);
        // sorted keys: "0", "1999", "2020"
        let result = binary_search(&table, "2020", SearchField::Year);
        assert_eq!(titles(&result), vec!["a"]);
        assert!(binary_search(&table, "2021", SearchField::Year).is_empty());
    }
}
