use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Filter predicates, summary, errors
// ---------------------------------------------------------------------------

/// One column = value equality condition entered in the collector form.
/// Predicates with a blank column or blank value are inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    pub column: String,
    pub value: String,
}

/// Group counts plus the aggregate total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// (group value, count) pairs in `CellValue` order; counts are positive
    /// and group values distinct.
    pub groups: Vec<(CellValue, u64)>,
    /// Sum of all counts.
    pub total: u64,
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("column '{0}' does not exist in the dataset")]
    UnknownColumn(String),
    #[error("no column to summarize was given")]
    NoGroupColumn,
}

// ---------------------------------------------------------------------------
// The transformation
// ---------------------------------------------------------------------------

/// Filter, deduplicate and group-count a dataset.
///
/// In order:
/// 1. keep rows satisfying every active predicate (AND-conjunction; the
///    empty list keeps everything);
/// 2. if `dedup_keys` is non-empty, drop rows whose tuple of values at
///    those columns was already seen (first occurrence wins);
/// 3. count the remaining rows per distinct `group_column` value.  Rows
///    with an empty group cell form no group, mirroring how dataframe
///    libraries drop null groups.
///
/// Any referenced column that is not in the dataset fails with
/// [`SummarizeError::UnknownColumn`] before any row is touched.
pub fn summarize(
    dataset: &Dataset,
    filters: &[FilterPredicate],
    dedup_keys: &[String],
    group_column: &str,
) -> Result<Summary, SummarizeError> {
    if group_column.trim().is_empty() {
        return Err(SummarizeError::NoGroupColumn);
    }

    let active: Vec<&FilterPredicate> = filters
        .iter()
        .filter(|p| !p.column.trim().is_empty() && !p.value.trim().is_empty())
        .collect();

    for name in active
        .iter()
        .map(|p| p.column.as_str())
        .chain(dedup_keys.iter().map(String::as_str))
        .chain(std::iter::once(group_column))
    {
        if !dataset.has_column(name) {
            return Err(SummarizeError::UnknownColumn(name.to_string()));
        }
    }

    let mut seen: HashSet<Vec<CellValue>> = HashSet::new();
    let mut groups: BTreeMap<CellValue, u64> = BTreeMap::new();

    for row in &dataset.rows {
        let keep = active
            .iter()
            .all(|p| row.get(&p.column).is_some_and(|cell| cell.matches_text(&p.value)));
        if !keep {
            continue;
        }

        if !dedup_keys.is_empty() {
            let key: Vec<CellValue> = dedup_keys
                .iter()
                .map(|k| row.get(k).cloned().unwrap_or(CellValue::Missing))
                .collect();
            if !seen.insert(key) {
                continue;
            }
        }

        match row.get(group_column) {
            Some(CellValue::Missing) | None => continue,
            Some(value) => *groups.entry(value.clone()).or_insert(0) += 1,
        }
    }

    let total = groups.values().sum();
    Ok(Summary {
        groups: groups.into_iter().collect(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Row;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.into())
    }

    /// Dataset of text cells from a compact literal table.
    fn dataset(columns: &[&str], rows: &[&[&str]]) -> Dataset {
        let names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .map(|cells| {
                columns
                    .iter()
                    .zip(cells.iter())
                    .map(|(c, v)| (c.to_string(), text(v)))
                    .collect::<Row>()
            })
            .collect();
        Dataset::new(names, rows)
    }

    fn pred(column: &str, value: &str) -> FilterPredicate {
        FilterPredicate {
            column: column.into(),
            value: value.into(),
        }
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Rows = [{A:x,B:1},{A:x,B:2},{A:y,B:1}]
    fn abc() -> Dataset {
        dataset(&["A", "B"], &[&["x", "1"], &["x", "2"], &["y", "1"]])
    }

    #[test]
    fn dedup_keeps_first_seen_per_key() {
        let summary = summarize(&abc(), &[], &keys(&["A"]), "A").unwrap();
        assert_eq!(summary.groups, vec![(text("x"), 1), (text("y"), 1)]);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn no_dedup_counts_every_row() {
        let summary = summarize(&abc(), &[], &[], "A").unwrap();
        assert_eq!(summary.groups, vec![(text("x"), 2), (text("y"), 1)]);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn filter_runs_before_grouping() {
        let summary = summarize(&abc(), &[pred("B", "1")], &[], "A").unwrap();
        assert_eq!(summary.groups, vec![(text("x"), 1), (text("y"), 1)]);
        assert_eq!(summary.total, 2);
    }

    #[test]
    fn filters_are_a_conjunction() {
        let ds = abc();
        let both = summarize(&ds, &[pred("A", "x"), pred("B", "1")], &[], "A").unwrap();
        // Only {A:x,B:1} satisfies both predicates.
        assert_eq!(both.groups, vec![(text("x"), 1)]);

        // The conjunction is the intersection of each predicate alone.
        let a_only = summarize(&ds, &[pred("A", "x")], &[], "A").unwrap();
        let b_only = summarize(&ds, &[pred("B", "1")], &[], "A").unwrap();
        assert_eq!(a_only.total, 2);
        assert_eq!(b_only.total, 2);
        assert_eq!(both.total, 1);
    }

    #[test]
    fn empty_filter_list_is_the_identity() {
        let filtered = summarize(&abc(), &[], &[], "B").unwrap();
        assert_eq!(filtered.total, abc().len() as u64);
    }

    #[test]
    fn blank_predicates_are_ignored() {
        let filters = [pred("", ""), pred("A", ""), pred("", "x")];
        let summary = summarize(&abc(), &filters, &[], "A").unwrap();
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn dedup_never_increases_the_total() {
        let ds = abc();
        let without = summarize(&ds, &[], &[], "A").unwrap();
        let with = summarize(&ds, &[], &keys(&["A"]), "A").unwrap();
        assert!(with.total <= without.total);
    }

    #[test]
    fn dedup_is_idempotent() {
        // A dataset whose rows are already unique on the key is unchanged
        // by deduplication, so deduplicating twice equals deduplicating once.
        let once = summarize(&abc(), &[], &keys(&["A"]), "A").unwrap();
        let already_unique = dataset(&["A", "B"], &[&["x", "1"], &["y", "1"]]);
        let twice = summarize(&already_unique, &[], &keys(&["A"]), "A").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn total_is_the_sum_and_groups_are_distinct() {
        let ds = dataset(
            &["A", "B"],
            &[&["x", "1"], &["y", "2"], &["x", "3"], &["z", "4"], &["y", "5"]],
        );
        let summary = summarize(&ds, &[], &[], "A").unwrap();

        let sum: u64 = summary.groups.iter().map(|(_, n)| n).sum();
        assert_eq!(summary.total, sum);

        let distinct: std::collections::BTreeSet<_> =
            summary.groups.iter().map(|(v, _)| v).collect();
        assert_eq!(distinct.len(), summary.groups.len());
        assert!(summary.groups.iter().all(|(_, n)| *n > 0));
    }

    #[test]
    fn multi_column_dedup_key_uses_the_tuple() {
        let ds = dataset(
            &["A", "B"],
            &[&["x", "1"], &["x", "1"], &["x", "2"], &["y", "1"]],
        );
        let summary = summarize(&ds, &[], &keys(&["A", "B"]), "A").unwrap();
        assert_eq!(summary.groups, vec![(text("x"), 2), (text("y"), 1)]);
    }

    #[test]
    fn unknown_group_column_is_named_in_the_error() {
        let err = summarize(&abc(), &[], &[], "Z").unwrap_err();
        assert!(matches!(err, SummarizeError::UnknownColumn(c) if c == "Z"));
    }

    #[test]
    fn unknown_filter_and_dedup_columns_are_rejected() {
        let err = summarize(&abc(), &[pred("Q", "x")], &[], "A").unwrap_err();
        assert!(matches!(err, SummarizeError::UnknownColumn(c) if c == "Q"));

        let err = summarize(&abc(), &[], &keys(&["R"]), "A").unwrap_err();
        assert!(matches!(err, SummarizeError::UnknownColumn(c) if c == "R"));
    }

    #[test]
    fn blank_group_column_is_rejected() {
        let err = summarize(&abc(), &[], &[], "  ").unwrap_err();
        assert!(matches!(err, SummarizeError::NoGroupColumn));
    }

    #[test]
    fn numeric_cells_match_numeric_filter_text() {
        let names = vec!["n".to_string(), "g".to_string()];
        let rows: Vec<Row> = [(1i64, "a"), (2, "b"), (2, "c")]
            .iter()
            .map(|(n, g)| {
                Row::from([
                    ("n".to_string(), CellValue::Integer(*n)),
                    ("g".to_string(), text(g)),
                ])
            })
            .collect();
        let ds = Dataset::new(names, rows);

        let summary = summarize(&ds, &[pred("n", "2")], &[], "g").unwrap();
        assert_eq!(summary.groups, vec![(text("b"), 1), (text("c"), 1)]);
    }

    #[test]
    fn missing_group_cells_form_no_group() {
        let names = vec!["g".to_string()];
        let rows = vec![
            Row::from([("g".to_string(), text("x"))]),
            Row::from([("g".to_string(), CellValue::Missing)]),
        ];
        let ds = Dataset::new(names, rows);

        let summary = summarize(&ds, &[], &[], "g").unwrap();
        assert_eq!(summary.groups, vec![(text("x"), 1)]);
        assert_eq!(summary.total, 1);
    }
}
