//! Column filtering over a row set.

use std::borrow::Cow;

use tracing::debug;

use crate::diagnostics::{TableFault, contain};
use tablekit_domain::{FilterState, RowRecord};

struct Needle {
    column: usize,
    text: String,
}

fn fold(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_lowercase())
    }
}

fn needles(filters: &FilterState, case_sensitive: bool) -> Vec<Needle> {
    filters
        .iter()
        .map(|(column, value)| Needle {
            column,
            text: fold(value, case_sensitive).into_owned(),
        })
        .collect()
}

/// A missing cell or out-of-range column fails the match.
fn row_matches(row: &RowRecord, needles: &[Needle], case_sensitive: bool) -> bool {
    needles.iter().all(|needle| {
        row.get(needle.column)
            .is_some_and(|cell| fold(&cell.text, case_sensitive).contains(needle.text.as_str()))
    })
}

/// Positions in `rows` that pass [`filter`]. A fault keeps every position.
pub fn filtered_indices(rows: &[RowRecord], filters: &FilterState, case_sensitive: bool) -> Vec<usize> {
    if filters.is_empty() {
        return (0..rows.len()).collect();
    }

    contain("filter", (0..rows.len()).collect(), || {
        let needles = needles(filters, case_sensitive);
        Ok::<_, TableFault>(
            rows.iter()
                .enumerate()
                .filter(|(_, row)| row_matches(row, &needles, case_sensitive))
                .map(|(index, _)| index)
                .collect(),
        )
    })
}

/// Keeps rows where every filtered column contains its filter text.
///
/// An empty filter state borrows `rows` untouched. Any internal fault returns
/// `rows` unfiltered.
pub fn filter<'a>(
    rows: &'a [RowRecord],
    filters: &FilterState,
    case_sensitive: bool,
) -> Cow<'a, [RowRecord]> {
    if filters.is_empty() {
        return Cow::Borrowed(rows);
    }

    contain("filter", Cow::Borrowed(rows), || {
        let needles = needles(filters, case_sensitive);
        let kept: Vec<RowRecord> = rows
            .iter()
            .filter(|row| row_matches(row, &needles, case_sensitive))
            .cloned()
            .collect();
        debug!(
            filters = filters.len(),
            before = rows.len(),
            after = kept.len(),
            "filtered rows"
        );
        Ok::<_, TableFault>(Cow::Owned(kept))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tablekit_domain::row;

    fn staff() -> Vec<RowRecord> {
        vec![
            row(["Alice", "Engineering", "Berlin"]),
            row(["Bob", "Design", "Paris"]),
            row(["Carol", "engineering", "Berlin"]),
            row(["Dan", "Sales"]),
        ]
    }

    fn names(rows: &[RowRecord]) -> Vec<&str> {
        rows.iter().map(|r| r[0].text.as_str()).collect()
    }

    fn filters(entries: &[(usize, &str)]) -> FilterState {
        entries.iter().map(|(c, v)| (*c, *v)).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let rows = staff();

        let result = filter(&rows, &FilterState::new(), false);

        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result.as_ref(), rows.as_slice());
    }

    #[test]
    fn substring_match_is_case_insensitive_by_default() {
        let rows = vec![row(["Alice", "Engineering"]), row(["Bob", "Design"])];

        let result = filter(&rows, &filters(&[(1, "eng")]), false);

        assert_eq!(names(&result), vec!["Alice"]);
    }

    #[test]
    fn case_sensitive_requires_exact_case() {
        let rows = staff();

        let result = filter(&rows, &filters(&[(1, "eng")]), true);

        assert_eq!(names(&result), vec!["Carol"]);
    }

    #[test]
    fn every_entry_must_match() {
        let rows = staff();

        let result = filter(&rows, &filters(&[(1, "engineering"), (2, "berlin")]), false);
        assert_eq!(names(&result), vec!["Alice", "Carol"]);

        let result = filter(&rows, &filters(&[(0, "alice"), (1, "design")]), false);
        assert!(result.is_empty());
    }

    #[rstest]
    #[case(2, "Berlin", vec!["Alice", "Carol"])] // Dan has no third cell
    #[case(9, "x", vec![])] // column beyond every row
    fn missing_cells_fail_the_match(
        #[case] column: usize,
        #[case] value: &str,
        #[case] expected: Vec<&str>,
    ) {
        let rows = staff();

        let result = filter(&rows, &filters(&[(column, value)]), false);

        assert_eq!(names(&result), expected);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let rows = staff();
        let f = filters(&[(1, "ENG")]);

        let once = filter(&rows, &f, false);
        let twice = filter(&once, &f, false);

        assert_eq!(once.as_ref(), twice.as_ref());
    }

    #[test]
    fn html_is_ignored_for_matching() {
        let rows = vec![vec![
            tablekit_domain::CellValue::new("Docs").with_html("<strong>secret</strong>"),
        ]];

        assert!(filter(&rows, &filters(&[(0, "secret")]), false).is_empty());
        assert_eq!(filter(&rows, &filters(&[(0, "doc")]), false).len(), 1);
    }

    #[test]
    fn filtered_indices_point_at_kept_rows() {
        let rows = staff();

        assert_eq!(
            filtered_indices(&rows, &filters(&[(2, "berlin")]), false),
            vec![0, 2]
        );
        assert_eq!(
            filtered_indices(&rows, &FilterState::new(), false),
            vec![0, 1, 2, 3]
        );
    }
}
