//! Comparators a host can use to reorder rows after a sort request.
//!
//! The engine never calls these itself; it only proposes a column and a
//! direction.

use std::cmp::Ordering;

use tablekit_domain::{CellValue, RowRecord, SortDirection};

pub trait RowComparator {
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering;
}

/// Case-insensitive lexicographic order on cell text, ties broken by exact text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextComparator;

impl RowComparator for TextComparator {
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        a.text
            .to_lowercase()
            .cmp(&b.text.to_lowercase())
            .then_with(|| a.text.cmp(&b.text))
    }
}

/// Numeric order when both cells parse as numbers; numbers sort before text,
/// and two non-numeric cells fall back to [`TextComparator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericComparator;

fn parse_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|n| !n.is_nan())
}

impl RowComparator for NumericComparator {
    fn compare(&self, a: &CellValue, b: &CellValue) -> Ordering {
        match (parse_number(&a.text), parse_number(&b.text)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => TextComparator.compare(a, b),
        }
    }
}

/// Stable sort of `rows` by `column`. Rows missing the cell go last in either
/// direction; `SortDirection::None` leaves the order alone.
pub fn sort_rows(
    rows: &mut [RowRecord],
    column: usize,
    direction: SortDirection,
    comparator: &dyn RowComparator,
) {
    if direction == SortDirection::None {
        return;
    }
    rows.sort_by(|a, b| match (a.get(column), b.get(column)) {
        (Some(x), Some(y)) => {
            let ord = comparator.compare(x, y);
            if direction == SortDirection::Desc {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
