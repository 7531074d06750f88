//! Row selection over absolute (post-filter) row indices.
//!
//! Indices are positional: they track the current filtered ordering, not a
//! stable row identity.

use crate::diagnostics::{TableFault, contain};
use tablekit_domain::{SelectedRows, SelectionType};

/// Maps a position on the visible page to its absolute row index.
pub fn row_index_for(
    visible_position: usize,
    pagination_enabled: bool,
    current_page: usize,
    items_per_page: usize,
) -> usize {
    if pagination_enabled {
        current_page
            .saturating_sub(1)
            .saturating_mul(items_per_page)
            .saturating_add(visible_position)
    } else {
        visible_position
    }
}

fn visible_indices(
    visible_count: usize,
    pagination_enabled: bool,
    current_page: usize,
    items_per_page: usize,
) -> impl Iterator<Item = usize> {
    (0..visible_count)
        .map(move |pos| row_index_for(pos, pagination_enabled, current_page, items_per_page))
}

/// Single: selecting the sole selected row clears it, anything else replaces
/// the selection. Multiple: flips membership of `row_index`.
pub fn toggle(row_index: usize, selection_type: SelectionType, current: &SelectedRows) -> SelectedRows {
    match selection_type {
        SelectionType::Single => {
            if current.is_sole(row_index) {
                SelectedRows::new()
            } else {
                [row_index].into_iter().collect()
            }
        }
        SelectionType::Multiple => {
            let mut next = current.clone();
            if !next.remove(row_index) {
                next.insert(row_index);
            }
            next
        }
    }
}

/// Header-checkbox behavior: deselects the visible rows when all of them are
/// selected, otherwise selects them. Single selection ignores it.
pub fn select_all_visible<T>(
    visible_rows: &[T],
    selection_type: SelectionType,
    current: &SelectedRows,
    pagination_enabled: bool,
    current_page: usize,
    items_per_page: usize,
) -> SelectedRows {
    if selection_type == SelectionType::Single {
        return current.clone();
    }

    let mut next = current.clone();
    let indices = visible_indices(
        visible_rows.len(),
        pagination_enabled,
        current_page,
        items_per_page,
    );
    if all_visible_selected(
        visible_rows,
        current,
        pagination_enabled,
        current_page,
        items_per_page,
    ) {
        for index in indices {
            next.remove(index);
        }
    } else {
        next.extend(indices);
    }
    next
}

/// True when every visible row is selected. An empty page is never "all
/// selected"; a fault answers false.
pub fn all_visible_selected<T>(
    visible_rows: &[T],
    selection: &SelectedRows,
    pagination_enabled: bool,
    current_page: usize,
    items_per_page: usize,
) -> bool {
    if visible_rows.is_empty() {
        return false;
    }
    contain("all_visible_selected", false, || {
        Ok::<_, TableFault>(
            visible_indices(
                visible_rows.len(),
                pagination_enabled,
                current_page,
                items_per_page,
            )
            .all(|index| selection.contains(index)),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn set(indices: &[usize]) -> SelectedRows {
        indices.iter().copied().collect()
    }

    mod row_index_for {
        use super::*;

        #[rstest]
        #[case(0, true, 1, 10, 0)]
        #[case(4, true, 3, 10, 24)]
        #[case(4, false, 3, 10, 4)]
        #[case(2, true, 0, 10, 2)] // page 0 behaves like page 1
        fn maps_position(
            #[case] position: usize,
            #[case] enabled: bool,
            #[case] page: usize,
            #[case] per_page: usize,
            #[case] expected: usize,
        ) {
            assert_eq!(row_index_for(position, enabled, page, per_page), expected);
        }
    }

    mod toggle {
        use super::*;

        #[test]
        fn single_selection_sequence() {
            let selected = toggle(2, SelectionType::Single, &set(&[]));
            assert_eq!(selected, set(&[2]));

            let selected = toggle(2, SelectionType::Single, &selected);
            assert_eq!(selected, set(&[]));

            let selected = toggle(5, SelectionType::Single, &set(&[2]));
            assert_eq!(selected, set(&[5]));
        }

        #[test]
        fn single_replaces_a_multi_member_selection() {
            assert_eq!(toggle(2, SelectionType::Single, &set(&[2, 3])), set(&[2]));
        }

        #[test]
        fn multiple_adds_and_removes() {
            let selected = toggle(1, SelectionType::Multiple, &set(&[4]));
            assert_eq!(selected, set(&[1, 4]));

            let selected = toggle(4, SelectionType::Multiple, &selected);
            assert_eq!(selected, set(&[1]));
        }
    }

    mod select_all_visible {
        use super::*;

        #[test]
        fn selects_then_deselects_visible_page() {
            let visible = ["a", "b", "c", "d", "e"];

            let selected =
                select_all_visible(&visible, SelectionType::Multiple, &set(&[]), true, 2, 5);
            assert_eq!(selected, set(&[5, 6, 7, 8, 9]));

            let selected =
                select_all_visible(&visible, SelectionType::Multiple, &selected, true, 2, 5);
            assert!(selected.is_empty());
        }

        #[test]
        fn partial_selection_is_completed() {
            let visible = [(), (), ()];

            let selected =
                select_all_visible(&visible, SelectionType::Multiple, &set(&[1]), false, 1, 10);

            assert_eq!(selected, set(&[0, 1, 2]));
        }

        #[test]
        fn deselect_keeps_rows_from_other_pages() {
            let visible = [(), ()];

            let selected = select_all_visible(
                &visible,
                SelectionType::Multiple,
                &set(&[0, 2, 3]),
                true,
                2,
                2,
            );

            assert_eq!(selected, set(&[0]));
        }

        #[test]
        fn single_selection_is_ignored() {
            let visible = [(), ()];
            let current = set(&[7]);

            assert_eq!(
                select_all_visible(&visible, SelectionType::Single, &current, false, 1, 10),
                current
            );
        }
    }

    mod all_visible_selected {
        use super::*;

        #[rstest]
        #[case(&[])]
        #[case(&[0, 1, 2])]
        fn empty_page_is_false(#[case] selected: &[usize]) {
            let visible: [(); 0] = [];
            assert!(!all_visible_selected(&visible, &set(selected), false, 1, 10));
        }

        #[test]
        fn true_only_when_every_row_selected() {
            let visible = [(), ()];

            assert!(all_visible_selected(&visible, &set(&[10, 11]), true, 2, 10));
            assert!(!all_visible_selected(&visible, &set(&[10]), true, 2, 10));
        }
    }
}
