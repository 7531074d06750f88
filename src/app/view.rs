//! Derived, read-only output of one render cycle.

use std::sync::Arc;

use tablekit_domain::{
    HeaderDefinition, PaginationState, RowRecord, SelectedRows, SelectionState, TableOptions,
    total_pages,
};

use crate::cache::ViewPlan;
use crate::columns::effective_column_count;
use crate::pagination::PageWindow;
use crate::selection::{all_visible_selected, row_index_for};

/// A row on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// Position on the page.
    pub position: usize,
    /// Absolute index in the filtered sequence; the selection key.
    pub index: usize,
    pub row: &'a RowRecord,
    pub selected: bool,
}

#[derive(Debug)]
pub struct TableView<'a> {
    pub headers: &'a [HeaderDefinition],
    rows: &'a [RowRecord],
    plan: Arc<ViewPlan>,
    selection: &'a SelectedRows,
    options: &'a TableOptions,
}

impl<'a> TableView<'a> {
    pub fn new(
        headers: &'a [HeaderDefinition],
        rows: &'a [RowRecord],
        plan: Arc<ViewPlan>,
        selection: &'a SelectedRows,
        options: &'a TableOptions,
    ) -> Self {
        Self {
            headers,
            rows,
            plan,
            selection,
            options,
        }
    }

    pub fn window(&self) -> PageWindow {
        self.plan.window
    }

    pub fn filtered_len(&self) -> usize {
        self.plan.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), self.plan.window.items_per_page)
    }

    /// Page position as displayed, after range correction.
    pub fn pagination(&self) -> PaginationState {
        PaginationState::new(
            self.plan.window.page,
            self.plan.window.items_per_page,
            self.filtered_len(),
        )
    }

    pub fn selection_state(&self) -> SelectionState {
        SelectionState {
            selection_type: self.options.selection_type,
            selected: self.selection.clone(),
        }
    }

    pub fn effective_columns(&self) -> usize {
        effective_column_count(self.headers.len(), self.options.selectable)
    }

    /// No rows on the page: render the placeholder spanning
    /// [`Self::effective_columns`].
    pub fn is_empty(&self) -> bool {
        self.plan.window.is_empty()
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = VisibleRow<'a>> + '_ {
        let window = self.plan.window;
        let paginated = self.options.has_pagination;
        let rows = self.rows;
        let selection = self.selection;
        self.plan
            .visible()
            .iter()
            .enumerate()
            .map(move |(position, source)| {
                let index = row_index_for(position, paginated, window.page, window.items_per_page);
                VisibleRow {
                    position,
                    index,
                    row: &rows[*source],
                    selected: selection.contains(index),
                }
            })
    }

    /// State of the header checkbox.
    pub fn all_visible_selected(&self) -> bool {
        all_visible_selected(
            self.plan.visible(),
            self.selection,
            self.options.has_pagination,
            self.plan.window.page,
            self.plan.window.items_per_page,
        )
    }
}
