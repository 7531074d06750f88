//! A host that owns every state variable (controlled mode) and applies the
//! engine's proposals through its own transition rules.

use tracing::debug;

use tablekit_domain::{
    FilterState, HeaderDefinition, RowRecord, SelectedRows, SortDirection,
};

use crate::action::TableAction;
use crate::comparator::{RowComparator, TextComparator, sort_rows};
use crate::effect_runner::EffectRunner;
use crate::ports::TableListener;
use crate::reducer::reduce;
use crate::state::TableState;

pub struct ReferenceHost {
    pub headers: Vec<HeaderDefinition>,
    pub rows: Vec<RowRecord>,
    pub filters: FilterState,
    pub page: usize,
    pub selected: SelectedRows,
    comparator: Box<dyn RowComparator>,
    rows_changed: bool,
}

impl ReferenceHost {
    pub fn new(headers: Vec<HeaderDefinition>, rows: Vec<RowRecord>) -> Self {
        Self {
            headers,
            rows,
            filters: FilterState::new(),
            page: 1,
            selected: SelectedRows::new(),
            comparator: Box::new(TextComparator),
            rows_changed: false,
        }
    }

    pub fn with_comparator(mut self, comparator: Box<dyn RowComparator>) -> Self {
        self.comparator = comparator;
        self
    }

    /// Actions that hand the host's state to the engine for the next cycle.
    /// Rows and headers are only re-sent after a re-sort.
    pub fn sync_actions(&mut self) -> Vec<TableAction> {
        let mut actions = Vec::new();
        if std::mem::take(&mut self.rows_changed) {
            actions.push(TableAction::SetHeaders(self.headers.clone()));
            actions.push(TableAction::SetRows(self.rows.clone()));
        }
        actions.push(TableAction::SyncFilters(Some(self.filters.clone())));
        actions.push(TableAction::SyncPage(Some(self.page)));
        actions.push(TableAction::SyncSelection(Some(self.selected.clone())));
        actions
    }

    /// Engine state wired to this host: same data, every variable controlled.
    pub fn attach(&mut self, state: &mut TableState) {
        state.has_sort_listener = self.wants_sort();
        state.set_headers(self.headers.clone());
        state.set_rows(self.rows.clone());
        self.rows_changed = false;
        for action in self.sync_actions() {
            reduce(state, action);
        }
    }

    /// One event: reduce, deliver the proposals here, then push the result
    /// back into the engine.
    pub fn handle(&mut self, state: &mut TableState, action: TableAction) {
        let effects = reduce(state, action);
        EffectRunner::new().run(effects, self);
        for action in self.sync_actions() {
            reduce(state, action);
        }
    }
}

impl TableListener for ReferenceHost {
    fn on_filter(&mut self, filters: &FilterState) {
        self.filters = filters.clone();
        self.page = 1;
    }

    fn on_page_change(&mut self, page: usize) {
        self.page = page;
    }

    fn on_row_select(&mut self, selected: &SelectedRows) {
        self.selected = selected.clone();
    }

    /// One active sort column: every other header goes back to `None`.
    fn on_sort(&mut self, column: usize, direction: SortDirection) {
        debug!(column, %direction, "re-sorting rows");
        sort_rows(&mut self.rows, column, direction, self.comparator.as_ref());
        for (i, header) in self.headers.iter_mut().enumerate() {
            header.sort_direction = if i == column {
                direction
            } else {
                SortDirection::None
            };
        }
        self.rows_changed = true;
    }

    fn wants_sort(&self) -> bool {
        true
    }
}
