use std::sync::Arc;

use tablekit_domain::{
    FilterState, HeaderDefinition, RowRecord, SelectedRows, TableOptions,
};

use crate::cache::{ViewCache, ViewKey, ViewPlan};
use crate::controlled::Controlled;
use crate::diagnostics::validate;
use crate::filter_dropdown::FilterDropdown;
use crate::view::TableView;

/// Resolved values for one operation. Taken once so a single operation never
/// mixes controlled and uncontrolled reads.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub filters: &'a FilterState,
    pub page: usize,
    pub selection: &'a SelectedRows,
}

#[derive(Debug)]
pub struct TableState {
    pub options: TableOptions,
    pub headers: Vec<HeaderDefinition>,
    rows: Vec<RowRecord>,
    rows_revision: u64,
    pub filters: Controlled<FilterState>,
    pub current_page: Controlled<usize>,
    pub selection: Controlled<SelectedRows>,
    pub dropdown: FilterDropdown,
    /// Whether the host handles sort requests. Header clicks are inert
    /// without one.
    pub has_sort_listener: bool,
    cache: ViewCache,
}

impl TableState {
    pub fn new(options: TableOptions, headers: Vec<HeaderDefinition>, rows: Vec<RowRecord>) -> Self {
        validate(&headers, &rows);
        Self {
            options,
            headers,
            rows,
            rows_revision: 0,
            filters: Controlled::new(FilterState::new()),
            current_page: Controlled::new(1),
            selection: Controlled::new(SelectedRows::new()),
            dropdown: FilterDropdown::default(),
            has_sort_listener: false,
            cache: ViewCache::default(),
        }
    }

    pub fn with_sort_listener(mut self, enabled: bool) -> Self {
        self.has_sort_listener = enabled;
        self
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn rows_revision(&self) -> u64 {
        self.rows_revision
    }

    /// Replaces the row set. Cached views belong to the old rows and are
    /// dropped together.
    pub fn set_rows(&mut self, rows: Vec<RowRecord>) {
        validate(&self.headers, &rows);
        self.rows = rows;
        self.rows_revision += 1;
        self.cache.clear();
    }

    pub fn set_headers(&mut self, headers: Vec<HeaderDefinition>) {
        validate(&headers, &self.rows);
        self.headers = headers;
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            filters: self.filters.resolve(),
            page: *self.current_page.resolve(),
            selection: self.selection.resolve(),
        }
    }

    fn view_key(&self, snapshot: &Snapshot<'_>) -> ViewKey {
        ViewKey {
            revision: self.rows_revision,
            filters: snapshot.filters.clone(),
            case_sensitive: self.options.filter_case_sensitive,
            paginated: self.options.has_pagination,
            page: snapshot.page,
            items_per_page: self.options.items_per_page,
        }
    }

    /// Filter and page window for the current snapshot, memoized.
    pub fn plan(&mut self) -> Arc<ViewPlan> {
        let key = self.view_key(&self.snapshot());
        self.cache.get_or_compute(&self.rows, key)
    }

    /// Everything a renderer needs for one cycle.
    pub fn view(&mut self) -> TableView<'_> {
        let plan = self.plan();
        TableView::new(
            &self.headers,
            &self.rows,
            plan,
            self.selection.resolve(),
            &self.options,
        )
    }

    pub fn cached_views(&self) -> usize {
        self.cache.len()
    }
}
