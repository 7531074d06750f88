use tablekit_domain::{FilterState, SelectedRows, SortDirection};

/// Host-side receiver for proposed state changes. Every method defaults to
/// ignoring the proposal.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
pub trait TableListener {
    fn on_filter(&mut self, _filters: &FilterState) {}

    fn on_page_change(&mut self, _page: usize) {}

    fn on_row_select(&mut self, _selected: &SelectedRows) {}

    fn on_sort(&mut self, _column: usize, _direction: SortDirection) {}

    /// Whether sort requests are handled. Headers stay inert otherwise.
    fn wants_sort(&self) -> bool {
        false
    }
}
