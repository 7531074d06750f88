pub mod fixtures;

use tablekit::app::host::ReferenceHost;
use tablekit::app::{TableAction, TableState};
use tablekit::domain::TableOptions;

/// Uncontrolled engine over the staff fixture.
pub fn create_test_state(options: TableOptions) -> TableState {
    TableState::new(options, fixtures::staff_headers(), fixtures::staff_rows())
        .with_sort_listener(true)
}

/// Host-controlled engine over the staff fixture.
pub fn create_hosted_state(options: TableOptions) -> (ReferenceHost, TableState) {
    let mut host = ReferenceHost::new(fixtures::staff_headers(), fixtures::staff_rows());
    let mut state = TableState::new(options, Vec::new(), Vec::new());
    host.attach(&mut state);
    (host, state)
}

pub fn commit_filter(host: &mut ReferenceHost, state: &mut TableState, column: usize, text: &str) {
    host.handle(state, TableAction::FilterIconClicked(column));
    host.handle(state, TableAction::FilterDraftSet(text.to_string()));
    host.handle(state, TableAction::ApplyFilter);
}

pub fn visible_names(state: &mut TableState) -> Vec<String> {
    state
        .view()
        .visible_rows()
        .map(|visible| visible.row[0].text.clone())
        .collect()
}

pub fn paged(items_per_page: usize) -> TableOptions {
    TableOptions {
        selectable: true,
        has_pagination: true,
        is_filterable: true,
        items_per_page,
        ..Default::default()
    }
}
