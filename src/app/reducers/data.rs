//! Host-supplied data and controlled-state sync.

use crate::action::TableAction;
use crate::effect::TableEffect;
use crate::state::TableState;

pub fn reduce_data(state: &mut TableState, action: &TableAction) -> Option<Vec<TableEffect>> {
    match action {
        TableAction::SetRows(rows) => {
            state.set_rows(rows.clone());
            Some(vec![])
        }
        TableAction::SetHeaders(headers) => {
            state.set_headers(headers.clone());
            Some(vec![])
        }
        TableAction::SyncFilters(external) => {
            match external {
                Some(filters) => state.filters.control(filters.clone()),
                None => state.filters.release(),
            }
            Some(vec![])
        }
        TableAction::SyncPage(external) => {
            match external {
                Some(page) => state.current_page.control(*page),
                None => state.current_page.release(),
            }
            Some(vec![])
        }
        TableAction::SyncSelection(external) => {
            match external {
                Some(selected) => state.selection.control(selected.clone()),
                None => state.selection.release(),
            }
            Some(vec![])
        }
        _ => None,
    }
}
