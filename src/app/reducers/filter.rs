//! Filter dropdown sub-reducer.

use tracing::debug;

use tablekit_domain::FilterState;

use crate::action::TableAction;
use crate::effect::TableEffect;
use crate::state::TableState;

/// The current page is left alone; resetting it after a filter change is the
/// host's call.
fn commit(state: &mut TableState, next: Option<FilterState>) -> Vec<TableEffect> {
    match next {
        Some(filters) => {
            state.filters.propose(filters.clone());
            vec![TableEffect::FilterChanged(filters)]
        }
        None => vec![],
    }
}

pub fn reduce_filter(state: &mut TableState, action: &TableAction) -> Option<Vec<TableEffect>> {
    match action {
        TableAction::FilterIconClicked(column) => {
            let filterable = state
                .headers
                .get(*column)
                .is_some_and(|header| state.options.is_column_filterable(*column, header));
            if !filterable {
                debug!(column, "filter icon ignored for unknown or unfilterable column");
                return Some(vec![]);
            }
            state.dropdown.click_icon(*column, state.filters.resolve());
            Some(vec![])
        }
        TableAction::FilterDraftInput(c) => {
            state.dropdown.input(*c);
            Some(vec![])
        }
        TableAction::FilterDraftBackspace => {
            state.dropdown.backspace();
            Some(vec![])
        }
        TableAction::FilterDraftSet(text) => {
            state.dropdown.set_draft(text.clone());
            Some(vec![])
        }
        TableAction::CloseFilterDropdown => {
            state.dropdown.close();
            Some(vec![])
        }
        TableAction::ApplyFilter => {
            let next = state.dropdown.apply(state.filters.resolve());
            Some(commit(state, next))
        }
        TableAction::ClearFilter => {
            let next = state.dropdown.clear(state.filters.resolve());
            Some(commit(state, next))
        }
        _ => None,
    }
}
