//! Row selection sub-reducer.

use tracing::debug;

use tablekit_domain::SelectedRows;

use crate::action::TableAction;
use crate::effect::TableEffect;
use crate::selection::{row_index_for, select_all_visible, toggle};
use crate::state::TableState;

fn propose(state: &mut TableState, next: SelectedRows) -> Vec<TableEffect> {
    if &next == state.selection.resolve() {
        return vec![];
    }
    state.selection.propose(next.clone());
    vec![TableEffect::SelectionChanged(next)]
}

pub fn reduce_selection(state: &mut TableState, action: &TableAction) -> Option<Vec<TableEffect>> {
    if !matches!(action, TableAction::ToggleRow(_) | TableAction::ToggleAllVisible) {
        return None;
    }
    if !state.options.selectable {
        return Some(vec![]);
    }

    let plan = state.plan();
    let window = plan.window;
    let paginated = state.options.has_pagination;
    let selection_type = state.options.selection_type;

    let next = match action {
        TableAction::ToggleRow(position) => {
            if *position >= window.len() {
                debug!(position, visible = window.len(), "toggle outside visible page");
                return Some(vec![]);
            }
            let index = row_index_for(*position, paginated, window.page, window.items_per_page);
            toggle(index, selection_type, state.selection.resolve())
        }
        TableAction::ToggleAllVisible => select_all_visible(
            plan.visible(),
            selection_type,
            state.selection.resolve(),
            paginated,
            window.page,
            window.items_per_page,
        ),
        _ => return None,
    };
    Some(propose(state, next))
}
