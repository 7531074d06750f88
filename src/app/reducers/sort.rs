//! Header click sub-reducer. Proposes a direction; never reorders rows.

use crate::action::TableAction;
use crate::effect::TableEffect;
use crate::sort::{apply_request, on_header_click};
use crate::state::TableState;

pub fn reduce_sort(state: &mut TableState, action: &TableAction) -> Option<Vec<TableEffect>> {
    let TableAction::HeaderClicked(column) = action else {
        return None;
    };
    let Some(request) = on_header_click(&state.headers, *column, state.has_sort_listener) else {
        return Some(vec![]);
    };
    apply_request(&mut state.headers, request);
    Some(vec![TableEffect::SortRequested(request)])
}
