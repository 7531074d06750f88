//! Pure reducer: state transitions only, no I/O.
//!
//! Each action resolves controlled values once, updates whatever the engine
//! owns, and returns the proposed changes as effects for the host.

use crate::action::TableAction;
use crate::effect::TableEffect;
use crate::reducers::{
    reduce_data, reduce_filter, reduce_pagination, reduce_selection, reduce_sort,
};
use crate::state::TableState;

pub fn reduce(state: &mut TableState, action: TableAction) -> Vec<TableEffect> {
    if let Some(effects) = reduce_data(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_filter(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_pagination(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_selection(state, &action) {
        return effects;
    }
    if let Some(effects) = reduce_sort(state, &action) {
        return effects;
    }
    vec![]
}
