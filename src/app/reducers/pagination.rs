//! Page navigation sub-reducer.

use tracing::debug;

use tablekit_domain::total_pages;

use crate::action::TableAction;
use crate::effect::TableEffect;
use crate::state::TableState;

fn go_to(state: &mut TableState, requested: usize) -> Vec<TableEffect> {
    let plan = state.plan();
    let last = total_pages(plan.filtered.len(), plan.window.items_per_page);
    let target = requested.clamp(1, last);
    if target != requested {
        debug!(requested, target, "page request clamped");
    }
    if target == *state.current_page.resolve() {
        return vec![];
    }
    state.current_page.propose(target);
    vec![TableEffect::PageChanged(target)]
}

pub fn reduce_pagination(state: &mut TableState, action: &TableAction) -> Option<Vec<TableEffect>> {
    let requested = match action {
        TableAction::GoToPage(page) => *page,
        TableAction::NextPage => state.plan().window.page.saturating_add(1),
        TableAction::PrevPage => state.plan().window.page.saturating_sub(1),
        _ => return None,
    };
    if !state.options.has_pagination {
        return Some(vec![]);
    }
    Some(go_to(state, requested))
}
