//! Delivers reducer effects to the host's listener, in order.

use tracing::debug;

use crate::effect::TableEffect;
use crate::ports::TableListener;

#[derive(Debug, Default)]
pub struct EffectRunner;

impl EffectRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, effects: Vec<TableEffect>, listener: &mut dyn TableListener) {
        for effect in effects {
            debug!(?effect, "dispatching table effect");
            match effect {
                TableEffect::FilterChanged(filters) => listener.on_filter(&filters),
                TableEffect::PageChanged(page) => listener.on_page_change(page),
                TableEffect::SelectionChanged(selected) => listener.on_row_select(&selected),
                TableEffect::SortRequested(request) => {
                    listener.on_sort(request.column, request.direction);
                }
            }
        }
    }
}
