use serde::{Deserialize, Serialize};

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            total_items: 0,
        }
    }
}

impl PaginationState {
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }
}

/// `ceil(total_items / items_per_page)`, never less than 1. A zero page size
/// counts as the default page size.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    let per_page = if items_per_page == 0 {
        DEFAULT_ITEMS_PER_PAGE
    } else {
        items_per_page
    };
    total_items.div_ceil(per_page).max(1)
}
