//! Page slicing with bounds correction.

use crate::diagnostics::{TableFault, contain};
use tablekit_domain::DEFAULT_ITEMS_PER_PAGE;

/// The slice of the filtered rows that is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    /// 1-based page actually displayed, after any correction.
    pub page: usize,
    pub items_per_page: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    fn whole(len: usize, items_per_page: usize) -> Self {
        Self {
            page: 1,
            items_per_page,
            start: 0,
            end: len,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Absolute index of the row shown at `position` within this window.
    pub fn absolute_index(&self, position: usize) -> usize {
        self.start + position
    }
}

fn corrected_page(current_page: usize) -> usize {
    if current_page < 1 {
        TableFault::OutOfRange {
            field: "current_page",
            value: current_page,
            corrected: 1,
        }
        .report("paginate");
        1
    } else {
        current_page
    }
}

fn corrected_page_size(items_per_page: usize) -> usize {
    if items_per_page < 1 {
        TableFault::OutOfRange {
            field: "items_per_page",
            value: items_per_page,
            corrected: DEFAULT_ITEMS_PER_PAGE,
        }
        .report("paginate");
        DEFAULT_ITEMS_PER_PAGE
    } else {
        items_per_page
    }
}

fn try_window(len: usize, current_page: usize, items_per_page: usize) -> Result<PageWindow, TableFault> {
    let per_page = corrected_page_size(items_per_page);
    let mut page = corrected_page(current_page);

    let mut start = (page - 1)
        .checked_mul(per_page)
        .ok_or(TableFault::Overflow("page start"))?;

    if start >= len {
        let last = len.div_ceil(per_page);
        TableFault::StalePage {
            requested: page,
            last,
        }
        .report("paginate");
        page = last;
        start = (last - 1) * per_page;
    }

    let end = start.saturating_add(per_page).min(len);
    Ok(PageWindow {
        page,
        items_per_page: per_page,
        start,
        end,
    })
}

/// Computes the window `paginate` would slice. Disabled pagination or an
/// empty row set yields the whole range; a fault does too.
pub fn page_window(len: usize, enabled: bool, current_page: usize, items_per_page: usize) -> PageWindow {
    if !enabled {
        return PageWindow {
            page: current_page.max(1),
            ..PageWindow::whole(len, items_per_page)
        };
    }
    if len == 0 {
        return PageWindow::whole(0, items_per_page);
    }

    contain(
        "paginate",
        PageWindow::whole(len, items_per_page),
        || try_window(len, current_page, items_per_page),
    )
}

/// Slices `rows` to the requested page. A page past the end falls back to
/// the last page instead of returning nothing.
pub fn paginate<T>(rows: &[T], enabled: bool, current_page: usize, items_per_page: usize) -> &[T] {
    let window = page_window(rows.len(), enabled, current_page, items_per_page);
    &rows[window.start..window.end]
}
