//! Per-column filter popover: at most one column open, with an uncommitted
//! draft that is only written to the filter state on apply.

use tracing::debug;

use tablekit_domain::FilterState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterDropdown {
    #[default]
    Idle,
    Open {
        column: usize,
        draft: String,
    },
}

impl FilterDropdown {
    pub fn open_column(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Open { column, .. } => Some(*column),
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Open { draft, .. } => Some(draft),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Clicking the open column's icon closes it; any other icon opens that
    /// column, discarding the previous draft. The draft starts from the
    /// column's committed filter.
    pub fn click_icon(&mut self, column: usize, filters: &FilterState) {
        match self {
            Self::Open { column: open, .. } if *open == column => {
                debug!(column, "filter dropdown closed, draft discarded");
                *self = Self::Idle;
            }
            _ => {
                debug!(column, "filter dropdown opened");
                *self = Self::Open {
                    column,
                    draft: filters.get(column).unwrap_or_default().to_string(),
                };
            }
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Self::Open { draft, .. } = self {
            *draft = text.into();
        }
    }

    pub fn input(&mut self, c: char) {
        if let Self::Open { draft, .. } = self {
            draft.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Self::Open { draft, .. } = self {
            draft.pop();
        }
    }

    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    /// Commits the draft: a blank draft removes the column's filter. Returns
    /// the new filter state, or `None` when nothing was open.
    pub fn apply(&mut self, filters: &FilterState) -> Option<FilterState> {
        let Self::Open { column, draft } = std::mem::take(self) else {
            return None;
        };
        let mut next = filters.clone();
        next.set(column, draft);
        Some(next)
    }

    /// Removes the open column's filter regardless of the draft.
    pub fn clear(&mut self, filters: &FilterState) -> Option<FilterState> {
        let Self::Open { column, .. } = std::mem::take(self) else {
            return None;
        };
        let mut next = filters.clone();
        next.remove(column);
        Some(next)
    }
}
