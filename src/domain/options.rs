use serde::{Deserialize, Serialize};

use super::header::HeaderDefinition;
use super::pagination::DEFAULT_ITEMS_PER_PAGE;
use super::selection::SelectionType;

/// Recognized table options. Every field has a default so partial config
/// files deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub selectable: bool,
    pub selection_type: SelectionType,
    pub has_pagination: bool,
    pub items_per_page: usize,
    #[serde(alias = "has_header_filters")]
    pub is_filterable: bool,
    pub filter_case_sensitive: bool,
    /// Column indices that may be filtered. `None` means every column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filterable_headers: Option<Vec<usize>>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selectable: false,
            selection_type: SelectionType::default(),
            has_pagination: false,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            is_filterable: false,
            filter_case_sensitive: false,
            filterable_headers: None,
        }
    }
}

impl TableOptions {
    /// Whether a filter icon is offered for `column`, whose header is
    /// `header`. The table-level flag is the master switch; a header can opt
    /// out, and `filterable_headers` restricts the set further.
    pub fn is_column_filterable(&self, column: usize, header: &HeaderDefinition) -> bool {
        if !self.is_filterable {
            return false;
        }
        if header.filterable == Some(false) {
            return false;
        }
        match &self.filterable_headers {
            Some(allowed) => allowed.contains(&column),
            None => true,
        }
    }
}
