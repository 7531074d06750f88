//! State changes proposed by the reducer. The host decides whether to apply
//! them; for uncontrolled state the engine has already applied them itself.

use tablekit_domain::{FilterState, SelectedRows};

use crate::sort::SortRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEffect {
    FilterChanged(FilterState),
    PageChanged(usize),
    SelectionChanged(SelectedRows),
    /// The host must re-supply rows in the new order on the next cycle.
    SortRequested(SortRequest),
}
