use tablekit_domain::{FilterState, HeaderDefinition, RowRecord, SelectedRows};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    // Data supplied by the host
    SetRows(Vec<RowRecord>),
    SetHeaders(Vec<HeaderDefinition>),

    // Controlled state: Some hands the variable to the host, None releases it
    SyncFilters(Option<FilterState>),
    SyncPage(Option<usize>),
    SyncSelection(Option<SelectedRows>),

    // Filter dropdown
    FilterIconClicked(usize),
    FilterDraftInput(char),
    FilterDraftBackspace,
    FilterDraftSet(String),
    ApplyFilter,
    ClearFilter,
    CloseFilterDropdown,

    // Pagination
    GoToPage(usize),
    NextPage,
    PrevPage,

    // Selection, by position on the visible page
    ToggleRow(usize),
    ToggleAllVisible,

    // Sorting
    HeaderClicked(usize),
}
