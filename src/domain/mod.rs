pub mod cell;
pub mod filter_state;
pub mod header;
pub mod options;
pub mod pagination;
pub mod selection;

pub use cell::{CellValue, RowRecord, row};
pub use filter_state::FilterState;
pub use header::{HeaderDefinition, SortDirection};
pub use options::TableOptions;
pub use pagination::{DEFAULT_ITEMS_PER_PAGE, PaginationState, total_pages};
pub use selection::{SelectedRows, SelectionState, SelectionType};
