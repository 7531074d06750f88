mod data;
mod filter;
mod pagination;
mod selection;
mod sort;

pub use data::reduce_data;
pub use filter::reduce_filter;
pub use pagination::reduce_pagination;
pub use selection::reduce_selection;
pub use sort::reduce_sort;
