//! Table engine: filtering, pagination, selection and sort-direction state,
//! driven by actions and reporting proposed changes as effects.

pub mod action;
pub mod cache;
pub mod columns;
pub mod comparator;
pub mod controlled;
pub mod diagnostics;
pub mod effect;
pub mod effect_runner;
pub mod filter;
pub mod filter_dropdown;
pub mod host;
pub mod pagination;
pub mod ports;
pub mod reducer;
mod reducers;
pub mod selection;
pub mod sort;
pub mod state;
pub mod view;

pub use action::TableAction;
pub use effect::TableEffect;
pub use reducer::reduce;
pub use state::TableState;
pub use view::{TableView, VisibleRow};
