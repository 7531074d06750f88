pub mod adapters;
pub mod config;
pub mod error;

pub use adapters::{TableData, load_csv, load_json, load_table};
pub use config::table_options::TableOptionsFile;
pub use error::LoadError;
