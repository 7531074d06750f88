mod csv_table;
mod json_table;

use std::path::Path;

use tablekit_domain::{HeaderDefinition, RowRecord};

use crate::error::LoadError;

pub use csv_table::{load_csv, parse_csv};
pub use json_table::{load_json, parse_json};

/// Headers plus rows as read from a file. Shape mismatches are kept as-is and
/// left to the engine's validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Vec<HeaderDefinition>,
    pub rows: Vec<RowRecord>,
}

/// Picks the loader by file extension.
pub fn load_table(path: &Path) -> Result<TableData, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}
