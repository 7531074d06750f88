use std::path::Path;

use serde_json::Value;
use tracing::warn;

use tablekit_app::diagnostics::TableFault;
use tablekit_domain::{CellValue, HeaderDefinition, RowRecord};

use super::{TableData, read};
use crate::error::LoadError;

fn as_sequence<'a>(document: &'a Value, key: &'static str) -> &'a [Value] {
    match document.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        None | Some(Value::Null) => &[],
        Some(_) => {
            TableFault::NotSequence { what: key }.report("load_json");
            &[]
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn header(value: &Value) -> Result<HeaderDefinition, LoadError> {
    match value {
        Value::Object(_) => Ok(serde_json::from_value(value.clone())?),
        other => Ok(HeaderDefinition::new(scalar_text(other))),
    }
}

fn cell(value: &Value) -> Result<CellValue, LoadError> {
    match value {
        Value::Object(_) => Ok(serde_json::from_value(value.clone())?),
        other => Ok(CellValue::new(scalar_text(other))),
    }
}

/// Reads `{ "headers": [...], "rows": [[...], ...] }`. Headers and cells may
/// be plain scalars or full objects. A non-array `headers`, `rows` or row is
/// warned about and treated as empty.
pub fn parse_json(content: &str) -> Result<TableData, LoadError> {
    let document: Value = serde_json::from_str(content)?;

    let headers = as_sequence(&document, "headers")
        .iter()
        .map(header)
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::new();
    for (index, value) in as_sequence(&document, "rows").iter().enumerate() {
        let Value::Array(cells) = value else {
            warn!(row = index, "row is not a sequence, skipping");
            continue;
        };
        let row: RowRecord = cells.iter().map(cell).collect::<Result<_, _>>()?;
        rows.push(row);
    }

    Ok(TableData { headers, rows })
}

pub fn load_json(path: &Path) -> Result<TableData, LoadError> {
    parse_json(&read(path)?)
}
