use std::io::Read;
use std::path::Path;

use tablekit_domain::{CellValue, HeaderDefinition, RowRecord};

use super::{TableData, read};
use crate::error::LoadError;

/// First record is the header row; every header is sortable. Records may be
/// ragged.
pub fn parse_csv<R: Read>(reader: R) -> Result<TableData, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| HeaderDefinition::new(h).sortable())
        .collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let row: RowRecord = record.iter().map(CellValue::new).collect();
        rows.push(row);
    }

    Ok(TableData { headers, rows })
}

pub fn load_csv(path: &Path) -> Result<TableData, LoadError> {
    let content = read(path)?;
    parse_csv(content.as_bytes())
}
