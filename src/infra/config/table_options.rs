use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use tablekit_domain::TableOptions;

pub const CURRENT_VERSION: u32 = 1;
const CONFIG_FILE_NAME: &str = "table.toml";

/// On-disk form:
///
/// ```toml
/// version = 1
///
/// [table]
/// selectable = true
/// has_pagination = true
/// items_per_page = 25
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct TableOptionsFile {
    pub version: u32,
    #[serde(default)]
    pub table: TableOptions,
}

impl TableOptionsFile {
    pub fn from_options(options: &TableOptions) -> Self {
        Self {
            version: CURRENT_VERSION,
            table: options.clone(),
        }
    }

    pub fn parse(content: &str) -> Result<TableOptions, LoadError> {
        let file: TableOptionsFile = toml::from_str(content)?;
        if file.version != CURRENT_VERSION {
            return Err(LoadError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }
        Ok(file.table)
    }

    pub fn load(path: &Path) -> Result<TableOptions, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Loads from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> Result<TableOptions, LoadError> {
        let path = default_path()?;
        if !path.exists() {
            return Ok(TableOptions::default());
        }
        Self::load(&path)
    }
}

pub fn default_path() -> Result<PathBuf, LoadError> {
    let config_base = dirs::config_dir().ok_or(LoadError::NoConfigDir)?;
    Ok(config_base.join("tablekit").join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablekit_domain::SelectionType;
    use tempfile::TempDir;

    #[test]
    fn parses_full_section() {
        let content = r#"
version = 1

[table]
selectable = true
selection_type = "single"
has_pagination = true
items_per_page = 25
has_header_filters = true
filter_case_sensitive = true
filterable_headers = [0, 2]
"#;

        let options = TableOptionsFile::parse(content).unwrap();

        assert!(options.selectable);
        assert_eq!(options.selection_type, SelectionType::Single);
        assert!(options.has_pagination);
        assert_eq!(options.items_per_page, 25);
        assert!(options.is_filterable);
        assert!(options.filter_case_sensitive);
        assert_eq!(options.filterable_headers, Some(vec![0, 2]));
    }

    #[test]
    fn missing_table_section_uses_defaults() {
        let options = TableOptionsFile::parse("version = 1\n").unwrap();
        assert_eq!(options, TableOptions::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let options = TableOptionsFile::parse("version = 1\n[table]\nselectable = true\n").unwrap();

        assert!(options.selectable);
        assert_eq!(options.items_per_page, 10);
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let result = TableOptionsFile::parse("version = 2\n");

        assert!(matches!(
            result,
            Err(LoadError::VersionMismatch {
                found: 2,
                expected: 1
            })
        ));
    }

    #[test]
    fn unknown_selection_type_is_a_toml_error() {
        let result = TableOptionsFile::parse("version = 1\n[table]\nselection_type = \"many\"\n");
        assert!(matches!(result, Err(LoadError::Toml(_))));
    }

    #[test]
    fn load_reads_written_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.toml");
        let options = TableOptions {
            has_pagination: true,
            items_per_page: 5,
            ..Default::default()
        };
        let content = toml::to_string_pretty(&TableOptionsFile::from_options(&options)).unwrap();
        fs::write(&path, content).unwrap();

        assert_eq!(TableOptionsFile::load(&path).unwrap(), options);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();

        let result = TableOptionsFile::load(&dir.path().join("absent.toml"));

        assert!(matches!(result, Err(LoadError::Read { .. })));
    }
}
