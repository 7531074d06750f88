use serde::{Deserialize, Serialize};

/// A single table cell. `text` is the canonical value for filtering and
/// comparison; `html` is caller-trusted markup passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellValue {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl CellValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: None,
            id: None,
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One row, column-aligned with the headers. Length mismatches are tolerated.
pub type RowRecord = Vec<CellValue>;

/// Builds a row from plain strings.
pub fn row<I, S>(cells: I) -> RowRecord
where
    I: IntoIterator<Item = S>,
    S: Into<CellValue>,
{
    cells.into_iter().map(Into::into).collect()
}
