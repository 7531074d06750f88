use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction tracked per header. The engine never reorders rows itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    /// `None` and `Desc` go to `Asc`, `Asc` goes to `Desc`.
    pub fn next(self) -> SortDirection {
        match self {
            SortDirection::None | SortDirection::Desc => SortDirection::Asc,
            SortDirection::Asc => SortDirection::Desc,
        }
    }

    pub fn is_active(self) -> bool {
        self != SortDirection::None
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::None => write!(f, "none"),
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(SortDirection::None),
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Column metadata. Header order defines the column-index space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeaderDefinition {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub sortable: bool,
    /// `None` defers to the table-level filter options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl HeaderDefinition {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = Some(filterable);
        self
    }

    pub fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }
}
