use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    Single,
    #[default]
    Multiple,
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionType::Single => write!(f, "single"),
            SelectionType::Multiple => write!(f, "multiple"),
        }
    }
}

impl FromStr for SelectionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(SelectionType::Single),
            "multiple" => Ok(SelectionType::Multiple),
            _ => Err(format!("Unknown selection type: {}", s)),
        }
    }
}

/// Selected absolute row indices.
///
/// Indices point into the post-filter row sequence as currently ordered, so a
/// re-filter or re-sort can make an index refer to a different logical row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedRows(BTreeSet<usize>);

impl SelectedRows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    pub fn remove(&mut self, index: usize) -> bool {
        self.0.remove(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when `index` is the only selected row.
    pub fn is_sole(&self, index: usize) -> bool {
        self.0.len() == 1 && self.0.contains(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.0.iter().copied().collect()
    }
}

impl FromIterator<usize> for SelectedRows {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<usize> for SelectedRows {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub selection_type: SelectionType,
    pub selected: SelectedRows,
}
