use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sparse per-column filter values. Blank values are never stored, including
/// when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<usize, String>", into = "BTreeMap<usize, String>")]
pub struct FilterState {
    values: BTreeMap<usize, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `column`, or removes the entry when `value` is blank.
    /// Returns true when the state changed.
    pub fn set(&mut self, column: usize, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.trim().is_empty() {
            return self.remove(column);
        }
        self.values.insert(column, value.clone()) != Some(value)
    }

    pub fn remove(&mut self, column: usize) -> bool {
        self.values.remove(&column).is_some()
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.values.get(&column).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.values.iter().map(|(col, value)| (*col, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for FilterState {
    fn from_iter<T: IntoIterator<Item = (usize, S)>>(iter: T) -> Self {
        let mut state = FilterState::new();
        for (column, value) in iter {
            state.set(column, value);
        }
        state
    }
}

impl From<BTreeMap<usize, String>> for FilterState {
    fn from(values: BTreeMap<usize, String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<FilterState> for BTreeMap<usize, String> {
    fn from(state: FilterState) -> Self {
        state.values
    }
}
