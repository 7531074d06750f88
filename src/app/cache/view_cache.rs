use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::debug;

use crate::filter::filtered_indices;
use crate::pagination::{PageWindow, page_window};
use tablekit_domain::{FilterState, RowRecord};

pub const DEFAULT_VIEW_CACHE_CAPACITY: usize = 8;

/// Every input a derived view depends on. `revision` identifies the row set;
/// the host bumps it whenever it supplies new or reordered rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub revision: u64,
    pub filters: FilterState,
    pub case_sensitive: bool,
    pub paginated: bool,
    pub page: usize,
    pub items_per_page: usize,
}

/// Filter and pagination output for one key: raw-row positions that passed
/// the filter, and the window over them that is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPlan {
    pub filtered: Vec<usize>,
    pub window: PageWindow,
}

impl ViewPlan {
    /// Runs filter then paginate, in that order.
    pub fn compute(rows: &[RowRecord], key: &ViewKey) -> Self {
        let filtered = filtered_indices(rows, &key.filters, key.case_sensitive);
        let window = page_window(filtered.len(), key.paginated, key.page, key.items_per_page);
        Self { filtered, window }
    }

    pub fn visible(&self) -> &[usize] {
        &self.filtered[self.window.start..self.window.end]
    }
}

pub struct ViewCache {
    inner: LruCache<ViewKey, Arc<ViewPlan>>,
}

impl ViewCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: LruCache::new(cap),
        }
    }

    pub fn get_or_compute(&mut self, rows: &[RowRecord], key: ViewKey) -> Arc<ViewPlan> {
        if let Some(plan) = self.inner.get(&key) {
            return Arc::clone(plan);
        }
        debug!(revision = key.revision, page = key.page, "view cache miss");
        let plan = Arc::new(ViewPlan::compute(rows, &key));
        self.inner.put(key, Arc::clone(&plan));
        plan
    }

    pub fn contains(&self, key: &ViewKey) -> bool {
        self.inner.peek(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drops every cached plan at once.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for ViewCache {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_CACHE_CAPACITY)
    }
}

impl std::fmt::Debug for ViewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCache")
            .field("len", &self.inner.len())
            .field("cap", &self.inner.cap())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablekit_domain::row;

    fn rows() -> Vec<RowRecord> {
        (0..25)
            .map(|i| row([format!("r{i}"), if i % 2 == 0 { "even" } else { "odd" }.to_string()]))
            .collect()
    }

    fn key(page: usize) -> ViewKey {
        ViewKey {
            revision: 1,
            filters: FilterState::new(),
            case_sensitive: false,
            paginated: true,
            page,
            items_per_page: 10,
        }
    }

    #[test]
    fn compute_filters_before_paginating() {
        let mut k = key(2);
        k.filters.set(1, "even");

        let plan = ViewPlan::compute(&rows(), &k);

        assert_eq!(plan.filtered.len(), 13);
        assert_eq!(plan.visible(), &[20, 22, 24]);
        assert_eq!(plan.window.page, 2);
    }

    #[test]
    fn hit_returns_same_plan() {
        let mut cache = ViewCache::default();
        let data = rows();

        let first = cache.get_or_compute(&data, key(1));
        let second = cache.get_or_compute(&data, key(1));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn any_key_change_is_a_new_entry() {
        let mut cache = ViewCache::default();
        let data = rows();

        cache.get_or_compute(&data, key(1));
        let mut other = key(1);
        other.revision = 2;
        cache.get_or_compute(&data, other.clone());

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&other));
    }

    #[test]
    fn capacity_evicts_least_recent() {
        let mut cache = ViewCache::new(2);
        let data = rows();

        cache.get_or_compute(&data, key(1));
        cache.get_or_compute(&data, key(2));
        cache.get_or_compute(&data, key(3));

        assert!(!cache.contains(&key(1)));
        assert!(cache.contains(&key(3)));
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache = ViewCache::default();
        cache.get_or_compute(&rows(), key(1));

        cache.clear();

        assert!(cache.is_empty());
    }

    #[test]
    fn zero_capacity_still_caches_one() {
        let mut cache = ViewCache::new(0);
        cache.get_or_compute(&rows(), key(1));

        assert_eq!(cache.len(), 1);
    }
}
