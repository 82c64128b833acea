//! Menu browsing service: cache-aside reads over the remote catalog.
//!
//! List reads degrade to empty on remote failure, so the storefront renders
//! an empty shelf rather than an error page. Single-item lookups surface
//! the error, since the caller navigated to something specific.

use std::sync::Arc;
use std::time::Duration;

use forno_core::errors::RemoteError;
use forno_core::types::catalog::{Category, MenuItem};
use forno_core::types::pizza::DealOption;
use tracing::{debug, warn};

use crate::cache::{cache_keys, CacheEntry, MenuCache};
use crate::store::RemoteStore;

pub struct MenuService {
    remote: Arc<dyn RemoteStore>,
    cache: MenuCache,
}

impl MenuService {
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            remote,
            cache: MenuCache::new(),
        }
    }

    /// Service with a custom cache TTL (used by tests to force expiry).
    pub fn with_cache_ttl(remote: Arc<dyn RemoteStore>, ttl: Duration) -> Self {
        Self {
            remote,
            cache: MenuCache::with_ttl(ttl),
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        if let Some(CacheEntry::Categories(rows)) = self.cache.get(cache_keys::CATEGORIES) {
            debug!(key = cache_keys::CATEGORIES, "cache hit");
            return rows;
        }
        match self.remote.categories() {
            Ok(rows) => {
                self.cache
                    .set(cache_keys::CATEGORIES, CacheEntry::Categories(rows.clone()));
                rows
            }
            Err(e) => degraded("categories", e),
        }
    }

    pub fn menu_items(&self, category_id: Option<&str>) -> Vec<MenuItem> {
        let key = cache_keys::menu_items(category_id);
        if let Some(CacheEntry::Items(rows)) = self.cache.get(&key) {
            debug!(key = %key, "cache hit");
            return rows;
        }
        match self.remote.menu_items(category_id) {
            Ok(rows) => {
                self.cache.set(&key, CacheEntry::Items(rows.clone()));
                rows
            }
            Err(e) => degraded("menu items", e),
        }
    }

    pub fn popular_items(&self) -> Vec<MenuItem> {
        if let Some(CacheEntry::Items(rows)) = self.cache.get(cache_keys::POPULAR_ITEMS) {
            debug!(key = cache_keys::POPULAR_ITEMS, "cache hit");
            return rows;
        }
        match self.remote.popular_items() {
            Ok(rows) => {
                self.cache
                    .set(cache_keys::POPULAR_ITEMS, CacheEntry::Items(rows.clone()));
                rows
            }
            Err(e) => degraded("popular items", e),
        }
    }

    pub fn deals(&self) -> Vec<DealOption> {
        if let Some(CacheEntry::Deals(rows)) = self.cache.get(cache_keys::DEALS) {
            debug!(key = cache_keys::DEALS, "cache hit");
            return rows;
        }
        match self.remote.deals() {
            Ok(rows) => {
                self.cache.set(cache_keys::DEALS, CacheEntry::Deals(rows.clone()));
                rows
            }
            Err(e) => degraded("deals", e),
        }
    }

    /// Search always goes to the remote store; queries are too varied to
    /// be worth caching.
    pub fn search(&self, query: &str) -> Vec<MenuItem> {
        match self.remote.search_menu_items(query) {
            Ok(rows) => rows,
            Err(e) => degraded("search results", e),
        }
    }

    /// Single-item lookup; not cached, and failures propagate.
    pub fn menu_item(&self, id: &str) -> Result<MenuItem, RemoteError> {
        self.remote.menu_item_by_id(id)
    }

    /// Invalidate the whole cache; the next read of each list refetches.
    pub fn refresh(&self) {
        self.cache.clear();
    }
}

fn degraded<T>(what: &str, e: RemoteError) -> Vec<T> {
    warn!(error = %e, "failed to load {what}, serving empty list");
    Vec::new()
}
