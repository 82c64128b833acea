//! Read-through menu cache.
//!
//! Catalog data changes rarely, so list reads are cached for five minutes
//! and served from memory on repeat visits. Values are stored whole
//! (categories, item lists, deals) under fixed string keys; a per-category
//! item list gets its own key. Search results are never cached.

use std::time::Duration;

use forno_core::types::catalog::{Category, MenuItem};
use forno_core::types::pizza::DealOption;
use moka::sync::Cache;

/// Fixed cache keys for the whole-list entries.
pub mod cache_keys {
    pub const CATEGORIES: &str = "categories";
    pub const POPULAR_ITEMS: &str = "popular_items";
    pub const DEALS: &str = "deals";

    pub fn menu_items(category_id: Option<&str>) -> String {
        match category_id {
            Some(c) => format!("menu_items:{c}"),
            None => "menu_items:all".to_string(),
        }
    }
}

/// One cached catalog read. Variants mirror the list shapes the remote
/// store returns.
#[derive(Debug, Clone)]
pub enum CacheEntry {
    Categories(Vec<Category>),
    Items(Vec<MenuItem>),
    Deals(Vec<DealOption>),
}

const DEFAULT_TTL: Duration = Duration::from_secs(300);
const MAX_ENTRIES: u64 = 64;

/// TTL-bound cache over catalog reads. Clone is cheap; the underlying
/// cache is shared.
#[derive(Clone)]
pub struct MenuCache {
    entries: Cache<String, CacheEntry>,
}

impl MenuCache {
    /// Cache with the standard five-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Cache with a custom TTL (short TTLs for expiry tests).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.entries.get(key)
    }

    pub fn set(&self, key: &str, entry: CacheEntry) {
        self.entries.insert(key.to_string(), entry);
    }

    /// Drop every entry; the next read of each key goes to the remote
    /// store.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }
}

impl Default for MenuCache {
    fn default() -> Self {
        Self::new()
    }
}
