//! Cached device location.
//!
//! The platform location lookup itself is out of scope; this module only
//! persists the last fix and its capture time, and treats fixes older
//! than five minutes as absent.

use serde::{Deserialize, Serialize};

use crate::keys;
use crate::store::LocalStore;

/// A fix is reusable for five minutes.
pub const FIX_TTL_MS: i64 = 5 * 60 * 1000;

/// A device location fix with its capture timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub captured_at_ms: i64,
}

/// Persist a fix. Failures are the caller's to log-and-ignore.
pub fn save_fix(store: &LocalStore, fix: &LocationFix) -> Result<(), forno_core::errors::StorageError> {
    store.put_json(keys::CACHED_LOCATION, fix)
}

/// Load the cached fix if it is still fresh at `now_ms`. Stale, missing,
/// and malformed entries all come back as `None`.
pub fn load_fix(store: &LocalStore, now_ms: i64) -> Option<LocationFix> {
    let fix: LocationFix = store.get_json(keys::CACHED_LOCATION)?;
    if now_ms - fix.captured_at_ms > FIX_TTL_MS {
        return None;
    }
    Some(fix)
}

/// Persist the location-permission flag.
pub fn save_permission(store: &LocalStore, granted: bool) -> Result<(), forno_core::errors::StorageError> {
    store.put_json(keys::LOCATION_PERMISSION, &granted)
}

/// Load the location-permission flag; `None` means never asked.
pub fn load_permission(store: &LocalStore) -> Option<bool> {
    store.get_json(keys::LOCATION_PERMISSION)
}
