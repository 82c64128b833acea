//! Local-first profile sync.
//!
//! The locally stored profile is authoritative for reads; the remote copy
//! is a best-effort mirror. Saving writes locally first (that write must
//! succeed), then pushes to the remote store and, when the push succeeds,
//! re-persists the server's row so the local copy picks up the assigned
//! id and timestamps.

use std::sync::Arc;

use forno_core::errors::StorageError;
use forno_core::types::profile::{UserAddress, UserProfile};
use forno_storage::{keys, LocalStore};
use tracing::warn;

use crate::store::RemoteStore;

pub struct ProfileSync {
    remote: Arc<dyn RemoteStore>,
    store: Arc<LocalStore>,
}

impl ProfileSync {
    pub fn new(remote: Arc<dyn RemoteStore>, store: Arc<LocalStore>) -> Self {
        Self { remote, store }
    }

    /// Persist the profile locally, then mirror it to the remote store.
    /// The local write is the one that can fail the call; a remote
    /// failure is logged and the local copy stands.
    pub fn save_profile(&self, profile: &UserProfile) -> Result<UserProfile, StorageError> {
        self.store.put_json(keys::USER_PROFILE, profile)?;
        self.store.put_raw(keys::USER_PHONE, &profile.phone)?;

        match self.remote.upsert_profile(profile) {
            Ok(stored) => {
                // Adopt the server row (assigned id, timestamps) locally.
                self.store.put_json(keys::USER_PROFILE, &stored)?;
                Ok(stored)
            }
            Err(e) => {
                warn!(error = %e, "profile push failed, keeping local copy");
                Ok(profile.clone())
            }
        }
    }

    /// The locally stored profile, if one has been saved.
    pub fn load_profile(&self) -> Option<UserProfile> {
        self.store.get_json(keys::USER_PROFILE)
    }

    /// Phone number of the locally saved profile.
    pub fn saved_phone(&self) -> Option<String> {
        match self.store.get_raw(keys::USER_PHONE) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "failed to read saved phone");
                None
            }
        }
    }

    /// Fetch the remote profile for a phone number without touching the
    /// local copy.
    pub fn fetch_remote(&self, phone: &str) -> Option<UserProfile> {
        match self.remote.profile_by_phone(phone) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "remote profile fetch failed");
                None
            }
        }
    }

    /// Pull the remote row for the locally saved phone and adopt it when
    /// it is newer than the local copy. No-op when offline or when the
    /// local copy is current.
    pub fn reconcile(&self) -> Option<UserProfile> {
        let local = self.load_profile()?;
        let remote = self.fetch_remote(&local.phone)?;
        if remote.updated_at_ms > local.updated_at_ms {
            if let Err(e) = self.store.put_json(keys::USER_PROFILE, &remote) {
                warn!(error = %e, "failed to adopt reconciled profile");
                return Some(local);
            }
            return Some(remote);
        }
        Some(local)
    }

    /// Saved addresses for a profile; empty when the remote store is
    /// unreachable.
    pub fn addresses(&self, profile_id: &str) -> Vec<UserAddress> {
        match self.remote.addresses(profile_id) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "failed to load addresses");
                Vec::new()
            }
        }
    }

    /// Create or update an address remotely. Address book state lives
    /// only on the remote store.
    pub fn save_address(
        &self,
        address: &UserAddress,
    ) -> Result<UserAddress, forno_core::errors::RemoteError> {
        self.remote.upsert_address(address)
    }

    pub fn delete_address(&self, address_id: &str) -> Result<(), forno_core::errors::RemoteError> {
        self.remote.delete_address(address_id)
    }
}
