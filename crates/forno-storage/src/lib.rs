//! # forno-storage
//!
//! Local persistence for the Forno storefront: a SQLite-backed key-value
//! store holding serialized snapshots (cart, profile, phone, location),
//! plus a dedicated fire-and-forget save writer so persistence never
//! blocks the caller.
//!
//! Readers tolerate missing keys (first run) and malformed values
//! (treated as absent); persistence failures degrade to in-memory-only
//! behavior, they never surface to the user.

pub mod keys;
pub mod location;
pub mod queries;
pub mod store;
pub mod writer;

pub use store::LocalStore;
pub use writer::{SaveCommand, SaveWriter};
