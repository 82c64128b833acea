//! `RemoteStore`: the seam between this crate and the hosted backend.
//!
//! Implementations are expected to be cheap to call but fallible; every
//! method can return `RemoteError::Unavailable` at any time. Callers in
//! `menu`, `orders`, and `sync` decide per-operation whether a failure is
//! surfaced or degraded into an empty result.

use forno_core::errors::RemoteError;
use forno_core::types::catalog::{Category, MenuItem};
use forno_core::types::order::{
    DeliveryAddress, Order, OrderItem, OrderStatus, OrderStatusEntry, PaymentMethod,
};
use forno_core::types::pizza::DealOption;
use forno_core::types::profile::{UserAddress, UserProfile};
use forno_core::Cents;

/// Everything needed to create an order, minus the server-assigned id,
/// status, and timestamps.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub delivery_address: DeliveryAddress,
    pub order_notes: Option<String>,
    pub payment_method: PaymentMethod,
    pub subtotal: Cents,
    pub tax_amount: Cents,
    pub delivery_fee: Cents,
    pub total_amount: Cents,
    pub items: Vec<OrderItem>,
}

/// Hosted-backend operations. One method per remote query the storefront
/// performs; no batching or pagination, since the catalog is small.
pub trait RemoteStore: Send + Sync {
    // Catalog
    fn categories(&self) -> Result<Vec<Category>, RemoteError>;

    /// Available items, optionally restricted to one category, with their
    /// size rows attached. Sorted by `sort_order`.
    fn menu_items(&self, category_id: Option<&str>) -> Result<Vec<MenuItem>, RemoteError>;

    fn popular_items(&self) -> Result<Vec<MenuItem>, RemoteError>;

    /// Case-insensitive substring match over item names and descriptions.
    fn search_menu_items(&self, query: &str) -> Result<Vec<MenuItem>, RemoteError>;

    fn menu_item_by_id(&self, id: &str) -> Result<MenuItem, RemoteError>;

    fn deals(&self) -> Result<Vec<DealOption>, RemoteError>;

    // Orders
    /// Create the order, its item rows, and the initial status-history
    /// entry as one atomic write: either all three land or none do.
    fn create_order(&self, order: &NewOrder) -> Result<Order, RemoteError>;

    /// Orders placed from the given phone number, newest first.
    fn orders_by_phone(&self, phone: &str) -> Result<Vec<Order>, RemoteError>;

    /// Status-history rows for one order, oldest first.
    fn status_history(&self, order_id: &str) -> Result<Vec<OrderStatusEntry>, RemoteError>;

    /// Append a status transition and update the order's current status.
    fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        notes: Option<&str>,
        created_by: &str,
    ) -> Result<(), RemoteError>;

    // Profiles
    fn profile_by_phone(&self, phone: &str) -> Result<Option<UserProfile>, RemoteError>;

    /// Insert-or-update keyed on phone. Returns the stored row, with the
    /// server-assigned id on first insert.
    fn upsert_profile(&self, profile: &UserProfile) -> Result<UserProfile, RemoteError>;

    fn addresses(&self, profile_id: &str) -> Result<Vec<UserAddress>, RemoteError>;

    fn upsert_address(&self, address: &UserAddress) -> Result<UserAddress, RemoteError>;

    fn delete_address(&self, address_id: &str) -> Result<(), RemoteError>;
}
