//! Order submission and tracking.
//!
//! `submit` is the checkout path: validate locally, hand the cart's
//! snapshot to the remote store as one atomic create, and only then clear
//! the cart. A failed create leaves the cart exactly as it was.

use std::sync::Arc;

use forno_cart::CartEngine;
use forno_core::errors::{OrderError, RemoteError};
use forno_core::types::order::{
    DeliveryAddress, Order, OrderStatus, OrderStatusEntry, PaymentMethod,
};
use forno_storage::store::now_millis;
use forno_storage::{keys, LocalStore};
use tracing::{info, warn};

use crate::store::{NewOrder, RemoteStore};

const FALLBACK_EMAIL: &str = "no-email@example.com";

/// Customer-entered checkout form. Everything except email, notes, and
/// coordinates is required.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub coordinates: Option<(f64, f64)>,
    pub order_notes: Option<String>,
    pub payment_method: PaymentMethod,
}

impl CreateOrderRequest {
    /// Reject blank required fields before any remote call is made.
    /// Whitespace-only input counts as blank.
    fn validate(&self) -> Result<(), OrderError> {
        for (field, value) in [
            ("customer_name", &self.customer_name),
            ("customer_phone", &self.customer_phone),
            ("street", &self.street),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                return Err(OrderError::MissingField { field });
            }
        }
        Ok(())
    }
}

pub struct OrderService {
    remote: Arc<dyn RemoteStore>,
    store: Option<Arc<LocalStore>>,
}

impl OrderService {
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            remote,
            store: None,
        }
    }

    /// Service that also records the ordering phone number locally, so
    /// the tracking screen can prefill it next launch.
    pub fn with_store(remote: Arc<dyn RemoteStore>, store: Arc<LocalStore>) -> Self {
        Self {
            remote,
            store: Some(store),
        }
    }

    /// Place an order from the cart's current contents. On success the
    /// cart is cleared and the order returned; on any failure the cart is
    /// untouched.
    pub fn submit(
        &self,
        cart: &mut CartEngine,
        request: &CreateOrderRequest,
    ) -> Result<Order, OrderError> {
        request.validate()?;
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let totals = cart.totals();
        let new_order = NewOrder {
            order_number: format!("BBP-{}", now_millis()),
            customer_name: request.customer_name.trim().to_string(),
            customer_email: request
                .customer_email
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .unwrap_or(FALLBACK_EMAIL)
                .to_string(),
            customer_phone: request.customer_phone.trim().to_string(),
            delivery_address: DeliveryAddress {
                street: request.street.trim().to_string(),
                city: request.city.trim().to_string(),
                zip: request.zip.trim().to_string(),
                coordinates: request.coordinates,
            },
            order_notes: request.order_notes.clone(),
            payment_method: request.payment_method,
            subtotal: totals.subtotal,
            tax_amount: totals.tax,
            delivery_fee: totals.delivery_fee,
            total_amount: totals.total,
            items: cart.order_items(),
        };

        let order = self.remote.create_order(&new_order)?;
        info!(
            order_number = %order.order_number,
            total = order.total_amount,
            "order placed"
        );

        cart.clear();
        if let Some(store) = &self.store {
            if let Err(e) = store.put_raw(keys::LAST_ORDER_PHONE, &order.customer_phone) {
                warn!(error = %e, "failed to record last order phone");
            }
        }
        Ok(order)
    }

    /// Orders placed from a phone number, newest first. Degrades to empty
    /// when the remote store is down.
    pub fn orders_for(&self, phone: &str) -> Vec<Order> {
        match self.remote.orders_by_phone(phone) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "failed to load orders");
                Vec::new()
            }
        }
    }

    /// Status timeline for one order, oldest first.
    pub fn history(&self, order_id: &str) -> Vec<OrderStatusEntry> {
        match self.remote.status_history(order_id) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(error = %e, "failed to load status history");
                Vec::new()
            }
        }
    }

    /// Phone number recorded with the most recent successful order, if a
    /// local store is attached and the key survives.
    pub fn last_order_phone(&self) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.get_raw(keys::LAST_ORDER_PHONE) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "failed to read last order phone");
                None
            }
        }
    }

    /// Append a status transition. Kitchen-side operation; the storefront
    /// itself only ever reads.
    pub fn record_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        notes: Option<&str>,
        created_by: &str,
    ) -> Result<(), RemoteError> {
        self.remote
            .update_order_status(order_id, status, notes, created_by)
    }
}
