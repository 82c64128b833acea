//! Order snapshot types: the shapes written to and read from the remote store.
//!
//! An order's line items are immutable once created; only `status` (and the
//! append-only status history) changes afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::Cents;

/// Order lifecycle states, in tracking-timeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire representation, matching the remote store's status column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Customer-facing label for the tracking timeline.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Order Placed",
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::Ready => "Ready for Pickup",
            Self::OutForDelivery => "On the Way",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checkout payment selector. Card is collected on delivery; there is no
/// gateway integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    Card,
}

/// Customer-entered delivery destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub zip: String,
    pub coordinates: Option<(f64, f64)>,
}

/// Discriminant for order item rows; mirrors the cart's line-item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderItemKind {
    MenuItem,
    CustomPizza,
    Deal,
}

/// One line of a created order, as stored remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_type: OrderItemKind,
    pub item_id: String,
    pub item_name: String,
    pub item_description: Option<String>,
    pub quantity: u32,
    pub unit_price: Cents,
    pub total_price: Cents,
    pub customizations: Option<serde_json::Value>,
}

/// A created order: checkout snapshot plus mutable status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
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
    pub status: OrderStatus,
    pub created_at_ms: i64,
    pub updated_at_ms: i64,
}

/// One row of an order's append-only status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusEntry {
    pub order_id: String,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub created_by: String,
    pub created_at_ms: i64,
}
