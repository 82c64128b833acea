//! Cart line items: a tagged union over the three purchasable kinds.
//!
//! Identity rules:
//! - menu items derive their id from `(menu_item_id, size_id)`, so the same
//!   selection merges by summing quantity;
//! - custom pizzas and deals get process-unique ids, so repeated additions
//!   never merge, even for identical contents.

use std::sync::atomic::{AtomicU64, Ordering};

use forno_core::pricing;
use forno_core::types::catalog::{MenuItem, MenuItemSize};
use forno_core::types::money::Cents;
use forno_core::types::order::{OrderItem, OrderItemKind};
use forno_core::types::pizza::{DealOption, PizzaCustomization, ToppingOption};
use serde::{Deserialize, Serialize};

use forno_storage::store::now_millis;

static NEXT_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_seq() -> u64 {
    NEXT_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// One purchasable entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineItem {
    MenuItem {
        id: String,
        item: MenuItem,
        size: MenuItemSize,
        #[serde(default)]
        toppings: Vec<ToppingOption>,
        quantity: u32,
        total_price: Cents,
    },
    CustomPizza {
        id: String,
        customization: PizzaCustomization,
        quantity: u32,
        total_price: Cents,
    },
    Deal {
        id: String,
        deal: DealOption,
        quantity: u32,
        total_price: Cents,
    },
}

impl LineItem {
    /// Build a menu-item line for one of the item's size rows. `None` when
    /// the item carries no size with that id. The id is deterministic, so
    /// adding the same item+size again merges in the engine.
    pub fn menu(
        item: MenuItem,
        size_id: &str,
        toppings: Vec<ToppingOption>,
        quantity: u32,
    ) -> Option<Self> {
        let size = item.size(size_id)?.clone();
        let id = format!("{}-{}", item.id, size.id);
        let mut line = Self::MenuItem {
            id,
            item,
            size,
            toppings,
            quantity,
            total_price: 0,
        };
        line.recompute_total();
        Some(line)
    }

    /// Build a custom-pizza line with a freshly generated unique id. The
    /// caller supplies the quoted total so the advertised price is the
    /// charged price.
    pub fn custom_pizza(
        customization: PizzaCustomization,
        quantity: u32,
        total_price: Cents,
    ) -> Self {
        let id = format!("custom_pizza_{}_{}", now_millis(), next_seq());
        Self::CustomPizza {
            id,
            customization,
            quantity,
            total_price,
        }
    }

    /// Build a deal line. The id includes a timestamp and sequence number,
    /// so repeated additions of the same deal stay separate lines.
    pub fn deal(deal: DealOption, quantity: u32) -> Self {
        let id = format!("deal_{}_{}_{}", deal.id, now_millis(), next_seq());
        let total_price = deal.price * quantity as Cents;
        Self::Deal {
            id,
            deal,
            quantity,
            total_price,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::MenuItem { id, .. } | Self::CustomPizza { id, .. } | Self::Deal { id, .. } => id,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            Self::MenuItem { quantity, .. }
            | Self::CustomPizza { quantity, .. }
            | Self::Deal { quantity, .. } => *quantity,
        }
    }

    pub fn total_price(&self) -> Cents {
        match self {
            Self::MenuItem { total_price, .. }
            | Self::CustomPizza { total_price, .. }
            | Self::Deal { total_price, .. } => *total_price,
        }
    }

    /// Customer-facing name.
    pub fn name(&self) -> String {
        match self {
            Self::MenuItem { item, .. } => item.name.clone(),
            Self::CustomPizza { customization, .. } => customization.display_name(),
            Self::Deal { deal, .. } => deal.name.clone(),
        }
    }

    /// Customer-facing description.
    pub fn description(&self) -> String {
        match self {
            Self::MenuItem { item, .. } => item.description.clone(),
            Self::CustomPizza { customization, .. } => customization.description(),
            Self::Deal { deal, .. } => deal.description.clone(),
        }
    }

    /// Per-unit price. For custom pizzas this is the single-quantity quote
    /// (same rounding point as the charged total).
    pub fn unit_price(&self) -> Cents {
        match self {
            Self::MenuItem { size, toppings, .. } => {
                size.price + toppings.iter().map(|t| t.price).sum::<Cents>()
            }
            Self::CustomPizza { customization, .. } => pricing::unit_price(customization),
            Self::Deal { deal, .. } => deal.price,
        }
    }

    /// Set the quantity and recompute this line's total from its own
    /// pricing inputs. Totals are never carried stale across quantity edits.
    pub fn set_quantity(&mut self, quantity: u32) {
        match self {
            Self::MenuItem { quantity: q, .. }
            | Self::CustomPizza { quantity: q, .. }
            | Self::Deal { quantity: q, .. } => *q = quantity,
        }
        self.recompute_total();
    }

    /// Recompute `total_price` from the line's own inputs. Custom pizzas
    /// re-quote via the pricing module so the single-rounding rule holds.
    pub fn recompute_total(&mut self) {
        match self {
            Self::MenuItem {
                size,
                toppings,
                quantity,
                total_price,
                ..
            } => {
                let unit = size.price + toppings.iter().map(|t| t.price).sum::<Cents>();
                *total_price = unit * *quantity as Cents;
            }
            Self::CustomPizza {
                customization,
                quantity,
                total_price,
                ..
            } => {
                *total_price = pricing::quote(customization, *quantity);
            }
            Self::Deal {
                deal,
                quantity,
                total_price,
                ..
            } => {
                *total_price = deal.price * *quantity as Cents;
            }
        }
    }

    /// Translate this line into the remote order-item shape.
    pub fn to_order_item(&self) -> OrderItem {
        match self {
            Self::MenuItem {
                item,
                size,
                toppings,
                quantity,
                total_price,
                ..
            } => OrderItem {
                item_type: OrderItemKind::MenuItem,
                item_id: item.id.clone(),
                item_name: item.name.clone(),
                item_description: Some(item.description.clone()),
                quantity: *quantity,
                unit_price: self.unit_price(),
                total_price: *total_price,
                customizations: if toppings.is_empty() {
                    Some(serde_json::json!({ "size": size.size_name }))
                } else {
                    let ids: Vec<&str> = toppings.iter().map(|t| t.id.as_str()).collect();
                    Some(serde_json::json!({ "size": size.size_name, "toppings": ids }))
                },
            },
            Self::CustomPizza {
                id,
                customization,
                quantity,
                total_price,
            } => OrderItem {
                item_type: OrderItemKind::CustomPizza,
                item_id: id.clone(),
                item_name: customization.display_name(),
                item_description: Some(customization.description()),
                quantity: *quantity,
                unit_price: self.unit_price(),
                total_price: *total_price,
                customizations: serde_json::to_value(customization).ok(),
            },
            Self::Deal {
                deal,
                quantity,
                total_price,
                ..
            } => OrderItem {
                item_type: OrderItemKind::Deal,
                item_id: deal.id.clone(),
                item_name: deal.name.clone(),
                item_description: Some(deal.description.clone()),
                quantity: *quantity,
                unit_price: deal.price,
                total_price: *total_price,
                customizations: Some(deal.items_included.clone()),
            },
        }
    }
}
