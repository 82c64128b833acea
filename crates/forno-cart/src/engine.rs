//! `CartEngine`: the authoritative cart state machine.
//!
//! Owns the line-item collection, the derived totals, and the persistence
//! side effects. Screens hold a reference to the engine; nothing else
//! writes the cart snapshot. In-memory state is authoritative: persistence
//! failures are logged and the engine keeps working for the session.

use std::sync::Arc;

use forno_core::config::PricingConfig;
use forno_core::pricing::Totals;
use forno_core::types::money::Cents;
use forno_core::types::order::OrderItem;
use forno_core::types::pizza::{DealOption, PizzaCustomization};
use forno_storage::{keys, LocalStore, SaveWriter};
use tracing::warn;

use crate::line_item::LineItem;

/// The cart: an ordered line-item collection plus derived totals.
pub struct CartEngine {
    items: Vec<LineItem>,
    totals: Totals,
    config: PricingConfig,
    persist: Option<Persist>,
}

struct Persist {
    store: Arc<LocalStore>,
    writer: SaveWriter,
}

impl CartEngine {
    /// An in-memory cart with no persistence (tests, previews).
    pub fn new(config: PricingConfig) -> Self {
        Self {
            items: Vec::new(),
            totals: Totals::zero(),
            config,
            persist: None,
        }
    }

    /// A persistent cart: rehydrates the stored snapshot (a corrupt or
    /// missing snapshot is treated as an empty cart) and mirrors every
    /// mutation back through the save writer.
    pub fn with_store(config: PricingConfig, store: Arc<LocalStore>) -> Self {
        let writer = SaveWriter::new(store.clone());
        let mut engine = Self {
            items: Vec::new(),
            totals: Totals::zero(),
            config,
            persist: Some(Persist { store, writer }),
        };
        engine.load();
        engine
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn subtotal(&self) -> Cents {
        self.totals.subtotal
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add a line item. An existing item with the same id absorbs the
    /// incoming quantity; otherwise the item is appended. Always succeeds.
    pub fn add_item(&mut self, item: LineItem) {
        match self.items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => {
                existing.set_quantity(existing.quantity() + item.quantity());
            }
            None => self.items.push(item),
        }
        self.after_mutation();
    }

    /// Add a custom pizza as a fresh line. Identical customizations stay
    /// separate lines; each addition is independent.
    pub fn add_custom_pizza(
        &mut self,
        customization: PizzaCustomization,
        quantity: u32,
        total_price: Cents,
    ) {
        self.add_item(LineItem::custom_pizza(customization, quantity, total_price));
    }

    /// Add a deal as a fresh line; repeated additions of the same deal do
    /// not merge.
    pub fn add_deal(&mut self, deal: DealOption, quantity: u32) {
        self.add_item(LineItem::deal(deal, quantity));
    }

    /// Remove a line by id. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|i| i.id() != id);
        if self.items.len() != before {
            self.after_mutation();
        }
    }

    /// Set a line's quantity. Zero removes the line entirely; the cart
    /// never retains zero-quantity placeholders.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == id) {
            item.set_quantity(quantity);
            self.after_mutation();
        }
    }

    /// Empty the cart, zero the totals, and discard the persisted copy.
    pub fn clear(&mut self) {
        self.items.clear();
        self.totals = Totals::zero();
        if let Some(persist) = &self.persist {
            if let Err(e) = persist.writer.delete(keys::CART) {
                warn!(error = %e, "failed to discard persisted cart");
            }
        }
    }

    /// Rehydrate from the persisted snapshot. Missing or corrupt data
    /// falls back to an empty cart; it never errors.
    pub fn load(&mut self) {
        let Some(persist) = &self.persist else { return };
        let items: Vec<LineItem> = persist.store.get_json(keys::CART).unwrap_or_default();
        self.items = items;
        self.recalc();
    }

    /// Translate the collection into remote order-item rows.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.items.iter().map(LineItem::to_order_item).collect()
    }

    /// Block until queued saves have been applied. Test/shutdown hook;
    /// normal mutations never wait on persistence.
    pub fn flush(&self) {
        if let Some(persist) = &self.persist {
            if let Err(e) = persist.writer.flush_sync() {
                warn!(error = %e, "cart flush failed");
            }
        }
    }

    /// Recompute the four derived totals from scratch.
    fn recalc(&mut self) {
        let subtotal: Cents = self.items.iter().map(LineItem::total_price).sum();
        self.totals = if self.items.is_empty() {
            Totals::zero()
        } else {
            Totals::derive(subtotal, &self.config)
        };
    }

    fn after_mutation(&mut self) {
        self.recalc();
        self.save();
    }

    /// Mirror the collection to local storage, fire-and-forget. Only a
    /// non-empty cart is written; clearing goes through `clear`.
    fn save(&self) {
        let Some(persist) = &self.persist else { return };
        if self.items.is_empty() {
            return;
        }
        match serde_json::to_string(&self.items) {
            Ok(json) => {
                if let Err(e) = persist.writer.put(keys::CART, json) {
                    warn!(error = %e, "cart save failed; continuing in-memory");
                }
            }
            Err(e) => warn!(error = %e, "cart snapshot serialization failed"),
        }
    }
}
