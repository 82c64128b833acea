//! In-memory `RemoteStore` implementation.
//!
//! Backs tests and offline demos. Holds the whole catalog and all order
//! state behind one mutex; a flip switch simulates a backend outage so
//! callers' degradation paths can be exercised.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use forno_core::errors::RemoteError;
use forno_core::types::catalog::{Category, MenuItem};
use forno_core::types::order::{Order, OrderItem, OrderStatus, OrderStatusEntry};
use forno_core::types::pizza::DealOption;
use forno_core::types::profile::{UserAddress, UserProfile};
use forno_storage::store::now_millis;
use rustc_hash::FxHashMap;

use crate::store::{NewOrder, RemoteStore};

#[derive(Default)]
struct Inner {
    categories: Vec<Category>,
    menu_items: Vec<MenuItem>,
    deals: Vec<DealOption>,
    orders: Vec<Order>,
    order_items: FxHashMap<String, Vec<OrderItem>>,
    status_history: FxHashMap<String, Vec<OrderStatusEntry>>,
    profiles: FxHashMap<String, UserProfile>,
    addresses: Vec<UserAddress>,
}

/// Mutex-backed store with a toggleable outage switch.
#[derive(Default)]
pub struct InMemoryRemoteStore {
    inner: Mutex<Inner>,
    unavailable: AtomicBool,
    next_id: AtomicU64,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the outage switch. While set, every call fails with
    /// `RemoteError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn seed_categories(&self, categories: Vec<Category>) {
        self.inner.lock().unwrap().categories = categories;
    }

    pub fn seed_menu_items(&self, items: Vec<MenuItem>) {
        self.inner.lock().unwrap().menu_items = items;
    }

    pub fn seed_deals(&self, deals: Vec<DealOption>) {
        self.inner.lock().unwrap().deals = deals;
    }

    /// Number of stored orders; test observability.
    pub fn order_count(&self) -> usize {
        self.inner.lock().unwrap().orders.len()
    }

    fn check_available(&self) -> Result<(), RemoteError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RemoteError::Unavailable {
                message: "simulated outage".into(),
            });
        }
        Ok(())
    }

    fn next_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{prefix}_{n}")
    }
}

impl RemoteStore for InMemoryRemoteStore {
    fn categories(&self) -> Result<Vec<Category>, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        let mut rows = inner.categories.clone();
        rows.sort_by_key(|c| c.sort_order);
        Ok(rows)
    }

    fn menu_items(&self, category_id: Option<&str>) -> Result<Vec<MenuItem>, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<MenuItem> = inner
            .menu_items
            .iter()
            .filter(|i| i.is_available)
            .filter(|i| category_id.map_or(true, |c| i.category_id == c))
            .cloned()
            .collect();
        rows.sort_by_key(|i| i.sort_order);
        Ok(rows)
    }

    fn popular_items(&self) -> Result<Vec<MenuItem>, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<MenuItem> = inner
            .menu_items
            .iter()
            .filter(|i| i.is_available && i.is_popular)
            .cloned()
            .collect();
        rows.sort_by_key(|i| i.sort_order);
        Ok(rows)
    }

    fn search_menu_items(&self, query: &str) -> Result<Vec<MenuItem>, RemoteError> {
        self.check_available()?;
        let needle = query.to_lowercase();
        let inner = self.inner.lock().unwrap();
        let rows = inner
            .menu_items
            .iter()
            .filter(|i| i.is_available)
            .filter(|i| {
                i.name.to_lowercase().contains(&needle)
                    || i.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        Ok(rows)
    }

    fn menu_item_by_id(&self, id: &str) -> Result<MenuItem, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        inner
            .menu_items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound {
                what: format!("menu item {id}"),
            })
    }

    fn deals(&self) -> Result<Vec<DealOption>, RemoteError> {
        self.check_available()?;
        Ok(self.inner.lock().unwrap().deals.clone())
    }

    fn create_order(&self, order: &NewOrder) -> Result<Order, RemoteError> {
        self.check_available()?;
        let now = now_millis();
        let id = self.next_id("order");
        let created = Order {
            id: id.clone(),
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            customer_email: order.customer_email.clone(),
            customer_phone: order.customer_phone.clone(),
            delivery_address: order.delivery_address.clone(),
            order_notes: order.order_notes.clone(),
            payment_method: order.payment_method,
            subtotal: order.subtotal,
            tax_amount: order.tax_amount,
            delivery_fee: order.delivery_fee,
            total_amount: order.total_amount,
            status: OrderStatus::Pending,
            created_at_ms: now,
            updated_at_ms: now,
        };
        // Single lock scope: order row, item rows, and the first history
        // entry all land together or not at all.
        let mut inner = self.inner.lock().unwrap();
        inner.orders.push(created.clone());
        inner.order_items.insert(id.clone(), order.items.clone());
        inner.status_history.insert(
            id.clone(),
            vec![OrderStatusEntry {
                order_id: id,
                status: OrderStatus::Pending,
                notes: Some("Order placed successfully".into()),
                created_by: "system".into(),
                created_at_ms: now,
            }],
        );
        Ok(created)
    }

    fn orders_by_phone(&self, phone: &str) -> Result<Vec<Order>, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<Order> = inner
            .orders
            .iter()
            .filter(|o| o.customer_phone == phone)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at_ms.cmp(&a.created_at_ms));
        Ok(rows)
    }

    fn status_history(&self, order_id: &str) -> Result<Vec<OrderStatusEntry>, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .status_history
            .get(order_id)
            .cloned()
            .unwrap_or_default())
    }

    fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
        notes: Option<&str>,
        created_by: &str,
    ) -> Result<(), RemoteError> {
        self.check_available()?;
        let now = now_millis();
        let mut inner = self.inner.lock().unwrap();
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| RemoteError::NotFound {
                what: format!("order {order_id}"),
            })?;
        order.status = status;
        order.updated_at_ms = now;
        inner
            .status_history
            .entry(order_id.to_string())
            .or_default()
            .push(OrderStatusEntry {
                order_id: order_id.to_string(),
                status,
                notes: notes.map(str::to_string),
                created_by: created_by.to_string(),
                created_at_ms: now,
            });
        Ok(())
    }

    fn profile_by_phone(&self, phone: &str) -> Result<Option<UserProfile>, RemoteError> {
        self.check_available()?;
        Ok(self.inner.lock().unwrap().profiles.get(phone).cloned())
    }

    fn upsert_profile(&self, profile: &UserProfile) -> Result<UserProfile, RemoteError> {
        self.check_available()?;
        let now = now_millis();
        let mut inner = self.inner.lock().unwrap();
        let stored = match inner.profiles.get(&profile.phone) {
            Some(existing) => UserProfile {
                id: existing.id.clone(),
                created_at_ms: existing.created_at_ms,
                updated_at_ms: now,
                ..profile.clone()
            },
            None => UserProfile {
                id: self.next_id("profile"),
                created_at_ms: now,
                updated_at_ms: now,
                ..profile.clone()
            },
        };
        inner.profiles.insert(stored.phone.clone(), stored.clone());
        Ok(stored)
    }

    fn addresses(&self, profile_id: &str) -> Result<Vec<UserAddress>, RemoteError> {
        self.check_available()?;
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .addresses
            .iter()
            .filter(|a| a.user_profile_id == profile_id)
            .cloned()
            .collect())
    }

    fn upsert_address(&self, address: &UserAddress) -> Result<UserAddress, RemoteError> {
        self.check_available()?;
        let mut inner = self.inner.lock().unwrap();
        let stored = if address.id.is_empty() {
            UserAddress {
                id: self.next_id("address"),
                ..address.clone()
            }
        } else {
            address.clone()
        };
        if stored.is_default {
            for a in inner
                .addresses
                .iter_mut()
                .filter(|a| a.user_profile_id == stored.user_profile_id)
            {
                a.is_default = false;
            }
        }
        match inner.addresses.iter_mut().find(|a| a.id == stored.id) {
            Some(slot) => *slot = stored.clone(),
            None => inner.addresses.push(stored.clone()),
        }
        Ok(stored)
    }

    fn delete_address(&self, address_id: &str) -> Result<(), RemoteError> {
        self.check_available()?;
        let mut inner = self.inner.lock().unwrap();
        inner.addresses.retain(|a| a.id != address_id);
        Ok(())
    }
}
