//! Remote catalog rows: categories, menu items, per-size prices.

use serde::{Deserialize, Serialize};

use super::money::Cents;

/// A browsing category (e.g. "Pizzas", "Sides").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub sort_order: i64,
}

/// A catalog entry. Prices live on the per-size rows, not the item itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub rating: f64,
    pub is_popular: bool,
    pub is_available: bool,
    pub sort_order: i64,
    #[serde(default)]
    pub sizes: Vec<MenuItemSize>,
}

impl MenuItem {
    /// Look up a size row by its id.
    pub fn size(&self, size_id: &str) -> Option<&MenuItemSize> {
        self.sizes.iter().find(|s| s.id == size_id)
    }
}

/// One purchasable size of a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemSize {
    pub id: String,
    pub menu_item_id: String,
    pub size_name: String,
    pub price: Cents,
    pub is_available: bool,
}
