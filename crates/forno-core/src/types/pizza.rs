//! Pizza customization options and fixed-price deals.
//!
//! The option tables are fixed product data, not remote rows. Prices are
//! whole currency units; the crust carries the only multiplicative factor.

use serde::{Deserialize, Serialize};

use super::money::Cents;

/// A crust choice. `price_modifier` multiplies the size's base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrustType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_modifier: f64,
}

/// A pizza size with its base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaSize {
    pub id: String,
    pub name: String,
    pub diameter: String,
    pub serving_size: String,
    pub base_price: Cents,
}

/// A sauce choice: flat surcharge plus a spice-level attribute for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SauceOption {
    pub id: String,
    pub name: String,
    pub spice_level: u8,
    pub price: Cents,
}

/// Display grouping for toppings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToppingCategory {
    Meat,
    Vegetables,
    Cheese,
}

/// A topping: flat per-topping surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToppingOption {
    pub id: String,
    pub name: String,
    pub category: ToppingCategory,
    pub price: Cents,
}

/// A fixed-price bundle. Contents are display data, not individually priced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Cents,
    pub items_included: serde_json::Value,
}

/// An immutable selection tuple defining a custom pizza.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaCustomization {
    pub crust: CrustType,
    pub size: PizzaSize,
    pub sauce: SauceOption,
    pub toppings: Vec<ToppingOption>,
}

impl PizzaCustomization {
    /// Display name, e.g. "Custom Regular Pizza".
    pub fn display_name(&self) -> String {
        format!("Custom {} Pizza", self.size.name)
    }

    /// Display description, e.g. "Original Crust with Fiery Sauce and Chicken, Onion".
    pub fn description(&self) -> String {
        let base = format!("{} with {}", self.crust.name, self.sauce.name);
        if self.toppings.is_empty() {
            base
        } else {
            let names: Vec<&str> = self.toppings.iter().map(|t| t.name.as_str()).collect();
            format!("{} and {}", base, names.join(", "))
        }
    }
}

/// The three crust choices.
pub fn crust_types() -> Vec<CrustType> {
    vec![
        CrustType {
            id: "original".into(),
            name: "Original Crust".into(),
            description: "Hand-tossed classic".into(),
            price_modifier: 1.0,
        },
        CrustType {
            id: "thin".into(),
            name: "Thin Crust".into(),
            description: "Crispy and light".into(),
            price_modifier: 1.1,
        },
        CrustType {
            id: "pan".into(),
            name: "Pan Crust".into(),
            description: "Thick & fluffy".into(),
            price_modifier: 1.2,
        },
    ]
}

/// The four pizza sizes.
pub fn pizza_sizes() -> Vec<PizzaSize> {
    vec![
        PizzaSize {
            id: "personal".into(),
            name: "Personal".into(),
            diameter: "6\"".into(),
            serving_size: "1 person".into(),
            base_price: 599,
        },
        PizzaSize {
            id: "regular".into(),
            name: "Regular".into(),
            diameter: "9\"".into(),
            serving_size: "1-2 people".into(),
            base_price: 899,
        },
        PizzaSize {
            id: "medium".into(),
            name: "Medium".into(),
            diameter: "12\"".into(),
            serving_size: "2-3 people".into(),
            base_price: 1299,
        },
        PizzaSize {
            id: "large".into(),
            name: "Large".into(),
            diameter: "15\"".into(),
            serving_size: "3-4 people".into(),
            base_price: 1699,
        },
    ]
}

/// The three sauce choices.
pub fn sauce_options() -> Vec<SauceOption> {
    vec![
        SauceOption {
            id: "fiery".into(),
            name: "Fiery Sauce".into(),
            spice_level: 3,
            price: 0,
        },
        SauceOption {
            id: "garlic".into(),
            name: "Creamy Garlic".into(),
            spice_level: 0,
            price: 50,
        },
        SauceOption {
            id: "peri_peri".into(),
            name: "Peri Peri Sauce".into(),
            spice_level: 4,
            price: 75,
        },
    ]
}

/// The topping menu, grouped by category for display.
pub fn topping_options() -> Vec<ToppingOption> {
    vec![
        ToppingOption {
            id: "chicken".into(),
            name: "Chicken".into(),
            category: ToppingCategory::Meat,
            price: 150,
        },
        ToppingOption {
            id: "pepperoni".into(),
            name: "Pepperoni".into(),
            category: ToppingCategory::Meat,
            price: 180,
        },
        ToppingOption {
            id: "mushrooms".into(),
            name: "Mushrooms".into(),
            category: ToppingCategory::Vegetables,
            price: 80,
        },
        ToppingOption {
            id: "capsicum".into(),
            name: "Capsicum".into(),
            category: ToppingCategory::Vegetables,
            price: 70,
        },
        ToppingOption {
            id: "onion".into(),
            name: "Onion".into(),
            category: ToppingCategory::Vegetables,
            price: 50,
        },
        ToppingOption {
            id: "jalapenos".into(),
            name: "Jalapeños".into(),
            category: ToppingCategory::Vegetables,
            price: 90,
        },
        ToppingOption {
            id: "olives".into(),
            name: "Olives".into(),
            category: ToppingCategory::Vegetables,
            price: 100,
        },
        ToppingOption {
            id: "cheese_blend".into(),
            name: "Cheese Blend".into(),
            category: ToppingCategory::Cheese,
            price: 120,
        },
    ]
}

/// The six fixed-price deals.
pub fn deals() -> Vec<DealOption> {
    vec![
        DealOption {
            id: "solo_cravings".into(),
            name: "Solo Cravings".into(),
            description: "Personal Pizza + Drink".into(),
            price: 599,
            items_included: serde_json::json!({ "pizza_size": "personal", "drink": true }),
        },
        DealOption {
            id: "power_of_3".into(),
            name: "Power of 3".into(),
            description: "Medium Pizza + 3 Chicken + Cheesy Bread + 2 Drinks".into(),
            price: 1849,
            items_included: serde_json::json!({
                "pizza_size": "medium", "chicken_pieces": 3, "cheesy_bread": true, "drinks": 2
            }),
        },
        DealOption {
            id: "boss_box".into(),
            name: "The Boss Box".into(),
            description: "Large + Regular Pizza + 9pc Chicken + 1.5L Drink".into(),
            price: 3599,
            items_included: serde_json::json!({
                "large_pizza": true, "regular_pizza": true, "chicken_pieces": 9, "large_drink": true
            }),
        },
        DealOption {
            id: "squad_goals".into(),
            name: "Squad Goals".into(),
            description: "2 Regular Pizzas + 5 Strips + Fries + 1.5L Drink".into(),
            price: 2749,
            items_included: serde_json::json!({
                "regular_pizzas": 2, "chicken_strips": 5, "fries": true, "large_drink": true
            }),
        },
        DealOption {
            id: "couple_connect".into(),
            name: "Couple Connect".into(),
            description: "Regular Pizza + Beverage options".into(),
            price: 1299,
            items_included: serde_json::json!({ "pizza_size": "regular", "beverages": 2 }),
        },
        DealOption {
            id: "family_weekend".into(),
            name: "Family Weekend Box".into(),
            description: "2 Large Pizzas + Fish & Chips + Bread + Chicken + Drink + Dip Platter"
                .into(),
            price: 5499,
            items_included: serde_json::json!({
                "large_pizzas": 2, "fish_and_chips": true, "bread": true,
                "chicken": true, "drink": true, "dip_platter": true
            }),
        },
    ]
}
