//! Pricing arithmetic: pizza customization quotes and cart total derivation.
//!
//! All inputs are integer currency units. The crust multiplier is the only
//! fractional factor, and rounding happens exactly once, at the final
//! multiplication by quantity. This keeps select/deselect round trips exact
//! and makes the price independent of topping insertion order.

use serde::{Deserialize, Serialize};

use crate::config::PricingConfig;
use crate::types::money::Cents;
use crate::types::pizza::PizzaCustomization;

/// Price for `quantity` pizzas of the given customization, rounded once.
///
/// `round((base × crust_modifier + sauce + Σ toppings) × quantity)`
pub fn quote(customization: &PizzaCustomization, quantity: u32) -> Cents {
    let toppings: Cents = customization.toppings.iter().map(|t| t.price).sum();
    let per_unit = customization.size.base_price as f64 * customization.crust.price_modifier
        + (customization.sauce.price + toppings) as f64;
    (per_unit * quantity as f64).round() as Cents
}

/// Price for a single pizza of the given customization.
pub fn unit_price(customization: &PizzaCustomization) -> Cents {
    quote(customization, 1)
}

/// The four derived monetary fields of a cart. Always a pure function of
/// the line-item collection; there is no independent mutable state here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Cents,
    pub delivery_fee: Cents,
    pub tax: Cents,
    pub total: Cents,
}

impl Totals {
    /// All fields zero, the empty-cart state.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Derive fee, tax, and total from a subtotal.
    ///
    /// Delivery is free only when the subtotal strictly exceeds the
    /// threshold; a subtotal exactly at the threshold still pays the fee.
    pub fn derive(subtotal: Cents, config: &PricingConfig) -> Self {
        let delivery_fee = if subtotal > config.effective_free_delivery_threshold() {
            0
        } else {
            config.effective_delivery_fee()
        };
        let tax = (subtotal as f64 * config.effective_tax_rate()).round() as Cents;
        Self {
            subtotal,
            delivery_fee,
            tax,
            total: subtotal + delivery_fee + tax,
        }
    }
}
