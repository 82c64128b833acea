//! Pricing rules configuration.

use serde::{Deserialize, Serialize};

use crate::types::money::Cents;

/// Tunable pricing rules for cart total derivation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PricingConfig {
    /// Tax rate applied to the subtotal. Default: 0.15 (15%).
    pub tax_rate: Option<f64>,
    /// Flat delivery fee in currency units. Default: 150.
    pub delivery_fee: Option<Cents>,
    /// Delivery is free when the subtotal strictly exceeds this. Default: 1000.
    pub free_delivery_threshold: Option<Cents>,
}

impl PricingConfig {
    /// Parse from a TOML string.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Returns the effective tax rate, defaulting to 15%.
    pub fn effective_tax_rate(&self) -> f64 {
        self.tax_rate.unwrap_or(0.15)
    }

    /// Returns the effective delivery fee, defaulting to 150.
    pub fn effective_delivery_fee(&self) -> Cents {
        self.delivery_fee.unwrap_or(150)
    }

    /// Returns the effective free-delivery threshold, defaulting to 1000.
    /// The rule is strict: a subtotal equal to the threshold still pays the fee.
    pub fn effective_free_delivery_threshold(&self) -> Cents {
        self.free_delivery_threshold.unwrap_or(1000)
    }
}
