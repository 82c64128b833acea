//! # forno-core
//!
//! Foundation crate for the Forno storefront.
//! Defines the domain types, pricing arithmetic, errors, config, and
//! tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod pricing;
pub mod trace;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PricingConfig;
pub use pricing::Totals;
pub use types::money::Cents;
pub use types::pizza::PizzaCustomization;
