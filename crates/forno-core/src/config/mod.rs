//! Configuration types.

pub mod pricing_config;

pub use pricing_config::PricingConfig;
