//! Integer currency units.
//!
//! All prices in the system are whole currency units (PKR). Arithmetic
//! stays in integers; the only rounding point is the final multiplication
//! by quantity in `pricing::quote`.

/// A price in whole currency units. Non-negative everywhere it is derived.
pub type Cents = i64;
