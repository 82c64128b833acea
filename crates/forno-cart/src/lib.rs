//! # forno-cart
//!
//! The cart engine: the single point of mutation for "what the customer
//! intends to buy". Holds an ordered collection of line items whose four
//! derived totals are always recomputed from scratch, and owns the
//! persistence side effects for the cart snapshot.

pub mod engine;
pub mod line_item;

pub use engine::CartEngine;
pub use line_item::LineItem;
