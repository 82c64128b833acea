//! Domain types: money, catalog, pizza options, orders, profiles.

pub mod catalog;
pub mod money;
pub mod order;
pub mod pizza;
pub mod profile;

pub use catalog::{Category, MenuItem, MenuItemSize};
pub use money::Cents;
pub use order::{
    DeliveryAddress, Order, OrderItem, OrderItemKind, OrderStatus, OrderStatusEntry,
    PaymentMethod,
};
pub use pizza::{
    CrustType, DealOption, PizzaCustomization, PizzaSize, SauceOption, ToppingCategory,
    ToppingOption,
};
pub use profile::{UserAddress, UserProfile};
