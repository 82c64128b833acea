//! Remote storefront access: the `RemoteStore` trait, a read-through menu
//! cache, order submission and tracking, and local-first profile sync.

pub mod cache;
pub mod memory;
pub mod menu;
pub mod orders;
pub mod store;
pub mod sync;

pub use cache::MenuCache;
pub use memory::InMemoryRemoteStore;
pub use menu::MenuService;
pub use orders::{CreateOrderRequest, OrderService};
pub use store::{NewOrder, RemoteStore};
pub use sync::ProfileSync;
