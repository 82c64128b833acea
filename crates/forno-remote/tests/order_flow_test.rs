//! End-to-end checkout tests: validation, atomic create, cart clearing,
//! and the status timeline.

use std::sync::Arc;

use forno_cart::{CartEngine, LineItem};
use forno_core::config::PricingConfig;
use forno_core::errors::OrderError;
use forno_core::types::catalog::{MenuItem, MenuItemSize};
use forno_core::types::order::{OrderStatus, PaymentMethod};
use forno_remote::{CreateOrderRequest, InMemoryRemoteStore, OrderService};
use forno_storage::{keys, LocalStore};

fn menu_line(id: &str, price: i64, quantity: u32) -> LineItem {
    let item = MenuItem {
        id: id.into(),
        category_id: "pizzas".into(),
        name: format!("Pizza {id}"),
        description: "A pizza".into(),
        image_url: None,
        rating: 4.5,
        is_popular: false,
        is_available: true,
        sort_order: 0,
        sizes: vec![MenuItemSize {
            id: "regular".into(),
            menu_item_id: id.into(),
            size_name: "Regular".into(),
            price,
            is_available: true,
        }],
    };
    LineItem::menu(item, "regular", vec![], quantity).unwrap()
}

fn request() -> CreateOrderRequest {
    CreateOrderRequest {
        customer_name: "Ayesha Khan".into(),
        customer_phone: "03001234567".into(),
        customer_email: None,
        street: "12 Mall Road".into(),
        city: "Lahore".into(),
        zip: "54000".into(),
        coordinates: None,
        order_notes: Some("Ring the bell".into()),
        payment_method: PaymentMethod::CashOnDelivery,
    }
}

#[test]
fn blank_required_fields_fail_before_any_remote_call() {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let service = OrderService::new(remote.clone());
    let mut cart = CartEngine::new(PricingConfig::default());
    cart.add_item(menu_line("margherita", 899, 1));

    let mut req = request();
    req.customer_name = "   ".into();
    let err = service.submit(&mut cart, &req).unwrap_err();
    assert!(matches!(
        err,
        OrderError::MissingField {
            field: "customer_name"
        }
    ));
    assert_eq!(remote.order_count(), 0);
    assert_eq!(cart.len(), 1);
}

#[test]
fn empty_cart_is_rejected() {
    let service = OrderService::new(Arc::new(InMemoryRemoteStore::new()));
    let mut cart = CartEngine::new(PricingConfig::default());

    let err = service.submit(&mut cart, &request()).unwrap_err();
    assert!(matches!(err, OrderError::EmptyCart));
}

#[test]
fn successful_submit_creates_order_and_clears_cart() {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let store = LocalStore::open_in_memory().unwrap();
    let service = OrderService::with_store(remote.clone(), store.clone());
    let mut cart = CartEngine::new(PricingConfig::default());
    cart.add_item(menu_line("margherita", 899, 2));
    let totals = cart.totals();

    let order = service.submit(&mut cart, &request()).unwrap();

    assert!(order.order_number.starts_with("BBP-"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.subtotal, totals.subtotal);
    assert_eq!(order.total_amount, totals.total);
    assert_eq!(order.customer_email, "no-email@example.com");

    assert!(cart.is_empty());
    assert_eq!(cart.totals().total, 0);
    assert_eq!(
        store.get_raw(keys::LAST_ORDER_PHONE).unwrap().as_deref(),
        Some("03001234567")
    );
    assert_eq!(service.last_order_phone().as_deref(), Some("03001234567"));
}

#[test]
fn create_seeds_the_status_timeline() {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let service = OrderService::new(remote);
    let mut cart = CartEngine::new(PricingConfig::default());
    cart.add_item(menu_line("margherita", 899, 1));

    let order = service.submit(&mut cart, &request()).unwrap();
    let history = service.history(&order.id);

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].status, OrderStatus::Pending);
    assert_eq!(history[0].notes.as_deref(), Some("Order placed successfully"));
    assert_eq!(history[0].created_by, "system");
}

#[test]
fn remote_failure_leaves_the_cart_untouched() {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let store = LocalStore::open_in_memory().unwrap();
    let service = OrderService::with_store(remote.clone(), store.clone());
    let mut cart = CartEngine::new(PricingConfig::default());
    cart.add_item(menu_line("margherita", 899, 2));

    remote.set_unavailable(true);
    let err = service.submit(&mut cart, &request()).unwrap_err();
    assert!(matches!(err, OrderError::Remote(_)));

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].quantity(), 2);
    assert!(store.get_raw(keys::LAST_ORDER_PHONE).unwrap().is_none());
}

#[test]
fn orders_come_back_newest_first_per_phone() {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let service = OrderService::new(remote.clone());

    for _ in 0..3 {
        let mut cart = CartEngine::new(PricingConfig::default());
        cart.add_item(menu_line("margherita", 899, 1));
        service.submit(&mut cart, &request()).unwrap();
    }
    let mut other_cart = CartEngine::new(PricingConfig::default());
    other_cart.add_item(menu_line("margherita", 899, 1));
    let mut other_req = request();
    other_req.customer_phone = "03210000000".into();
    service.submit(&mut other_cart, &other_req).unwrap();

    let orders = service.orders_for("03001234567");
    assert_eq!(orders.len(), 3);
    assert!(orders
        .windows(2)
        .all(|w| w[0].created_at_ms >= w[1].created_at_ms));
}

#[test]
fn status_updates_append_to_the_timeline() {
    let remote = Arc::new(InMemoryRemoteStore::new());
    let service = OrderService::new(remote);
    let mut cart = CartEngine::new(PricingConfig::default());
    cart.add_item(menu_line("margherita", 899, 1));
    let order = service.submit(&mut cart, &request()).unwrap();

    service
        .record_status(&order.id, OrderStatus::Confirmed, None, "kitchen")
        .unwrap();
    service
        .record_status(
            &order.id,
            OrderStatus::OutForDelivery,
            Some("Rider assigned"),
            "kitchen",
        )
        .unwrap();

    let history = service.history(&order.id);
    let statuses: Vec<OrderStatus> = history.iter().map(|h| h.status).collect();
    assert_eq!(
        statuses,
        vec![
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::OutForDelivery
        ]
    );

    let current = &service.orders_for("03001234567")[0];
    assert_eq!(current.status, OrderStatus::OutForDelivery);
    assert_eq!(current.status.display_name(), "On the Way");
}

#[test]
fn status_update_on_unknown_order_is_an_error() {
    let service = OrderService::new(Arc::new(InMemoryRemoteStore::new()));
    assert!(service
        .record_status("order_999", OrderStatus::Confirmed, None, "kitchen")
        .is_err());
}
