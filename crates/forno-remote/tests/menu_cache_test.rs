//! Menu service tests: cache hits, TTL expiry, invalidation, and
//! degraded reads.

use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use forno_core::types::catalog::{Category, MenuItem, MenuItemSize};
use forno_core::types::pizza::deals;
use forno_remote::{InMemoryRemoteStore, MenuService};

fn category(id: &str, sort_order: i64) -> Category {
    Category {
        id: id.into(),
        name: id.to_uppercase(),
        slug: id.into(),
        icon: "🍕".into(),
        sort_order,
    }
}

fn item(id: &str, category: &str, popular: bool, available: bool) -> MenuItem {
    MenuItem {
        id: id.into(),
        category_id: category.into(),
        name: format!("The {id}"),
        description: format!("{id} pizza with fresh toppings"),
        image_url: None,
        rating: 4.2,
        is_popular: popular,
        is_available: available,
        sort_order: 0,
        sizes: vec![MenuItemSize {
            id: "regular".into(),
            menu_item_id: id.into(),
            size_name: "Regular".into(),
            price: 899,
            is_available: true,
        }],
    }
}

fn seeded_store() -> Arc<InMemoryRemoteStore> {
    let store = Arc::new(InMemoryRemoteStore::new());
    store.seed_categories(vec![category("sides", 2), category("pizzas", 1)]);
    store.seed_menu_items(vec![
        item("margherita", "pizzas", true, true),
        item("pepperoni", "pizzas", false, true),
        item("fries", "sides", false, true),
        item("calzone", "pizzas", false, false),
    ]);
    store.seed_deals(deals());
    store
}

#[test]
fn cached_lists_survive_a_backend_outage() {
    let store = seeded_store();
    let menu = MenuService::new(store.clone());

    let first = menu.categories();
    assert_eq!(first.len(), 2);
    // Sorted by sort_order, not seeding order.
    assert_eq!(first[0].id, "pizzas");

    store.set_unavailable(true);
    let second = menu.categories();
    assert_eq!(second, first);
}

#[test]
fn each_category_list_is_cached_independently() {
    let store = seeded_store();
    let menu = MenuService::new(store.clone());

    assert_eq!(menu.menu_items(Some("pizzas")).len(), 2);
    store.set_unavailable(true);

    // Warm key still answers; cold key degrades to empty.
    assert_eq!(menu.menu_items(Some("pizzas")).len(), 2);
    assert!(menu.menu_items(Some("sides")).is_empty());
}

#[test]
fn unavailable_items_never_appear() {
    let store = seeded_store();
    let menu = MenuService::new(store);

    let all = menu.menu_items(None);
    assert!(all.iter().all(|i| i.id != "calzone"));

    let popular = menu.popular_items();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].id, "margherita");
}

#[test]
fn expired_entries_are_refetched() {
    let store = seeded_store();
    let menu = MenuService::with_cache_ttl(store.clone(), Duration::from_millis(50));

    assert_eq!(menu.deals().len(), 6);
    store.seed_deals(vec![]);

    // Within the TTL the stale list is still served.
    assert_eq!(menu.deals().len(), 6);

    sleep(Duration::from_millis(120));
    assert!(menu.deals().is_empty());
}

#[test]
fn refresh_invalidates_every_entry() {
    let store = seeded_store();
    let menu = MenuService::new(store.clone());

    assert_eq!(menu.categories().len(), 2);
    assert_eq!(menu.popular_items().len(), 1);

    store.seed_categories(vec![category("drinks", 1)]);
    store.seed_menu_items(vec![]);
    menu.refresh();

    assert_eq!(menu.categories().len(), 1);
    assert_eq!(menu.categories()[0].id, "drinks");
    assert!(menu.popular_items().is_empty());
}

#[test]
fn search_always_hits_the_remote_store() {
    let store = seeded_store();
    let menu = MenuService::new(store.clone());

    let hits = menu.search("MARGH");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "margherita");

    // No cache behind search: an outage empties the results immediately.
    store.set_unavailable(true);
    assert!(menu.search("MARGH").is_empty());
}

#[test]
fn search_matches_descriptions_too() {
    let store = seeded_store();
    let menu = MenuService::new(store);

    let hits = menu.search("fresh toppings");
    assert_eq!(hits.len(), 3);
}

#[test]
fn single_item_lookup_propagates_failure() {
    let store = seeded_store();
    let menu = MenuService::new(store.clone());

    assert!(menu.menu_item("margherita").is_ok());
    assert!(menu.menu_item("nonexistent").is_err());

    store.set_unavailable(true);
    assert!(menu.menu_item("margherita").is_err());
}
