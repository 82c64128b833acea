//! Pricing property tests: quote determinism, topping order independence,
//! single-rounding behavior, and total derivation boundaries.

use forno_core::config::PricingConfig;
use forno_core::pricing::{quote, unit_price, Totals};
use forno_core::types::pizza::{
    crust_types, pizza_sizes, sauce_options, topping_options, PizzaCustomization,
    ToppingOption,
};
use proptest::prelude::*;

fn base_customization() -> PizzaCustomization {
    let crusts = crust_types();
    let sizes = pizza_sizes();
    let sauces = sauce_options();
    PizzaCustomization {
        crust: crusts[0].clone(),  // Original, ×1.0
        size: sizes[1].clone(),    // Regular, 899
        sauce: sauces[0].clone(),  // Fiery, 0
        toppings: Vec::new(),
    }
}

fn topping(id: &str) -> ToppingOption {
    topping_options()
        .into_iter()
        .find(|t| t.id == id)
        .unwrap_or_else(|| panic!("no topping {id}"))
}

#[test]
fn regular_original_fiery_is_base_price() {
    let c = base_customization();
    assert_eq!(unit_price(&c), 899);
}

#[test]
fn adding_then_removing_a_topping_restores_the_price() {
    let mut c = base_customization();
    let before = unit_price(&c);
    assert_eq!(before, 899);

    c.toppings.push(topping("chicken"));
    assert_eq!(unit_price(&c), 1049);

    c.toppings.retain(|t| t.id != "chicken");
    assert_eq!(unit_price(&c), before);
}

#[test]
fn topping_selection_order_does_not_change_the_price() {
    let mut ab = base_customization();
    ab.toppings = vec![topping("chicken"), tops_olives()];
    let mut ba = base_customization();
    ba.toppings = vec![tops_olives(), topping("chicken")];
    assert_eq!(unit_price(&ab), unit_price(&ba));
}

fn tops_olives() -> ToppingOption {
    topping("olives")
}

#[test]
fn empty_topping_set_is_valid() {
    let mut c = base_customization();
    c.sauce = sauce_options()[2].clone(); // Peri Peri, 75
    assert_eq!(unit_price(&c), 899 + 75);
}

#[test]
fn quantity_rounds_once_at_the_end() {
    // Thin crust on Regular: 899 × 1.1 = 988.9 per unit.
    // Rounding per unit would give 989 × 3 = 2967; rounding once gives 2967 too,
    // so use a case where they differ: 988.9 × 3 = 2966.7 → 2967,
    // while round(988.9) = 989 → 2967. Pan crust on Personal: 599 × 1.2 = 718.8.
    // Once: 718.8 × 5 = 3594; per-unit: 719 × 5 = 3595.
    let mut c = base_customization();
    c.crust = crust_types()[2].clone(); // Pan, ×1.2
    c.size = pizza_sizes()[0].clone(); // Personal, 599
    assert_eq!(quote(&c, 5), 3594);
}

#[test]
fn price_is_monotonic_in_toppings() {
    let mut c = base_customization();
    let mut last = unit_price(&c);
    for t in topping_options() {
        c.toppings.push(t);
        let next = unit_price(&c);
        assert!(next >= last, "price decreased after adding a topping");
        last = next;
    }
}

#[test]
fn delivery_fee_boundary_is_strict() {
    let config = PricingConfig::default();
    assert_eq!(Totals::derive(1000, &config).delivery_fee, 150);
    assert_eq!(Totals::derive(1001, &config).delivery_fee, 0);
}

#[test]
fn tax_and_total_at_the_threshold() {
    let config = PricingConfig::default();
    let totals = Totals::derive(1000, &config);
    assert_eq!(totals.tax, 150);
    assert_eq!(totals.total, 1000 + 150 + 150);
}

#[test]
fn config_overrides_apply() {
    let config = PricingConfig::from_toml_str(
        "tax_rate = 0.05\ndelivery_fee = 100\nfree_delivery_threshold = 500\n",
    )
    .unwrap();
    let totals = Totals::derive(600, &config);
    assert_eq!(totals.delivery_fee, 0);
    assert_eq!(totals.tax, 30);
    assert_eq!(totals.total, 630);
}

proptest! {
    /// Any permutation of any topping subset quotes the same price.
    #[test]
    fn quote_is_permutation_invariant(indices in proptest::collection::vec(0usize..8, 0..8)) {
        let all = topping_options();
        let mut chosen: Vec<ToppingOption> = Vec::new();
        for i in indices {
            if !chosen.iter().any(|t| t.id == all[i].id) {
                chosen.push(all[i].clone());
            }
        }

        let mut forward = base_customization();
        forward.toppings = chosen.clone();
        let mut reversed = base_customization();
        chosen.reverse();
        reversed.toppings = chosen;

        prop_assert_eq!(unit_price(&forward), unit_price(&reversed));
    }

    /// Quotes are deterministic and non-negative for every size/crust/sauce combination.
    #[test]
    fn quote_is_deterministic(size_ix in 0usize..4, crust_ix in 0usize..3, sauce_ix in 0usize..3, qty in 1u32..10) {
        let c = PizzaCustomization {
            crust: crust_types()[crust_ix].clone(),
            size: pizza_sizes()[size_ix].clone(),
            sauce: sauce_options()[sauce_ix].clone(),
            toppings: Vec::new(),
        };
        let first = quote(&c, qty);
        prop_assert_eq!(first, quote(&c, qty));
        prop_assert!(first >= 0);
    }
}
