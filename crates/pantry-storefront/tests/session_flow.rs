//! Black-box tests driving the public session surface end to end.

use pantry_commerce::prelude::*;
use pantry_storefront::{Command, InMemoryCatalog, Outcome, StorefrontSession};

#[derive(Default)]
struct RecordingSink {
    requests: Vec<CheckoutRequest>,
}

impl CheckoutSink for RecordingSink {
    fn submit(&mut self, request: CheckoutRequest) {
        self.requests.push(request);
    }
}

fn rs(units: i64) -> Money {
    Money::from_major(units, Currency::INR)
}

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        Product::new("a", "Product A", rs(100))
            .with_category("Nut Butters")
            .with_stock(5),
        Product::new("b", "Product B", rs(250))
            .with_category("Muesli")
            .with_stock(1),
        Product::new("c", "Product C", rs(150))
            .with_category("Oats")
            .with_stock(10),
    ])
}

fn session() -> StorefrontSession<InMemoryCatalog, RecordingSink> {
    StorefrontSession::new(catalog(), RecordingSink::default())
}

#[test]
fn add_twice_accumulates_quantity_and_total() {
    let mut s = session();

    s.apply(Command::Add("a".into()));
    assert_eq!(s.item_count(), 1);
    assert_eq!(s.items()[0].quantity, 1);
    assert_eq!(s.total().unwrap(), rs(100));

    s.apply(Command::Add("a".into()));
    assert_eq!(s.item_count(), 1);
    assert_eq!(s.items()[0].quantity, 2);
    assert_eq!(s.total().unwrap(), rs(200));
}

#[test]
fn decrement_steps_down_then_removes_the_line() {
    let mut s = session();
    s.apply(Command::Add("a".into()));
    s.apply(Command::Add("a".into()));

    s.apply(Command::UpdateQuantity("a".into(), -1));
    assert_eq!(s.items()[0].quantity, 1);
    assert_eq!(s.total().unwrap(), rs(100));

    s.apply(Command::UpdateQuantity("a".into(), -1));
    assert!(s.items().is_empty());
    assert_eq!(s.total().unwrap(), rs(0));
}

#[test]
fn add_beyond_stock_clamps_without_error() {
    let mut s = session();

    s.apply(Command::Add("b".into()));
    let outcome = s.apply(Command::Add("b".into()));

    assert_eq!(outcome, Outcome::Cart(CartChange::Clamped { quantity: 1 }));
    assert_eq!(s.items()[0].quantity, 1);
}

#[test]
fn no_command_sequence_exceeds_known_stock() {
    let mut s = session();

    for _ in 0..20 {
        s.apply(Command::Add("a".into()));
    }
    s.apply(Command::UpdateQuantity("a".into(), 50));
    for _ in 0..20 {
        s.apply(Command::Add("a".into()));
    }

    assert_eq!(s.items()[0].quantity, 5);
}

#[test]
fn empty_cart_checkout_is_a_rejected_noop() {
    let mut s = session();
    s.apply(Command::OpenCart);

    let outcome = s.apply(Command::Checkout);

    assert_eq!(
        outcome,
        Outcome::CheckoutRejected(CommerceError::EmptyCart)
    );
    assert!(s.sink().requests.is_empty());
    // The gate is left exactly as it was.
    assert!(s.is_cart_open());
}

#[test]
fn checkout_emits_one_isolated_snapshot_and_closes_the_drawer() {
    let mut s = session();
    s.apply(Command::Add("a".into()));
    s.apply(Command::Add("c".into()));
    assert_eq!(s.total().unwrap(), rs(250));

    let outcome = s.apply(Command::Checkout);
    let id = match outcome {
        Outcome::CheckoutSubmitted(id) => id,
        other => panic!("expected a submitted checkout, got {other:?}"),
    };

    assert_eq!(s.sink().requests.len(), 1);
    let request = &s.sink().requests[0];
    assert_eq!(request.id, id);
    assert_eq!(request.snapshot.total, rs(250));
    assert_eq!(request.snapshot.item_count, 2);
    assert!(!s.is_cart_open());

    // Further mutation must not reach the emitted snapshot.
    s.apply(Command::Add("a".into()));
    s.apply(Command::Add("c".into()));
    let request = &s.sink().requests[0];
    assert_eq!(request.snapshot.total, rs(250));
    assert_eq!(request.snapshot.line_items[0].quantity, 1);
}

#[test]
fn closing_the_drawer_keeps_the_cart() {
    let mut s = session();
    s.apply(Command::Add("a".into()));
    assert!(s.is_cart_open());

    s.apply(Command::CloseCart);
    assert!(!s.is_cart_open());
    assert_eq!(s.item_count(), 1);

    s.apply(Command::OpenCart);
    assert_eq!(s.item_count(), 1);
}

#[test]
fn remove_is_idempotent_through_the_command_surface() {
    let mut s = session();
    s.apply(Command::Add("a".into()));

    assert_eq!(
        s.apply(Command::Remove("a".into())),
        Outcome::Cart(CartChange::Removed)
    );
    assert_eq!(
        s.apply(Command::Remove("a".into())),
        Outcome::Cart(CartChange::NoOp(NoOpReason::NotFound))
    );
}

#[test]
fn every_reachable_state_keeps_line_quantities_positive() {
    let mut s = session();
    let commands = [
        Command::Add("a".into()),
        Command::Add("b".into()),
        Command::UpdateQuantity("a".into(), 3),
        Command::UpdateQuantity("b".into(), -5),
        Command::Add("b".into()),
        Command::UpdateQuantity("a".into(), -2),
        Command::Remove("c".into()),
        Command::Add("c".into()),
        Command::UpdateQuantity("c".into(), 100),
    ];

    for command in commands {
        s.apply(command);
        for line in s.items() {
            assert!(line.quantity >= 1, "line {line:?} fell below 1");
        }
        // The derived total always matches an exact recomputation.
        let expected = s
            .items()
            .iter()
            .map(|l| l.unit_price.amount_minor * l.quantity)
            .sum::<i64>();
        assert_eq!(s.total().unwrap().amount_minor, expected);
    }
}

#[test]
fn browse_filters_the_catalog_without_touching_the_session() {
    let s = session();

    let results = CatalogQuery::new()
        .with_category("Muesli")
        .apply(s.catalog().all());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id.as_str(), "b");

    assert_eq!(
        s.catalog().categories(),
        vec!["Nut Butters", "Muesli", "Oats"]
    );
}
