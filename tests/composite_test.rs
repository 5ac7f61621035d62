//! Tests for Composite: attachment, identity based removal, lookup

use rust_decimal::Decimal;

use brewtree::domain::{Addin, Coffee, Composite, ItemId, OrderItem, Orderable};
use brewtree::util::testing::{init_test_setup, reference_order};

fn sugar() -> Addin {
    Addin::new("Sugar", Decimal::new(2, 1))
}

fn titles(composite: &Composite) -> Vec<String> {
    composite.iter().map(Orderable::title).collect()
}

#[test]
fn given_items_when_added_then_kept_in_insertion_order() {
    init_test_setup();
    let mut composite = Composite::new();
    composite.add_item(Addin::new("Milk", Decimal::new(7, 1)));
    composite.add_item(sugar());

    assert_eq!(titles(&composite), vec!["Milk", "Sugar"]);
    assert_eq!(composite.len(), 2);
    assert_eq!(composite.amount(), Decimal::new(9, 1));
    assert_eq!(composite.count(), 2);
}

#[test]
fn given_same_item_value_twice_when_added_then_both_are_kept() {
    let mut composite = Composite::new();
    let first = composite.add_item(sugar());
    let second = composite.add_item(sugar());

    assert_ne!(first, second);
    assert_eq!(composite.len(), 2);
}

#[test]
fn given_two_equal_sugars_when_removing_one_then_other_remains() {
    let mut composite = Composite::new();
    let first = composite.add_item(sugar());
    let second = composite.add_item(sugar());

    let removed = composite.remove_item(first).expect("removed");

    assert_eq!(removed.id(), first);
    assert_eq!(composite.len(), 1);
    assert_eq!(composite.items()[0].id(), second);
}

#[test]
fn given_unknown_id_when_removing_then_sequence_unchanged() {
    let mut composite = Composite::new();
    composite.add_item(sugar());
    composite.add_item(Addin::new("Milk", Decimal::new(7, 1)));

    let removed = composite.remove_item(ItemId::new());

    assert!(removed.is_none());
    assert_eq!(titles(&composite), vec!["Sugar", "Milk"]);
}

#[test]
fn given_cloned_item_when_added_twice_then_remove_takes_first_only() {
    let mut composite = Composite::new();
    let item = sugar();
    composite.add_item(item.clone());
    composite.add_item(Addin::new("Milk", Decimal::new(7, 1)));
    composite.add_item(item.clone());

    composite.remove_item(item.id());

    assert_eq!(titles(&composite), vec!["Milk", "Sugar"]);
}

#[test]
fn given_duplicate_when_added_then_gets_fresh_identity() {
    let original = sugar();
    let copy = original.duplicate();

    assert_ne!(original.id(), copy.id());
    assert_eq!(original.title(), copy.title());
}

#[test]
fn given_nested_addin_when_finding_then_returns_it() {
    let order = reference_order();
    let addin_id = order.children()[1].children()[0].id();

    let found = order.items().find(addin_id).expect("found");

    assert_eq!(found.title(), "Milk");
}

#[test]
fn given_nested_addin_when_removing_through_parent_then_totals_drop() {
    let mut order = reference_order();
    let turkish_id = order.children()[0].id();
    let sugar_id = order.children()[0].children()[0].id();

    let turkish = order.find_mut(turkish_id).and_then(OrderItem::as_coffee_mut).expect("coffee");
    let removed = turkish.remove_item(sugar_id);

    assert!(removed.is_some());
    assert_eq!(order.count(), 4);
    assert_eq!(order.amount(), Decimal::new(134, 1));
    assert!(order.items().find(sugar_id).is_none());
}

#[test]
fn given_empty_composite_when_aggregating_then_zero() {
    let composite = Composite::default();

    assert!(composite.is_empty());
    assert_eq!(composite.count(), 0);
    assert_eq!(composite.amount(), Decimal::ZERO);
}

#[test]
fn given_duplicated_coffee_when_mutating_copy_then_original_untouched() {
    let original = Coffee::new("Turkish Coffee", Decimal::new(5, 0)).with(sugar());
    let mut copy = original.duplicate();
    let copied_sugar = copy.children()[0].id();

    assert_ne!(copied_sugar, original.children()[0].id());
    copy.remove_item(copied_sugar);

    assert_eq!(original.count(), 2);
    assert_eq!(copy.count(), 1);
}
