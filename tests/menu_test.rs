//! Tests for Menu lookups and OrderLine parsing

use rstest::rstest;
use rust_decimal::Decimal;

use brewtree::domain::{DomainError, ItemKind, Menu, MenuEntry, OrderLine, Orderable};

// ============================================================
// Menu
// ============================================================

#[rstest]
#[case("turkish", "Turkish Coffee", Decimal::new(5, 0))]
#[case("france", "France Coffee", Decimal::new(7, 0))]
#[case("TURKISH", "Turkish Coffee", Decimal::new(5, 0))]
fn given_default_menu_when_ordering_coffee_then_builds_priced_coffee(
    #[case] key: &str,
    #[case] name: &str,
    #[case] price: Decimal,
) {
    let coffee = Menu::default().coffee(key).unwrap();

    assert_eq!(coffee.name(), name);
    assert_eq!(coffee.price(), price);
    assert!(coffee.children().is_empty());
}

#[rstest]
#[case("sugar", "Sugar", Decimal::new(2, 1))]
#[case(" milk ", "Milk", Decimal::new(7, 1))]
fn given_default_menu_when_ordering_addin_then_builds_priced_addin(
    #[case] key: &str,
    #[case] name: &str,
    #[case] price: Decimal,
) {
    let addin = Menu::default().addin(key).unwrap();

    assert_eq!(addin.title(), name);
    assert_eq!(addin.amount(), price);
}

#[test]
fn given_unknown_key_when_ordering_then_unknown_menu_item() {
    let err = Menu::default().coffee("latte").unwrap_err();

    assert_eq!(err, DomainError::UnknownMenuItem("latte".to_string()));
}

#[rstest]
#[case("sugar", ItemKind::Coffee)]
#[case("turkish", ItemKind::Addin)]
fn given_wrong_kind_when_ordering_then_wrong_kind(#[case] key: &str, #[case] expected: ItemKind) {
    let menu = Menu::default();
    let err = match expected {
        ItemKind::Coffee => menu.coffee(key).map(|_| ()).unwrap_err(),
        ItemKind::Addin => menu.addin(key).map(|_| ()).unwrap_err(),
    };

    assert_eq!(
        err,
        DomainError::WrongKind {
            key: key.to_string(),
            expected
        }
    );
}

#[test]
fn given_same_key_twice_when_ordering_then_items_are_independent() {
    let menu = Menu::default();
    let first = menu.addin("sugar").unwrap();
    let second = menu.addin("sugar").unwrap();

    assert_ne!(first.id(), second.id());
}

#[test]
fn given_custom_entry_when_inserted_then_listed_in_key_order() {
    let mut menu = Menu::default();
    let previous = menu.insert("Honey", MenuEntry::addin("Honey", Decimal::new(5, 1)));

    assert!(previous.is_none());
    let keys: Vec<&str> = menu.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["france", "honey", "milk", "sugar", "turkish"]);
    assert_eq!(menu.len(), 5);
}

// ============================================================
// OrderLine
// ============================================================

#[rstest]
#[case("turkish", "turkish", &[])]
#[case("turkish+sugar+milk", "turkish", &["sugar", "milk"])]
#[case(" france + milk ", "france", &["milk"])]
fn given_valid_line_when_parsing_then_splits_coffee_and_addins(
    #[case] raw: &str,
    #[case] coffee: &str,
    #[case] addins: &[&str],
) {
    let line: OrderLine = raw.parse().unwrap();

    assert_eq!(line.coffee, coffee);
    assert_eq!(line.addins, addins.iter().map(|s| s.to_string()).collect::<Vec<_>>());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("+sugar")]
#[case("turkish+")]
#[case("turkish++milk")]
fn given_malformed_line_when_parsing_then_invalid_order_line(#[case] raw: &str) {
    let err = raw.parse::<OrderLine>().unwrap_err();

    assert!(matches!(err, DomainError::InvalidOrderLine { .. }), "{err}");
}

#[test]
fn given_parsed_line_when_displayed_then_canonical_form() {
    let line: OrderLine = " turkish + sugar+milk".parse().unwrap();

    assert_eq!(line.to_string(), "turkish+sugar+milk");
}
