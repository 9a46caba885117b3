//! End-to-end checks of the parsing pipeline over multi-module sources.

use heddle_core::semantic::{LEVEL_MAX, StatementKind};
use heddle_parser::{build_chart, split_modules};

const SOURCE: &str = "\
prelude text is ignored
\\module checkout
scan items \\in cart \\out total   # sums line prices
    \\repeat per item
        add price \\in cart \\out total
    \\fork member discount
        \\true apply discount \\in total \\out total
(internal draft)
\\data cart

\\module refund
\\return nothing to do
";

#[test]
fn splits_every_module() {
    let modules = split_modules(SOURCE);
    let names: Vec<&str> = modules.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["checkout", "refund"]);
}

#[test]
fn builds_each_module_independently() {
    let modules = split_modules(SOURCE);

    let checkout = build_chart(&modules[0], LEVEL_MAX).unwrap();
    assert_eq!(checkout.process().len(), 5);
    // `cart` is declared, `total` synthesized from references.
    let data_labels: Vec<&str> = checkout
        .data()
        .records()
        .iter()
        .map(|record| record.label())
        .collect();
    assert_eq!(data_labels, vec!["cart", "total"]);

    let refund = build_chart(&modules[1], LEVEL_MAX).unwrap();
    assert_eq!(refund.process().len(), 1);
    assert_eq!(refund.process().records()[0].kind(), StatementKind::Return);
    assert!(refund.data().is_empty());
}

#[test]
fn sibling_links_respect_nesting() {
    let modules = split_modules(SOURCE);
    let checkout = build_chart(&modules[0], LEVEL_MAX).unwrap();
    let records = checkout.process().records();

    // Process order: scan(0), repeat(1), add(2), fork(1), true(2).
    assert_eq!(records[1].level(), 1);
    assert_eq!(records[3].level(), 1);
    assert_eq!(records[3].before(), Some(1));
    assert_eq!(records[1].next(), Some(3));
    // The two level-2 records are separated by a level-1 record, so they
    // never link.
    assert_eq!(records[4].before(), None);
    assert_eq!(records[2].next(), None);
}

#[test]
fn synthesized_data_lands_at_declared_origin() {
    let modules = split_modules(SOURCE);
    let checkout = build_chart(&modules[0], LEVEL_MAX).unwrap();

    let total = &checkout.data().records()[1];
    assert_eq!(total.level(), checkout.data().records()[0].level());
    assert_eq!(total.text(), "\\data total");
}
