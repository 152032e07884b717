use crate::{CoreError, NewProduct};

use googletest::prelude::*;

fn saree() -> NewProduct {
    NewProduct {
        name: Some("Banarasi Silk Saree".into()),
        description: Some("Traditional Banarasi silk saree".into()),
        thumbnails: vec!["/saree.png".into(), "  ".into()],
        colors: vec![" Red ".into(), "".into(), "Blue".into()],
        price: Some(15999),
        stock: Some(10),
    }
}

fn message(product: NewProduct) -> String {
    match product.validate() {
        Err(CoreError::Validation { message, .. }) => message,
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn given_valid_product_when_validated_then_blank_entries_are_dropped() {
    let product = saree().validate().unwrap();

    assert!(product.id.is_empty());
    assert_eq!(product.thumbnails, vec!["/saree.png"]);
    assert_eq!(product.colors, vec!["Red", "Blue"]);
    assert!(product.reviews.is_empty());
}

#[test]
fn given_missing_fields_when_validated_then_reported_in_order() {
    assert_that!(message(NewProduct::default()), eq("name is required"));

    let mut product = saree();
    product.description = None;
    assert_that!(message(product), eq("description is required"));

    let mut product = saree();
    product.price = None;
    assert_that!(message(product), eq("price is required"));
}

#[test]
fn given_non_positive_price_or_negative_stock_then_rejected() {
    let mut product = saree();
    product.price = Some(0);
    assert_that!(message(product), eq("price must be greater than 0"));

    let mut product = saree();
    product.stock = Some(-1);
    assert_that!(message(product), eq("stock cannot be negative"));
}
