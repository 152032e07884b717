use crate::ProductSummaryDto;

use sf_core::Product;

use googletest::prelude::*;

fn product(id: &str, stock: i64, thumbnails: Vec<String>) -> Product {
    Product {
        id: id.to_string(),
        name: "Silk Dupatta".to_string(),
        description: "Handwoven".to_string(),
        thumbnails,
        colors: vec!["Gold".to_string()],
        price: 2499,
        stock,
        reviews: vec![],
    }
}

#[test]
fn given_matching_id_when_converted_then_selected() {
    let dto = ProductSummaryDto::from_product(product("PROD002", 3, vec![]), Some("PROD002"));

    assert!(dto.selected);
    assert!(dto.in_stock);
    assert_that!(dto.stock_label, eq("In Stock"));
    assert_that!(dto.thumbnail, eq("/placeholder.svg"));
}

#[test]
fn given_other_id_when_converted_then_not_selected() {
    let dto = ProductSummaryDto::from_product(
        product("PROD002", 0, vec!["/dupatta.png".to_string()]),
        Some("PROD001"),
    );

    assert!(!dto.selected);
    assert!(!dto.in_stock);
    assert_that!(dto.stock_label, eq("Out of Stock"));
    assert_that!(dto.thumbnail, eq("/dupatta.png"));
}

#[test]
fn given_no_selection_when_converted_then_not_selected() {
    let dto = ProductSummaryDto::from_product(product("PROD002", 1, vec![]), None);

    assert!(!dto.selected);
}
