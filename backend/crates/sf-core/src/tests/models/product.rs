use crate::{PLACEHOLDER_THUMBNAIL, Product};

fn product(stock: i64, thumbnails: Vec<String>) -> Product {
    Product {
        id: Product::catalog_id(1),
        name: "Saree".into(),
        description: "Silk".into(),
        thumbnails,
        colors: vec![],
        price: 100,
        stock,
        reviews: vec![],
    }
}

#[test]
fn test_catalog_id_is_zero_padded() {
    assert_eq!(Product::catalog_id(1), "PROD001");
    assert_eq!(Product::catalog_id(42), "PROD042");
    assert_eq!(Product::catalog_id(1234), "PROD1234");
}

#[test]
fn test_stock_label() {
    assert_eq!(product(3, vec![]).stock_label(), "In Stock");
    assert_eq!(product(0, vec![]).stock_label(), "Out of Stock");
}

#[test]
fn test_primary_thumbnail_falls_back_to_placeholder() {
    assert_eq!(product(1, vec![]).primary_thumbnail(), PLACEHOLDER_THUMBNAIL);
    assert_eq!(
        product(1, vec!["".into()]).primary_thumbnail(),
        PLACEHOLDER_THUMBNAIL
    );
    assert_eq!(
        product(1, vec!["/a.png".into(), "/b.png".into()]).primary_thumbnail(),
        "/a.png"
    );
}
