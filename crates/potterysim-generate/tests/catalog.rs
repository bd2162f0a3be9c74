use std::collections::HashSet;

use potterysim_generate::{GLAZES, PRODUCT_TYPES, ProductType, SIZES, Size, build_catalog};

#[test]
fn catalog_covers_full_cross_product() {
    let products = build_catalog();
    assert_eq!(
        products.len(),
        PRODUCT_TYPES.len() * SIZES.len() * GLAZES.len()
    );
    assert_eq!(products.len(), 54);

    let combinations: HashSet<(ProductType, Size, &str)> = products
        .iter()
        .map(|product| (product.product_type, product.size, product.glaze.as_str()))
        .collect();
    assert_eq!(combinations.len(), 54, "no duplicate combinations");
}

#[test]
fn product_ids_are_sequential_from_one() {
    let products = build_catalog();
    for (index, product) in products.iter().enumerate() {
        assert_eq!(product.id, index as i64 + 1);
    }
}

#[test]
fn prices_follow_base_plus_increment_formula() {
    for product in build_catalog() {
        let expected = product.product_type.base_price()
            + product.product_type.size_increment() * f64::from(product.size.index());
        assert_eq!(product.price, expected, "product {}", product.name);
    }
}

#[test]
fn names_concatenate_type_glaze_size() {
    for product in build_catalog() {
        assert_eq!(
            product.name,
            format!(
                "{} {} {}",
                product.product_type.as_str(),
                product.glaze,
                product.size.as_str()
            )
        );
    }
}

#[test]
fn catalog_is_identical_across_builds() {
    assert_eq!(build_catalog(), build_catalog());
}

#[test]
fn products_serialize_to_json() {
    let products = build_catalog();
    let json = serde_json::to_string(&products).expect("serialize products");
    let parsed: Vec<potterysim_generate::Product> =
        serde_json::from_str(&json).expect("parse products");
    assert_eq!(parsed, products);
}
