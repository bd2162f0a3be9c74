use crate::model::{Product, ProductType, Size};

pub const PRODUCT_TYPES: [ProductType; 3] = [ProductType::Vase, ProductType::Mug, ProductType::Bowl];

pub const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

/// Spectrum Glazes 1430 Series, Cone 4/6 floating glazes.
pub const GLAZES: [&str; 6] = [
    "Sangria",
    "Autumn Purple",
    "Kimchi",
    "Cactus",
    "Glacier",
    "Pearl White",
];

/// Build the full type × size × glaze cross-product, one product per
/// combination, ids sequential from 1. No randomness: the catalog is the same
/// for every run regardless of seed.
pub fn build_catalog() -> Vec<Product> {
    let mut products = Vec::with_capacity(PRODUCT_TYPES.len() * SIZES.len() * GLAZES.len());
    let mut next_id = 1_i64;

    for product_type in PRODUCT_TYPES {
        for size in SIZES {
            for glaze in GLAZES {
                products.push(Product {
                    id: next_id,
                    name: format!("{} {} {}", product_type.as_str(), glaze, size.as_str()),
                    product_type,
                    size,
                    glaze: glaze.to_string(),
                    price: price_for(product_type, size),
                });
                next_id += 1;
            }
        }
    }

    products
}

/// Deterministic price: base price of the type plus the type's size increment
/// scaled by the size index (Small 0, Medium 1, Large 2).
pub fn price_for(product_type: ProductType, size: Size) -> f64 {
    product_type.base_price() + product_type.size_increment() * f64::from(size.index())
}
