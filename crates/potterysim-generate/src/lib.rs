//! Deterministic synthetic dataset generation for a pottery retail shop.
//!
//! This crate produces the in-memory dataset (catalog, customers,
//! transactions, line items) from a seed and a handful of knobs; persisting
//! it is the store crate's job.

pub mod catalog;
pub mod customers;
pub mod errors;
pub mod model;
pub mod transactions;

pub use catalog::{GLAZES, PRODUCT_TYPES, SIZES, build_catalog};
pub use customers::{HOME_REGION_WEIGHT, generate_customers};
pub use errors::GenerationError;
pub use model::{
    Customer, Dataset, GeneratorOptions, Product, ProductType, PurchaseItem, PurchaseLocation,
    SalesTransaction, Size,
};
pub use transactions::{
    FARMERS_MARKET_MONTH_WEIGHTS, MonthSampler, ONLINE_MONTH_WEIGHTS, generate_transactions,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

/// Generate the full dataset from the given options.
///
/// Each stage draws from its own sub-seeded RNG, so changing the customer
/// count does not perturb transaction sampling for the same seed.
pub fn generate_dataset(options: &GeneratorOptions) -> Result<Dataset, GenerationError> {
    let products = build_catalog();

    let mut customer_rng = ChaCha8Rng::seed_from_u64(hash_seed(options.seed, "customers"));
    let customers = generate_customers(
        options.customer_count,
        &options.home_region,
        &mut customer_rng,
    );

    let mut transaction_rng = ChaCha8Rng::seed_from_u64(hash_seed(options.seed, "transactions"));
    let (transactions, items) =
        generate_transactions(options, &products, &customers, &mut transaction_rng)?;

    info!(
        products = products.len(),
        customers = customers.len(),
        transactions = transactions.len(),
        items = items.len(),
        seed = options.seed,
        "dataset generated"
    );

    Ok(Dataset {
        products,
        customers,
        transactions,
        items,
    })
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
