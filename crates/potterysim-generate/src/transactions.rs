use chrono::NaiveDate;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

use crate::errors::GenerationError;
use crate::model::{
    Customer, GeneratorOptions, Product, PurchaseItem, PurchaseLocation, SalesTransaction,
};

/// Monthly weights for farmers market sales: spring and fall market season
/// peaks plus a December holiday spike. Normalized at sampling time.
pub const FARMERS_MARKET_MONTH_WEIGHTS: [f64; 12] = [
    1.0, 1.0, 2.0, 4.0, 5.0, 3.0, 2.5, 2.5, 4.5, 5.0, 2.0, 6.0,
];

/// Monthly weights for online and pop-up sales: a gradual ramp toward
/// December.
pub const ONLINE_MONTH_WEIGHTS: [f64; 12] = [
    1.0, 1.0, 1.5, 1.5, 2.0, 2.0, 2.5, 2.5, 3.0, 3.5, 4.5, 6.0,
];

const CHANNELS: [PurchaseLocation; 3] = [
    PurchaseLocation::Online,
    PurchaseLocation::FarmersMarket,
    PurchaseLocation::PopUp,
];

const MAX_ITEMS_PER_TRANSACTION: u32 = 3;

/// Categorical month sampler for one sales channel's weight vector.
pub struct MonthSampler {
    index: WeightedIndex<f64>,
}

impl MonthSampler {
    pub fn for_location(location: PurchaseLocation) -> Result<Self, GenerationError> {
        let weights = match location {
            PurchaseLocation::FarmersMarket => &FARMERS_MARKET_MONTH_WEIGHTS,
            PurchaseLocation::Online | PurchaseLocation::PopUp => &ONLINE_MONTH_WEIGHTS,
        };
        let index = WeightedIndex::new(weights)
            .map_err(|err| GenerationError::InvalidWeights(err.to_string()))?;
        Ok(Self { index })
    }

    /// Sample a month in [1, 12].
    pub fn sample(&self, rng: &mut impl Rng) -> u32 {
        self.index.sample(rng) as u32 + 1
    }
}

/// Generate transactions and their line items.
///
/// Transaction i gets customer_id = i while i <= customer_count, so every
/// customer is covered before any repeats; after that customers are drawn
/// uniformly. Products are picked by index into the catalog slice, so a
/// price lookup can never miss.
pub fn generate_transactions(
    options: &GeneratorOptions,
    products: &[Product],
    customers: &[Customer],
    rng: &mut impl Rng,
) -> Result<(Vec<SalesTransaction>, Vec<PurchaseItem>), GenerationError> {
    if options.transaction_count > 0 && products.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "cannot generate transactions from an empty catalog".to_string(),
        ));
    }
    if options.transaction_count > 0 && customers.is_empty() {
        return Err(GenerationError::InvalidOptions(
            "cannot generate transactions without customers".to_string(),
        ));
    }

    let farmers_market_months = MonthSampler::for_location(PurchaseLocation::FarmersMarket)?;
    let online_months = MonthSampler::for_location(PurchaseLocation::Online)?;

    let mut transactions = Vec::with_capacity(options.transaction_count as usize);
    let mut items = Vec::new();

    for i in 1..=options.transaction_count {
        let transaction_id = i64::from(i);
        let customer_id = if i <= options.customer_count {
            i64::from(i)
        } else {
            rng.random_range(1..=i64::from(options.customer_count))
        };
        let customer = &customers[(customer_id - 1) as usize];

        let item_count = rng.random_range(1..=MAX_ITEMS_PER_TRANSACTION);
        let mut total = 0.0_f64;
        for line in 1..=item_count {
            let product = &products[rng.random_range(0..products.len())];
            total += product.price;
            items.push(PurchaseItem {
                id: format!("{transaction_id}-{line}"),
                transaction_id,
                product_id: product.id,
                product_price: product.price,
            });
        }
        let total_price = (total * 100.0).round() / 100.0;

        let location = if customer.location == options.home_region {
            CHANNELS[rng.random_range(0..CHANNELS.len())]
        } else {
            PurchaseLocation::Online
        };

        let sampler = match location {
            PurchaseLocation::FarmersMarket => &farmers_market_months,
            PurchaseLocation::Online | PurchaseLocation::PopUp => &online_months,
        };
        let month = sampler.sample(rng);
        let day = rng.random_range(1..=28_u32);
        let purchase_date = NaiveDate::from_ymd_opt(options.year, month, day).ok_or(
            GenerationError::InvalidDate {
                year: options.year,
                month,
                day,
            },
        )?;

        transactions.push(SalesTransaction {
            id: transaction_id,
            customer_id,
            total_price,
            purchase_date,
            location,
        });
    }

    Ok((transactions, items))
}
