use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shape of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Vase,
    Mug,
    Bowl,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Vase => "Vase",
            ProductType::Mug => "Mug",
            ProductType::Bowl => "Bowl",
        }
    }

    /// Price of the small size. Quarter-dollar values keep f64 sums exact.
    pub fn base_price(&self) -> f64 {
        match self {
            ProductType::Vase => 42.50,
            ProductType::Mug => 18.00,
            ProductType::Bowl => 26.50,
        }
    }

    /// Price step per size above small.
    pub fn size_increment(&self) -> f64 {
        match self {
            ProductType::Vase => 12.50,
            ProductType::Mug => 4.50,
            ProductType::Bowl => 8.00,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// Multiplier applied to the type's size increment.
    pub fn index(&self) -> u32 {
        match self {
            Size::Small => 0,
            Size::Medium => 1,
            Size::Large => 2,
        }
    }
}

/// Sales channel of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseLocation {
    Online,
    FarmersMarket,
    PopUp,
}

impl PurchaseLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseLocation::Online => "online",
            PurchaseLocation::FarmersMarket => "farmers_market",
            PurchaseLocation::PopUp => "pop_up",
        }
    }
}

/// One catalog entry; ids are sequential from 1 and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub product_type: ProductType,
    pub size: Size,
    pub glaze: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTransaction {
    pub id: i64,
    pub customer_id: i64,
    /// Exact sum of the transaction's line item prices, two decimals.
    pub total_price: f64,
    pub purchase_date: NaiveDate,
    pub location: PurchaseLocation,
}

/// A line item; `id` is the composite "{transaction_id}-{line_index}".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseItem {
    pub id: String,
    pub transaction_id: i64,
    pub product_id: i64,
    /// Catalog price snapshotted at purchase time.
    pub product_price: f64,
}

/// Everything one generation run produces. Built once, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub transactions: Vec<SalesTransaction>,
    pub items: Vec<PurchaseItem>,
}

/// Knobs for a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Number of customers to synthesize.
    pub customer_count: u32,
    /// Number of sales transactions to synthesize.
    pub transaction_count: u32,
    /// Calendar year assigned to every purchase date.
    pub year: i32,
    /// Region favored for customer locations; gates non-online channels.
    pub home_region: String,
    /// RNG seed; identical seeds produce identical datasets.
    pub seed: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            customer_count: 550,
            transaction_count: 614,
            year: 2023,
            home_region: "Oregon".to_string(),
            seed: 42,
        }
    }
}
