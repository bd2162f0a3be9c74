//! SQLite persistence for generated pottery sales datasets.
//!
//! Schema reset and bulk writes are best-effort: every statement group is
//! attempted, failures are accumulated in a [`WriteReport`], and the caller
//! decides whether to abort or continue.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use thiserror::Error;
use tracing::debug;

use potterysim_generate::{Customer, Dataset, Product, PurchaseItem, SalesTransaction};

/// Rows bound per INSERT statement, well under SQLite's bind variable limit.
const INSERT_CHUNK: usize = 500;

/// Errors emitted by the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A statement group that failed during a best-effort pass.
#[derive(Debug)]
pub struct WriteFailure {
    pub group: String,
    pub error: StoreError,
}

/// Outcome of a best-effort store pass.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub groups_attempted: usize,
    pub failures: Vec<WriteFailure>,
}

impl WriteReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    fn record<T>(&mut self, group: &str, result: Result<T, StoreError>) {
        self.groups_attempted += 1;
        if let Err(error) = result {
            self.failures.push(WriteFailure {
                group: group.to_string(),
                error,
            });
        }
    }
}

const SCHEMA_STATEMENTS: [(&str, &str); 8] = [
    ("drop Product", "DROP TABLE IF EXISTS Product"),
    ("drop Customers", "DROP TABLE IF EXISTS Customers"),
    ("drop SalesTransaction", "DROP TABLE IF EXISTS SalesTransaction"),
    ("drop PurchaseItems", "DROP TABLE IF EXISTS PurchaseItems"),
    (
        "create Product",
        "CREATE TABLE Product (
            ProductID INTEGER PRIMARY KEY,
            Name TEXT NOT NULL,
            Type TEXT NOT NULL,
            Size TEXT NOT NULL,
            Glaze TEXT NOT NULL,
            Price REAL NOT NULL
        )",
    ),
    (
        "create Customers",
        "CREATE TABLE Customers (
            CustomerID INTEGER PRIMARY KEY,
            Name TEXT NOT NULL,
            Location TEXT NOT NULL
        )",
    ),
    (
        "create SalesTransaction",
        "CREATE TABLE SalesTransaction (
            TransactionID INTEGER PRIMARY KEY,
            CustomerID INTEGER NOT NULL,
            TotalPrice REAL NOT NULL,
            PurchaseDate TEXT NOT NULL,
            Location TEXT NOT NULL,
            FOREIGN KEY (CustomerID) REFERENCES Customers(CustomerID)
        )",
    ),
    (
        "create PurchaseItems",
        "CREATE TABLE PurchaseItems (
            PurchaseItemID TEXT PRIMARY KEY,
            TransactionID INTEGER NOT NULL,
            ProductID INTEGER NOT NULL,
            ProductPrice REAL NOT NULL,
            FOREIGN KEY (TransactionID) REFERENCES SalesTransaction(TransactionID),
            FOREIGN KEY (ProductID) REFERENCES Product(ProductID)
        )",
    ),
];

/// Handle to the embedded database, one exclusive connection for the process
/// lifetime.
pub struct PotteryStore {
    pool: SqlitePool,
}

impl PotteryStore {
    /// Open (creating if missing) the database file at `path`.
    pub async fn connect(path: &Path) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect_with(options).await
    }

    /// Open a fresh in-memory database.
    pub async fn connect_in_memory() -> Result<Self, StoreError> {
        Self::connect_with(SqliteConnectOptions::new().in_memory(true)).await
    }

    async fn connect_with(options: SqliteConnectOptions) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Drop and recreate the four tables. Idempotent against reruns: drops
    /// use IF EXISTS and each statement is attempted regardless of earlier
    /// failures.
    pub async fn reset_schema(&self) -> WriteReport {
        let mut report = WriteReport::default();
        for (group, sql) in SCHEMA_STATEMENTS {
            report.record(group, self.execute(sql).await);
        }
        report
    }

    /// Set-based insert of all generated rows, one transaction per table.
    pub async fn write_dataset(&self, dataset: &Dataset) -> WriteReport {
        let mut report = WriteReport::default();
        report.record(
            "insert Product",
            self.insert_products(&dataset.products).await,
        );
        report.record(
            "insert Customers",
            self.insert_customers(&dataset.customers).await,
        );
        report.record(
            "insert SalesTransaction",
            self.insert_transactions(&dataset.transactions).await,
        );
        report.record(
            "insert PurchaseItems",
            self.insert_items(&dataset.items).await,
        );
        report
    }

    async fn execute(&self, sql: &str) -> Result<(), StoreError> {
        sqlx::query(sql).execute(&self.pool).await?;
        Ok(())
    }

    async fn insert_products(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for chunk in products.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO Product (ProductID, Name, Type, Size, Glaze, Price) ",
            );
            builder.push_values(chunk, |mut row, product| {
                row.push_bind(product.id)
                    .push_bind(product.name.as_str())
                    .push_bind(product.product_type.as_str())
                    .push_bind(product.size.as_str())
                    .push_bind(product.glaze.as_str())
                    .push_bind(product.price);
            });
            builder.build().execute(&mut *tx).await?;
        }
        tx.commit().await?;
        debug!(rows = products.len(), "Product rows inserted");
        Ok(())
    }

    async fn insert_customers(&self, customers: &[Customer]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for chunk in customers.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Sqlite> =
                QueryBuilder::new("INSERT INTO Customers (CustomerID, Name, Location) ");
            builder.push_values(chunk, |mut row, customer| {
                row.push_bind(customer.id)
                    .push_bind(customer.name.as_str())
                    .push_bind(customer.location.as_str());
            });
            builder.build().execute(&mut *tx).await?;
        }
        tx.commit().await?;
        debug!(rows = customers.len(), "Customers rows inserted");
        Ok(())
    }

    async fn insert_transactions(
        &self,
        transactions: &[SalesTransaction],
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for chunk in transactions.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO SalesTransaction \
                 (TransactionID, CustomerID, TotalPrice, PurchaseDate, Location) ",
            );
            builder.push_values(chunk, |mut row, transaction| {
                row.push_bind(transaction.id)
                    .push_bind(transaction.customer_id)
                    .push_bind(transaction.total_price)
                    .push_bind(transaction.purchase_date.format("%Y-%m-%d").to_string())
                    .push_bind(transaction.location.as_str());
            });
            builder.build().execute(&mut *tx).await?;
        }
        tx.commit().await?;
        debug!(rows = transactions.len(), "SalesTransaction rows inserted");
        Ok(())
    }

    async fn insert_items(&self, items: &[PurchaseItem]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for chunk in items.chunks(INSERT_CHUNK) {
            let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
                "INSERT INTO PurchaseItems \
                 (PurchaseItemID, TransactionID, ProductID, ProductPrice) ",
            );
            builder.push_values(chunk, |mut row, item| {
                row.push_bind(item.id.as_str())
                    .push_bind(item.transaction_id)
                    .push_bind(item.product_id)
                    .push_bind(item.product_price);
            });
            builder.build().execute(&mut *tx).await?;
        }
        tx.commit().await?;
        debug!(rows = items.len(), "PurchaseItems rows inserted");
        Ok(())
    }
}
