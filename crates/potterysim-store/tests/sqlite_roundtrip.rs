use potterysim_generate::{GeneratorOptions, generate_dataset};
use potterysim_store::PotteryStore;

fn small_scenario() -> GeneratorOptions {
    GeneratorOptions {
        customer_count: 40,
        transaction_count: 75,
        ..GeneratorOptions::default()
    }
}

#[tokio::test]
async fn reset_schema_is_rerun_safe() {
    let store = PotteryStore::connect_in_memory().await.expect("connect");

    let first = store.reset_schema().await;
    assert!(first.is_ok(), "first reset: {:?}", first.failures);
    assert_eq!(first.groups_attempted, 8);

    let second = store.reset_schema().await;
    assert!(second.is_ok(), "second reset: {:?}", second.failures);
}

#[tokio::test]
async fn written_rows_match_generated_dataset() {
    let dataset = generate_dataset(&small_scenario()).expect("generate dataset");
    let store = PotteryStore::connect_in_memory().await.expect("connect");

    let report = store.reset_schema().await;
    assert!(report.is_ok(), "schema failures: {:?}", report.failures);
    let report = store.write_dataset(&dataset).await;
    assert!(report.is_ok(), "write failures: {:?}", report.failures);

    for (table, expected) in [
        ("Product", dataset.products.len()),
        ("Customers", dataset.customers.len()),
        ("SalesTransaction", dataset.transactions.len()),
        ("PurchaseItems", dataset.items.len()),
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(store.pool())
            .await
            .expect("count rows");
        assert_eq!(count as usize, expected, "{table} row count");
    }
}

#[tokio::test]
async fn stored_totals_reconcile_with_line_items() {
    let dataset = generate_dataset(&small_scenario()).expect("generate dataset");
    let store = PotteryStore::connect_in_memory().await.expect("connect");
    assert!(store.reset_schema().await.is_ok());
    assert!(store.write_dataset(&dataset).await.is_ok());

    let mismatched: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM SalesTransaction t \
         JOIN (SELECT TransactionID, ROUND(SUM(ProductPrice), 2) AS ItemTotal \
               FROM PurchaseItems GROUP BY TransactionID) s \
           ON s.TransactionID = t.TransactionID \
         WHERE ABS(t.TotalPrice - s.ItemTotal) > 0.005",
    )
    .fetch_one(store.pool())
    .await
    .expect("reconcile totals");
    assert_eq!(mismatched, 0);

    let orphan_items: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM PurchaseItems p \
         LEFT JOIN Product pr ON pr.ProductID = p.ProductID \
         WHERE pr.ProductID IS NULL",
    )
    .fetch_one(store.pool())
    .await
    .expect("check product references");
    assert_eq!(orphan_items, 0);
}

#[tokio::test]
async fn missing_tables_accumulate_failures_without_aborting() {
    let dataset = generate_dataset(&small_scenario()).expect("generate dataset");
    let store = PotteryStore::connect_in_memory().await.expect("connect");

    // No schema reset: every insert group should fail, and every group
    // should still be attempted.
    let report = store.write_dataset(&dataset).await;
    assert_eq!(report.groups_attempted, 4);
    assert_eq!(report.failures.len(), 4);
    assert!(!report.is_ok());
}
