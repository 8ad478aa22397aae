//! Sanity checks on the embedded schema: all entity tables exist and start
//! empty after migrations run.

use larder_db::pool;
use larder_test_utils::{create_test_db, drop_test_db};

#[tokio::test]
async fn migrations_create_all_entity_tables() {
    let (pool, db_name) = create_test_db().await;

    let counts = pool::table_counts(&pool)
        .await
        .expect("table_counts should succeed");

    let expected = [
        "dietary_restrictions",
        "family_members",
        "leftovers",
        "metrics",
        "products",
        "prohibited_dishes",
        "recommendations",
        "weekly_menu",
    ];
    for table in expected {
        let entry = counts.iter().find(|(name, _)| name == table);
        let (_, count) = entry.unwrap_or_else(|| panic!("table {table} missing after migrations"));
        assert_eq!(*count, 0, "table {table} should start empty");
    }

    drop_test_db(&db_name).await;
}
