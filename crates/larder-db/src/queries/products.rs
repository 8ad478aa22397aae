//! Database query functions for the `products` table.
//!
//! Products are an append-only purchase log: saves only add rows.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{NewProduct, Product};

/// Append a batch of product rows.
///
/// Insert-only; the batch runs in one transaction so a failed insert
/// leaves nothing behind. Returns the inserted rows.
pub async fn append(pool: &PgPool, products: &[NewProduct]) -> Result<Vec<Product>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    let mut inserted = Vec::with_capacity(products.len());
    for product in products {
        let row = sqlx::query_as::<_, Product>(
            "INSERT INTO products \
             (name, quantity_portions, quantity_units, quantity_kg, unit_price, total_price, category) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(&product.name)
        .bind(product.quantity_portions)
        .bind(product.quantity_units)
        .bind(product.quantity_kg)
        .bind(product.unit_price)
        .bind(product.total_price)
        .bind(&product.category)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("failed to insert product {:?}", product.name))?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch all product rows, oldest first.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .context("failed to fetch products")?;

    Ok(products)
}
