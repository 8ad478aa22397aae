//! Database query functions for the `leftovers` table.
//!
//! Leftovers are an append-only log: saves only add rows.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{Leftover, NewLeftover};

/// Append a batch of leftover rows.
///
/// Insert-only; the batch runs in one transaction so a failed insert
/// leaves nothing behind. Returns the inserted rows.
pub async fn append(pool: &PgPool, leftovers: &[NewLeftover]) -> Result<Vec<Leftover>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    let mut inserted = Vec::with_capacity(leftovers.len());
    for leftover in leftovers {
        let row = sqlx::query_as::<_, Leftover>(
            "INSERT INTO leftovers (meal, product, quantity) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&leftover.meal)
        .bind(&leftover.product)
        .bind(&leftover.quantity)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| {
            format!(
                "failed to insert leftover of {:?} from {:?}",
                leftover.product, leftover.meal
            )
        })?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch all leftover rows, oldest first.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Leftover>> {
    let leftovers =
        sqlx::query_as::<_, Leftover>("SELECT * FROM leftovers ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .context("failed to fetch leftovers")?;

    Ok(leftovers)
}
