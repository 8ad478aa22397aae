//! Database query functions for the `prohibited_dishes` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::ProhibitedDish;

/// Replace the full set of prohibited dishes.
///
/// Delete-all + insert-all inside one transaction. Dishes are plain names,
/// so the input is a string slice. Returns the inserted rows.
pub async fn replace_all(pool: &PgPool, dishes: &[String]) -> Result<Vec<ProhibitedDish>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    sqlx::query("DELETE FROM prohibited_dishes")
        .execute(&mut *tx)
        .await
        .context("failed to clear prohibited_dishes")?;

    let mut inserted = Vec::with_capacity(dishes.len());
    for dish in dishes {
        let row = sqlx::query_as::<_, ProhibitedDish>(
            "INSERT INTO prohibited_dishes (name) \
             VALUES ($1) \
             RETURNING *",
        )
        .bind(dish)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("failed to insert prohibited dish {dish:?}"))?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch all prohibited dish rows.
pub async fn get_all(pool: &PgPool) -> Result<Vec<ProhibitedDish>> {
    let dishes = sqlx::query_as::<_, ProhibitedDish>(
        "SELECT * FROM prohibited_dishes ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await
    .context("failed to fetch prohibited dishes")?;

    Ok(dishes)
}
