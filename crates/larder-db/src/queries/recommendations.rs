//! Database query functions for the `recommendations` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::Recommendation;

/// Replace the current recommendation set.
///
/// Delete-all + insert-all inside one transaction. Recommendations are
/// plain strings. Returns the inserted rows.
pub async fn replace_all(pool: &PgPool, texts: &[String]) -> Result<Vec<Recommendation>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    sqlx::query("DELETE FROM recommendations")
        .execute(&mut *tx)
        .await
        .context("failed to clear recommendations")?;

    let mut inserted = Vec::with_capacity(texts.len());
    for text in texts {
        let row = sqlx::query_as::<_, Recommendation>(
            "INSERT INTO recommendations (text) \
             VALUES ($1) \
             RETURNING *",
        )
        .bind(text)
        .fetch_one(&mut *tx)
        .await
        .context("failed to insert recommendation")?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch all recommendation rows, oldest first.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Recommendation>> {
    let recommendations = sqlx::query_as::<_, Recommendation>(
        "SELECT * FROM recommendations ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await
    .context("failed to fetch recommendations")?;

    Ok(recommendations)
}
