//! Database query functions for the `dietary_restrictions` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{DietaryRestriction, NewDietaryRestriction};

/// Replace the full set of dietary restrictions.
///
/// Delete-all + insert-all inside one transaction. Returns the inserted
/// rows.
pub async fn replace_all(
    pool: &PgPool,
    restrictions: &[NewDietaryRestriction],
) -> Result<Vec<DietaryRestriction>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    sqlx::query("DELETE FROM dietary_restrictions")
        .execute(&mut *tx)
        .await
        .context("failed to clear dietary_restrictions")?;

    let mut inserted = Vec::with_capacity(restrictions.len());
    for restriction in restrictions {
        let row = sqlx::query_as::<_, DietaryRestriction>(
            "INSERT INTO dietary_restrictions (name, is_active) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(&restriction.name)
        .bind(restriction.is_active)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("failed to insert restriction {:?}", restriction.name))?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch all dietary restriction rows.
pub async fn get_all(pool: &PgPool) -> Result<Vec<DietaryRestriction>> {
    let restrictions = sqlx::query_as::<_, DietaryRestriction>(
        "SELECT * FROM dietary_restrictions ORDER BY created_at ASC",
    )
    .fetch_all(pool)
    .await
    .context("failed to fetch dietary restrictions")?;

    Ok(restrictions)
}
