//! Database query functions for the `weekly_menu` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{MenuEntry, NewMenuEntry};

/// Replace the current weekly menu.
///
/// Delete-all + insert-all inside one transaction, so there is at most one
/// active menu version. Returns the inserted rows.
pub async fn replace_all(pool: &PgPool, entries: &[NewMenuEntry]) -> Result<Vec<MenuEntry>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    sqlx::query("DELETE FROM weekly_menu")
        .execute(&mut *tx)
        .await
        .context("failed to clear weekly_menu")?;

    let mut inserted = Vec::with_capacity(entries.len());
    for entry in entries {
        let row = sqlx::query_as::<_, MenuEntry>(
            "INSERT INTO weekly_menu (day, recipe, protein, side) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(entry.day)
        .bind(&entry.recipe)
        .bind(&entry.protein)
        .bind(&entry.side)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("failed to insert menu entry for {}", entry.day))?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch the current weekly menu, in insertion order (Monday first when the
/// generator emitted the conventional seven days).
pub async fn get_all(pool: &PgPool) -> Result<Vec<MenuEntry>> {
    let entries =
        sqlx::query_as::<_, MenuEntry>("SELECT * FROM weekly_menu ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .context("failed to fetch weekly menu")?;

    Ok(entries)
}
