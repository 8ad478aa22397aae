//! Database query functions for the `family_members` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{FamilyMember, NewFamilyMember};

/// Replace the full set of family members.
///
/// Deletes every existing row and inserts the given set inside a single
/// transaction, so a crash mid-save can never leave the table half
/// replaced. Returns the inserted rows.
pub async fn replace_all(
    pool: &PgPool,
    members: &[NewFamilyMember],
) -> Result<Vec<FamilyMember>> {
    let mut tx = pool.begin().await.context("failed to begin transaction")?;

    sqlx::query("DELETE FROM family_members")
        .execute(&mut *tx)
        .await
        .context("failed to clear family_members")?;

    let mut inserted = Vec::with_capacity(members.len());
    for member in members {
        let row = sqlx::query_as::<_, FamilyMember>(
            "INSERT INTO family_members (member_type, count) \
             VALUES ($1, $2) \
             RETURNING *",
        )
        .bind(member.member_type)
        .bind(member.count)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("failed to insert family member {}", member.member_type))?;
        inserted.push(row);
    }

    tx.commit().await.context("failed to commit transaction")?;

    Ok(inserted)
}

/// Fetch all family member rows.
pub async fn get_all(pool: &PgPool) -> Result<Vec<FamilyMember>> {
    let members =
        sqlx::query_as::<_, FamilyMember>("SELECT * FROM family_members ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .context("failed to fetch family members")?;

    Ok(members)
}
