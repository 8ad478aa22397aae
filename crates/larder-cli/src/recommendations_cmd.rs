//! `larder recommendations show`.

use anyhow::Result;
use sqlx::PgPool;

use larder_db::queries::recommendations;

pub async fn run_recommendations_show(pool: &PgPool) -> Result<()> {
    let rows = recommendations::get_all(pool).await?;

    if rows.is_empty() {
        println!("No recommendations stored yet.");
        return Ok(());
    }

    for (i, row) in rows.iter().enumerate() {
        println!("{}. {}", i + 1, row.text);
    }

    Ok(())
}
