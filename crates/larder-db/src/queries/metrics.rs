//! Database query functions for the `metrics` table.
//!
//! Metrics are an append-only log: one row per generation run.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{Metric, NewMetric};

/// Append a single metric row. Returns the inserted row with
/// server-generated defaults (id, created_at).
pub async fn append(pool: &PgPool, metric: &NewMetric) -> Result<Metric> {
    let row = sqlx::query_as::<_, Metric>(
        "INSERT INTO metrics (waste_percentage, estimated_savings, week_number) \
         VALUES ($1, $2, $3) \
         RETURNING *",
    )
    .bind(metric.waste_percentage)
    .bind(metric.estimated_savings)
    .bind(metric.week_number)
    .fetch_one(pool)
    .await
    .with_context(|| format!("failed to insert metric for week {}", metric.week_number))?;

    Ok(row)
}

/// Fetch all metric rows, oldest first.
pub async fn get_all(pool: &PgPool) -> Result<Vec<Metric>> {
    let metrics = sqlx::query_as::<_, Metric>("SELECT * FROM metrics ORDER BY created_at ASC")
        .fetch_all(pool)
        .await
        .context("failed to fetch metrics")?;

    Ok(metrics)
}

/// Fetch the most recent metric rows, newest first.
pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Metric>> {
    let metrics = sqlx::query_as::<_, Metric>(
        "SELECT * FROM metrics ORDER BY created_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .context("failed to fetch recent metrics")?;

    Ok(metrics)
}
