//! `larder metrics generate` / `larder metrics show`.

use anyhow::Result;
use sqlx::PgPool;

use larder_core::actions;
use larder_core::envelope::Envelope;
use larder_core::genai::TextGenerator;
use larder_db::queries::metrics;

/// How many historical metric rows the dashboard shows.
const RECENT_METRICS: i64 = 5;

pub async fn run_metrics_generate(pool: &PgPool, generator: &dyn TextGenerator) -> Result<()> {
    let result = actions::generate_metrics(pool, generator).await;

    let envelope = Envelope::from_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub async fn run_metrics_show(pool: &PgPool) -> Result<()> {
    let rows = metrics::list_recent(pool, RECENT_METRICS).await?;

    if rows.is_empty() {
        println!("No metrics stored. Run `larder metrics generate` first.");
        return Ok(());
    }

    println!("{:<6} {:>8} {:>10}  recorded", "week", "waste%", "savings");
    for row in &rows {
        println!(
            "{:<6} {:>8.1} {:>10.2}  {}",
            row.week_number,
            row.waste_percentage,
            row.estimated_savings,
            row.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}
