//! `larder leftovers submit` -- log leftovers and refresh recommendations.

use anyhow::{Context, Result};
use sqlx::PgPool;

use larder_core::actions;
use larder_core::envelope::Envelope;
use larder_core::genai::TextGenerator;
use larder_db::models::NewLeftover;

pub async fn run_leftovers_submit(
    pool: &PgPool,
    generator: &dyn TextGenerator,
    file: &str,
) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read leftovers file {file}"))?;
    let entries: Vec<NewLeftover> =
        serde_json::from_str(&contents).context("failed to parse leftovers file")?;

    let result = actions::submit_leftovers(pool, generator, &entries).await;

    let envelope = Envelope::from_unit_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
