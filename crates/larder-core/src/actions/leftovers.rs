//! Submit logged leftovers and refresh recommendations from them.

use sqlx::PgPool;
use tracing::info;

use larder_db::models::NewLeftover;
use larder_db::queries::{leftovers, recommendations};

use crate::genai::{self, TextGenerator};

use super::ActionResult;

/// Append leftovers to the log and ask the model how to use them up.
///
/// As with the family profile, recommendations are only replaced when the
/// model yields a non-empty list.
pub async fn submit_leftovers(
    pool: &PgPool,
    generator: &dyn TextGenerator,
    entries: &[NewLeftover],
) -> ActionResult<()> {
    leftovers::append(pool, entries).await?;

    let outcome = genai::leftover_recommendations(generator, entries).await?;
    let recs = outcome.into_inner().recommendations;

    if !recs.is_empty() {
        recommendations::replace_all(pool, &recs).await?;
    }

    info!(
        leftovers = entries.len(),
        recommendations = recs.len(),
        "leftovers saved"
    );

    Ok(())
}
