//! Submit the family profile: members, restrictions, prohibited dishes.

use sqlx::PgPool;
use tracing::info;

use larder_db::models::{NewDietaryRestriction, NewFamilyMember};
use larder_db::queries::{
    dietary_restrictions, family_members, prohibited_dishes, recommendations,
};

use crate::genai::{self, TextGenerator};

use super::ActionResult;

/// Persist a freshly submitted family profile and refresh the
/// recommendation set from it.
///
/// The three collections are replaced wholesale; the recommendation write
/// only happens when the model yields a non-empty list, so a fallback (or
/// a deliberately empty reply) leaves the previous recommendations alone.
pub async fn submit_family_profile(
    pool: &PgPool,
    generator: &dyn TextGenerator,
    members: &[NewFamilyMember],
    restrictions: &[NewDietaryRestriction],
    dishes: &[String],
) -> ActionResult<()> {
    family_members::replace_all(pool, members).await?;
    dietary_restrictions::replace_all(pool, restrictions).await?;
    prohibited_dishes::replace_all(pool, dishes).await?;

    let outcome =
        genai::family_recommendations(generator, members, restrictions, dishes).await?;
    let recs = outcome.into_inner().recommendations;

    if !recs.is_empty() {
        recommendations::replace_all(pool, &recs).await?;
    }

    info!(
        members = members.len(),
        restrictions = restrictions.len(),
        dishes = dishes.len(),
        recommendations = recs.len(),
        "family profile saved"
    );

    Ok(())
}
