//! Generate the weekly menu from everything currently stored.

use sqlx::PgPool;
use tracing::info;

use larder_db::models::NewMenuEntry;
use larder_db::queries::{
    dietary_restrictions, family_members, products, prohibited_dishes, weekly_menu,
};

use crate::genai::{self, TextGenerator};

use super::ActionResult;

/// Read the current family state and purchase log, generate a menu, and
/// replace the stored menu when the result is non-empty.
///
/// Returns whatever the gateway yielded -- an empty menu completes the
/// operation without persisting anything, it is not a failure.
pub async fn generate_menu(
    pool: &PgPool,
    generator: &dyn TextGenerator,
) -> ActionResult<Vec<NewMenuEntry>> {
    let members = family_members::get_all(pool).await?;
    let restrictions = dietary_restrictions::get_all(pool).await?;
    let dishes = prohibited_dishes::get_all(pool).await?;
    let available = products::get_all(pool).await?;

    let dish_names: Vec<String> = dishes.into_iter().map(|d| d.name).collect();

    let outcome =
        genai::plan_weekly_menu(generator, &members, &restrictions, &dish_names, &available)
            .await?;
    let plan = outcome.into_inner();

    if !plan.weekly_menu.is_empty() {
        weekly_menu::replace_all(pool, &plan.weekly_menu).await?;
    }

    info!(entries = plan.weekly_menu.len(), "weekly menu generated");

    Ok(plan.weekly_menu)
}
