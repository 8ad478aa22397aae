//! `larder menu generate` / `larder menu show`.

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

use larder_core::actions;
use larder_core::envelope::Envelope;
use larder_core::genai::TextGenerator;
use larder_db::models::NewMenuEntry;
use larder_db::queries::weekly_menu;

#[derive(Debug, Serialize)]
struct MenuPayload {
    #[serde(rename = "weeklyMenu")]
    weekly_menu: Vec<NewMenuEntry>,
}

pub async fn run_menu_generate(pool: &PgPool, generator: &dyn TextGenerator) -> Result<()> {
    let result = actions::generate_menu(pool, generator)
        .await
        .map(|weekly_menu| MenuPayload { weekly_menu });

    let envelope = Envelope::from_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub async fn run_menu_show(pool: &PgPool) -> Result<()> {
    let entries = weekly_menu::get_all(pool).await?;

    if entries.is_empty() {
        println!("No weekly menu stored. Run `larder menu generate` first.");
        return Ok(());
    }

    for entry in &entries {
        match entry.recipe_details() {
            Some(details) => {
                println!("{}: {} ({} / {})", entry.day, details.name, entry.protein, entry.side);
                if let Some(time) = &details.cooking_time {
                    println!("     cooking time: {time}");
                }
                if let Some(servings) = details.servings {
                    println!("     servings: {servings}");
                }
                if !details.ingredients.is_empty() {
                    println!("     ingredients: {}", details.ingredients.join(", "));
                }
            }
            None => {
                println!(
                    "{}: {} ({} / {})",
                    entry.day, entry.recipe, entry.protein, entry.side
                );
            }
        }
    }

    Ok(())
}
