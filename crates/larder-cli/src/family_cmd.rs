//! `larder family submit` -- persist the family profile and refresh
//! recommendations.

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::PgPool;

use larder_core::actions;
use larder_core::envelope::Envelope;
use larder_core::genai::TextGenerator;
use larder_db::models::{NewDietaryRestriction, NewFamilyMember};

/// Input document for a family submission, as produced by the onboarding
/// screen: members, restrictions, and prohibited dish names in one file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FamilySubmission {
    #[serde(default)]
    family_members: Vec<NewFamilyMember>,
    #[serde(default)]
    restrictions: Vec<NewDietaryRestriction>,
    #[serde(default)]
    prohibited_dishes: Vec<String>,
}

pub async fn run_family_submit(
    pool: &PgPool,
    generator: &dyn TextGenerator,
    file: &str,
) -> Result<()> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read family file {file}"))?;
    let submission: FamilySubmission =
        serde_json::from_str(&contents).context("failed to parse family file")?;

    let result = actions::submit_family_profile(
        pool,
        generator,
        &submission.family_members,
        &submission.restrictions,
        &submission.prohibited_dishes,
    )
    .await;

    let envelope = Envelope::from_unit_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
