//! One gateway function per use case.
//!
//! Each function builds the instruction, invokes the model, and parses the
//! reply optimistically. Transport errors propagate; parse failures
//! degrade to the use case's typed default (see [`super::parse`]).

use anyhow::Result;
use serde::Serialize;

use super::parse::{Generated, parse_or_default};
use super::prompts;
use super::trait_def::TextGenerator;
use super::types::{
    ImageAttachment, MetricsReport, ReceiptExtraction, RecommendationSet, WeeklyMenuPlan,
};

/// Extract product lines from a receipt image.
pub async fn extract_receipt_products(
    generator: &dyn TextGenerator,
    image: ImageAttachment,
) -> Result<Generated<ReceiptExtraction>> {
    let request = prompts::receipt_extraction(image);
    let reply = generator.generate(&request).await?;
    Ok(parse_or_default("receipt_extraction", &reply))
}

/// Recommendations derived from the family profile.
pub async fn family_recommendations<M, R>(
    generator: &dyn TextGenerator,
    members: &[M],
    restrictions: &[R],
    prohibited_dishes: &[String],
) -> Result<Generated<RecommendationSet>>
where
    M: Serialize + Sync,
    R: Serialize + Sync,
{
    let request = prompts::family_recommendations(members, restrictions, prohibited_dishes)?;
    let reply = generator.generate(&request).await?;
    Ok(parse_or_default("family_recommendations", &reply))
}

/// Recommendations for using up logged leftovers.
pub async fn leftover_recommendations<L>(
    generator: &dyn TextGenerator,
    leftovers: &[L],
) -> Result<Generated<RecommendationSet>>
where
    L: Serialize + Sync,
{
    let request = prompts::leftover_recommendations(leftovers)?;
    let reply = generator.generate(&request).await?;
    Ok(parse_or_default("leftover_recommendations", &reply))
}

/// A menu for the seven days of the week.
pub async fn plan_weekly_menu<M, R, P>(
    generator: &dyn TextGenerator,
    members: &[M],
    restrictions: &[R],
    prohibited_dishes: &[String],
    products: &[P],
) -> Result<Generated<WeeklyMenuPlan>>
where
    M: Serialize + Sync,
    R: Serialize + Sync,
    P: Serialize + Sync,
{
    let request = prompts::weekly_menu(members, restrictions, prohibited_dishes, products)?;
    let reply = generator.generate(&request).await?;
    Ok(parse_or_default("weekly_menu", &reply))
}

/// Waste/savings metrics plus accompanying recommendations.
pub async fn household_metrics<M, P, L>(
    generator: &dyn TextGenerator,
    members: &[M],
    products: &[P],
    leftovers: &[L],
) -> Result<Generated<MetricsReport>>
where
    M: Serialize + Sync,
    P: Serialize + Sync,
    L: Serialize + Sync,
{
    let request = prompts::household_metrics(members, products, leftovers)?;
    let reply = generator.generate(&request).await?;
    Ok(parse_or_default("household_metrics", &reply))
}
