//! Instruction templates, one per use case.
//!
//! Each builder embeds the serialized domain data into a fixed template
//! and pairs it with the use case's system role. The expected reply shape
//! is spelled out inline; the parser on the other side stays optimistic.

use anyhow::{Context, Result};
use serde::Serialize;

use super::types::{GenerationRequest, ImageAttachment};

const RECEIPT_SYSTEM: &str = "You are an assistant specialized in extracting information from \
     supermarket receipts. Your task is to analyze receipt images and extract detailed \
     information about the purchased products.";

const FAMILY_SYSTEM: &str = "You are a nutritionist specialized in family meal planning. Your \
     task is to analyze a family's data and provide personalized recommendations.";

const LEFTOVERS_SYSTEM: &str = "You are a chef specialized in reducing food waste. Your task is \
     to analyze food leftovers and provide creative recommendations for using them.";

const MENU_SYSTEM: &str = "You are a chef specialized in family meal planning. Your task is to \
     generate personalized weekly menus based on the family's preferences and restrictions, as \
     well as the available products.";

const METRICS_SYSTEM: &str = "You are an analyst specialized in reducing food waste and \
     household spending. Your task is to generate metrics and recommendations based on a \
     family's purchase and leftover data.";

fn to_json<T: Serialize>(what: &str, value: &T) -> Result<String> {
    serde_json::to_string(value).with_context(|| format!("failed to serialize {what}"))
}

/// Receipt-image extraction.
pub fn receipt_extraction(image: ImageAttachment) -> GenerationRequest {
    let prompt = "\
Analyze this supermarket receipt image and extract the following information in JSON format:
{
  \"products\": [
    {
      \"name\": \"Product name\",
      \"quantity_units\": number of units (if applicable),
      \"quantity_kg\": quantity in kilograms (if applicable),
      \"unit_price\": unit price,
      \"total_price\": total price
    }
  ]
}

Make sure to extract every product visible on the receipt."
        .to_string();

    GenerationRequest {
        system: RECEIPT_SYSTEM.to_string(),
        prompt,
        image: Some(image),
    }
}

/// Family-data recommendations.
pub fn family_recommendations<M, R>(
    members: &[M],
    restrictions: &[R],
    prohibited_dishes: &[String],
) -> Result<GenerationRequest>
where
    M: Serialize,
    R: Serialize,
{
    let prompt = format!(
        "\
Analyze this family's data and provide recommendations:

Family members: {members}
Dietary restrictions: {restrictions}
Prohibited dishes: {dishes}

Provide general recommendations for this family in JSON format:
{{
  \"recommendations\": [
    \"Recommendation 1\",
    \"Recommendation 2\",
    \"Recommendation 3\"
  ]
}}",
        members = to_json("family members", &members)?,
        restrictions = to_json("dietary restrictions", &restrictions)?,
        dishes = to_json("prohibited dishes", &prohibited_dishes)?,
    );

    Ok(GenerationRequest {
        system: FAMILY_SYSTEM.to_string(),
        prompt,
        image: None,
    })
}

/// Leftovers recommendations.
pub fn leftover_recommendations<L: Serialize>(leftovers: &[L]) -> Result<GenerationRequest> {
    let prompt = format!(
        "\
Analyze this food leftover data and provide recommendations:

Leftovers: {leftovers}

Provide recommendations for making use of these leftovers in JSON format:
{{
  \"recommendations\": [
    \"Recommendation 1\",
    \"Recommendation 2\",
    \"Recommendation 3\"
  ]
}}",
        leftovers = to_json("leftovers", &leftovers)?,
    );

    Ok(GenerationRequest {
        system: LEFTOVERS_SYSTEM.to_string(),
        prompt,
        image: None,
    })
}

/// Weekly-menu generation.
pub fn weekly_menu<M, R, P>(
    members: &[M],
    restrictions: &[R],
    prohibited_dishes: &[String],
    products: &[P],
) -> Result<GenerationRequest>
where
    M: Serialize,
    R: Serialize,
    P: Serialize,
{
    let prompt = format!(
        "\
Generate a weekly menu for this family based on:

Family members: {members}
Dietary restrictions: {restrictions}
Prohibited dishes: {dishes}
Available products: {products}

Provide a menu for the 7 days of the week in JSON format:
{{
  \"weeklyMenu\": [
    {{
      \"day\": \"Mon\",
      \"recipe\": \"Recipe name\",
      \"protein\": \"Main protein\",
      \"side\": \"Side dish\"
    }},
    ...
  ]
}}

Use the day labels Mon, Tue, Wed, Thu, Fri, Sat, Sun.",
        members = to_json("family members", &members)?,
        restrictions = to_json("dietary restrictions", &restrictions)?,
        dishes = to_json("prohibited dishes", &prohibited_dishes)?,
        products = to_json("products", &products)?,
    );

    Ok(GenerationRequest {
        system: MENU_SYSTEM.to_string(),
        prompt,
        image: None,
    })
}

/// Metrics and recommendations generation.
pub fn household_metrics<M, P, L>(
    members: &[M],
    products: &[P],
    leftovers: &[L],
) -> Result<GenerationRequest>
where
    M: Serialize,
    P: Serialize,
    L: Serialize,
{
    let prompt = format!(
        "\
Generate metrics and recommendations based on:

Family members: {members}
Purchased products: {products}
Logged leftovers: {leftovers}

Provide metrics and recommendations in JSON format:
{{
  \"metrics\": {{
    \"wastePercentage\": estimated waste percentage,
    \"estimatedSavings\": estimated savings,
    \"weeklyWaste\": [percentage1, percentage2, percentage3, percentage4, percentage5]
  }},
  \"recommendations\": [
    \"Recommendation 1\",
    \"Recommendation 2\",
    \"Recommendation 3\",
    \"Recommendation 4\"
  ]
}}",
        members = to_json("family members", &members)?,
        products = to_json("products", &products)?,
        leftovers = to_json("leftovers", &leftovers)?,
    );

    Ok(GenerationRequest {
        system: METRICS_SYSTEM.to_string(),
        prompt,
        image: None,
    })
}
