//! Persist user-corrected products and product categories.
//!
//! Both operations are plain appends to the purchase log; no generation
//! call is involved.

use sqlx::PgPool;
use tracing::info;

use larder_db::models::{NewProduct, Product};
use larder_db::queries::products;

use super::ActionResult;

/// Append products the user has reviewed and corrected after extraction.
pub async fn submit_validated_products(
    pool: &PgPool,
    validated: &[NewProduct],
) -> ActionResult<Vec<Product>> {
    let inserted = products::append(pool, validated).await?;
    info!(products = inserted.len(), "validated products saved");
    Ok(inserted)
}

/// Append products carrying their user-assigned categories.
pub async fn submit_product_categories(
    pool: &PgPool,
    categorized: &[NewProduct],
) -> ActionResult<Vec<Product>> {
    let inserted = products::append(pool, categorized).await?;
    info!(products = inserted.len(), "product categories saved");
    Ok(inserted)
}
