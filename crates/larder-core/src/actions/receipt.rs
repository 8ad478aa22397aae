//! Submit a grocery receipt image for product extraction.

use sqlx::PgPool;
use tracing::info;

use larder_db::models::Product;
use larder_db::queries::products;

use crate::genai::{self, Generated, ImageAttachment, TextGenerator};

use super::{ActionError, ActionResult};

/// Extract products from a receipt image and append them to the purchase
/// log.
///
/// An unparseable model reply and an empty extraction are both failures
/// with distinct reasons; nothing is persisted in either case.
pub async fn submit_receipt(
    pool: &PgPool,
    generator: &dyn TextGenerator,
    image: ImageAttachment,
) -> ActionResult<Vec<Product>> {
    let outcome = genai::extract_receipt_products(generator, image).await?;

    let extraction = match outcome {
        Generated::Parsed(extraction) => extraction,
        Generated::Fallback(_) => return Err(ActionError::UnusableModelResponse),
    };

    if extraction.products.is_empty() {
        return Err(ActionError::NoProductsFound);
    }

    let inserted = products::append(pool, &extraction.products).await?;

    info!(products = inserted.len(), "receipt products saved");

    Ok(inserted)
}
