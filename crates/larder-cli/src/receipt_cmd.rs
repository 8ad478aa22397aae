//! `larder receipt process` -- extract products from a receipt image.

use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Serialize;
use sqlx::PgPool;

use larder_core::actions;
use larder_core::envelope::Envelope;
use larder_core::genai::{ImageAttachment, TextGenerator};
use larder_db::models::Product;

#[derive(Debug, Serialize)]
struct ReceiptPayload {
    products: Vec<Product>,
}

/// Guess the MIME type from the file extension; receipts are photos, so
/// JPEG is the safe default.
fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

pub async fn run_receipt_process(
    pool: &PgPool,
    generator: &dyn TextGenerator,
    image_path: &str,
) -> Result<()> {
    let path = Path::new(image_path);
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read image {image_path}"))?;

    let image = ImageAttachment {
        media_type: media_type_for(path).to_owned(),
        data_base64: BASE64.encode(&bytes),
    };

    let result = actions::submit_receipt(pool, generator, image)
        .await
        .map(|products| ReceiptPayload { products });

    let envelope = Envelope::from_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
