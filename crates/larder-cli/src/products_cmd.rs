//! `larder products submit` / `larder products categorize` -- append
//! user-reviewed products to the purchase log.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

use larder_core::actions;
use larder_core::envelope::Envelope;
use larder_db::models::{NewProduct, Product};

#[derive(Debug, Serialize)]
struct ProductsPayload {
    products: Vec<Product>,
}

fn read_products(file: &str) -> Result<Vec<NewProduct>> {
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read products file {file}"))?;
    serde_json::from_str(&contents).context("failed to parse products file")
}

pub async fn run_products_submit(pool: &PgPool, file: &str) -> Result<()> {
    let products = read_products(file)?;

    let result = actions::submit_validated_products(pool, &products)
        .await
        .map(|products| ProductsPayload { products });

    let envelope = Envelope::from_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub async fn run_products_categorize(pool: &PgPool, file: &str) -> Result<()> {
    let products = read_products(file)?;

    let result = actions::submit_product_categories(pool, &products)
        .await
        .map(|products| ProductsPayload { products });

    let envelope = Envelope::from_result(result);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
