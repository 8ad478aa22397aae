//! Generate household waste metrics and accompanying recommendations.

use chrono::{Datelike, Utc};
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use larder_db::models::NewMetric;
use larder_db::queries::{family_members, leftovers, metrics, products, recommendations};

use crate::genai::{self, GeneratedMetrics, TextGenerator};

use super::ActionResult;

/// What a metrics generation run produced.
///
/// `weekly_waste` inside `metrics` is reported but not persisted; the
/// metrics table keeps the headline figures only.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsOutcome {
    pub metrics: GeneratedMetrics,
    pub recommendations: Vec<String>,
}

/// Read the family profile and both logs, generate metrics, and persist
/// the results.
///
/// The two persists are independent: a metric row is appended whenever the
/// report parsed (stamped with the current ISO week), and recommendations
/// are replaced whenever the list is non-empty. Empty recommendations do
/// not block the metric write, and vice versa.
pub async fn generate_metrics(
    pool: &PgPool,
    generator: &dyn TextGenerator,
) -> ActionResult<MetricsOutcome> {
    let members = family_members::get_all(pool).await?;
    let purchases = products::get_all(pool).await?;
    let logged = leftovers::get_all(pool).await?;

    let outcome = genai::household_metrics(generator, &members, &purchases, &logged).await?;
    let parsed = !outcome.is_fallback();
    let report = outcome.into_inner();

    if parsed {
        let week_number = Utc::now().iso_week().week() as i32;
        metrics::append(
            pool,
            &NewMetric {
                waste_percentage: report.metrics.waste_percentage,
                estimated_savings: report.metrics.estimated_savings,
                week_number,
            },
        )
        .await?;
    }

    if !report.recommendations.is_empty() {
        recommendations::replace_all(pool, &report.recommendations).await?;
    }

    info!(
        persisted_metric = parsed,
        recommendations = report.recommendations.len(),
        "metrics generated"
    );

    Ok(MetricsOutcome {
        metrics: report.metrics,
        recommendations: report.recommendations,
    })
}
