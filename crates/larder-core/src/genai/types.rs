//! Request and reply payload types for the generation gateway.

use serde::{Deserialize, Serialize};

use larder_db::models::{NewMenuEntry, NewProduct};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// One request to the model: a fixed system role, the instruction prompt
/// with the serialized domain data embedded, and an optional image.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system: String,
    pub prompt: String,
    pub image: Option<ImageAttachment>,
}

/// A base64-encoded image sent alongside a prompt (receipt photos).
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    /// MIME type, e.g. "image/jpeg".
    pub media_type: String,
    /// Raw base64 payload, without any data-URL prefix.
    pub data_base64: String,
}

impl ImageAttachment {
    /// Build an attachment from base64 data, stripping a `data:` URL
    /// prefix if the caller passed one.
    pub fn from_base64(media_type: impl Into<String>, data: &str) -> Self {
        let data_base64 = match data.split_once(",") {
            Some((prefix, rest)) if prefix.starts_with("data:") => rest,
            _ => data,
        };
        Self {
            media_type: media_type.into(),
            data_base64: data_base64.to_owned(),
        }
    }

    /// Render as a data URL, the form chat-completion APIs accept inline.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data_base64)
    }
}

// ---------------------------------------------------------------------------
// Replies, one shape per use case
// ---------------------------------------------------------------------------

/// Products extracted from a receipt image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceiptExtraction {
    #[serde(default)]
    pub products: Vec<NewProduct>,
}

/// A list of recommendation texts (family data and leftovers use cases).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// A generated menu for the seven days of the week.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyMenuPlan {
    #[serde(rename = "weeklyMenu", default)]
    pub weekly_menu: Vec<NewMenuEntry>,
}

/// Waste/savings figures produced by the metrics use case.
///
/// `weekly_waste` is reported back to the caller but not persisted; the
/// metrics table keeps only the headline figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMetrics {
    #[serde(default)]
    pub waste_percentage: f64,
    #[serde(default)]
    pub estimated_savings: f64,
    #[serde(default)]
    pub weekly_waste: Vec<f64>,
}

/// Metrics plus the accompanying recommendation texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    #[serde(default)]
    pub metrics: GeneratedMetrics,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_attachment_strips_data_url_prefix() {
        let att = ImageAttachment::from_base64("image/png", "data:image/png;base64,AAAA");
        assert_eq!(att.data_base64, "AAAA");
        assert_eq!(att.data_url(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn image_attachment_keeps_bare_base64() {
        let att = ImageAttachment::from_base64("image/jpeg", "QkJCQg==");
        assert_eq!(att.data_base64, "QkJCQg==");
    }

    #[test]
    fn weekly_menu_plan_uses_camel_case_wire_name() {
        let plan: WeeklyMenuPlan = serde_json::from_str(
            r#"{"weeklyMenu":[{"day":"Mon","recipe":"Baked chicken","protein":"Chicken","side":"Vegetables"}]}"#,
        )
        .unwrap();
        assert_eq!(plan.weekly_menu.len(), 1);
        assert_eq!(plan.weekly_menu[0].recipe, "Baked chicken");
    }

    #[test]
    fn metrics_report_tolerates_missing_fields() {
        let report: MetricsReport =
            serde_json::from_str(r#"{"metrics":{"wastePercentage":12.5}}"#).unwrap();
        assert_eq!(report.metrics.waste_percentage, 12.5);
        assert_eq!(report.metrics.estimated_savings, 0.0);
        assert!(report.metrics.weekly_waste.is_empty());
        assert!(report.recommendations.is_empty());
    }
}
