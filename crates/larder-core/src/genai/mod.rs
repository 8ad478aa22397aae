//! Generation gateway: the boundary wrapping calls to an external
//! text-generation model.
//!
//! This module defines the [`TextGenerator`] trait that concrete adapters
//! implement, the request/response payload types, and one gateway function
//! per use case (receipt extraction, family recommendations, leftover
//! recommendations, weekly menu, household metrics).
//!
//! # Architecture
//!
//! ```text
//! Actions
//!     |
//!     v
//! gateway::plan_weekly_menu(&dyn TextGenerator, ...)
//!     |
//!     |  prompts::weekly_menu(..) --> GenerationRequest
//!     |  generator.generate(&req) --> raw text
//!     |  parse::parse_or_default  --> Generated<WeeklyMenuPlan>
//!     v
//! Parsed(plan) | Fallback(empty plan)
//! ```
//!
//! Parsing is deliberately best-effort: a reply that is not valid JSON
//! degrades to the use case's typed default instead of failing the caller.
//! Transport errors are real errors and propagate.

pub mod gateway;
pub mod openai;
pub mod parse;
pub mod prompts;
pub mod trait_def;
pub mod types;

// Re-export the primary public API at the module level.
pub use gateway::{
    extract_receipt_products, family_recommendations, household_metrics,
    leftover_recommendations, plan_weekly_menu,
};
pub use openai::{OpenAiConfig, OpenAiGenerator};
pub use parse::Generated;
pub use trait_def::TextGenerator;
pub use types::{
    GenerationRequest, GeneratedMetrics, ImageAttachment, MetricsReport, ReceiptExtraction,
    RecommendationSet, WeeklyMenuPlan,
};
