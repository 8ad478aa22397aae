//! Orchestration layer: one function per user-facing operation.
//!
//! Each operation is a short awaited sequence -- persist submitted data,
//! optionally call the generation gateway, persist the derived results --
//! with no branching beyond existence checks. Operations take the store
//! pool and the generator explicitly, so tests can substitute both.
//!
//! Errors never escape this layer uncaught: every operation returns
//! `Result<T, ActionError>`, and the presentation edge renders that into
//! the uniform `{success, data|error}` envelope (see [`crate::envelope`]).

pub mod family;
pub mod leftovers;
pub mod menu;
pub mod metrics;
pub mod products;
pub mod receipt;

pub use family::submit_family_profile;
pub use leftovers::submit_leftovers;
pub use menu::generate_menu;
pub use metrics::{MetricsOutcome, generate_metrics};
pub use products::{submit_product_categories, submit_validated_products};
pub use receipt::submit_receipt;

/// Failure taxonomy for orchestration operations.
///
/// The two named variants carry the descriptive reasons the presentation
/// layer shows verbatim; everything else (store failures, transport
/// failures) travels as `Other` with its context chain intact.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The model reply for a receipt could not be parsed at all.
    #[error("the model response could not be parsed")]
    UnusableModelResponse,
    /// The model reply parsed but contained no products.
    #[error("no products found in the receipt")]
    NoProductsFound,
    /// Store or generation-transport failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Shorthand used by every operation in this module.
pub type ActionResult<T> = Result<T, ActionError>;
