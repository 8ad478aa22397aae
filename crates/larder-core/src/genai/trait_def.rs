//! The `TextGenerator` trait -- the adapter interface for hosted models.
//!
//! Each concrete adapter wraps one model API. The trait is intentionally
//! object-safe so the orchestration layer can take `&dyn TextGenerator`
//! and tests can substitute a scripted double.

use anyhow::Result;
use async_trait::async_trait;

use super::types::GenerationRequest;

/// Adapter interface for a hosted text-generation model.
///
/// Implementors take a fixed system role plus a prompt (and optionally an
/// image) and return the model's raw text reply. No streaming and no
/// function calling; one request, one reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable name for this adapter (e.g. "openai").
    fn name(&self) -> &str;

    /// Send one request to the model and return its raw text reply.
    ///
    /// Transport failures and empty replies are errors; interpreting the
    /// reply is the caller's concern.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

// Compile-time assertion: TextGenerator must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn TextGenerator) {}
};
