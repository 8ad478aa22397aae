//! The uniform `{success, data|error}` envelope.
//!
//! Every orchestration operation returns a typed `Result`; the
//! presentation edge converts it into this serializable shape, so callers
//! on the other side of a process boundary always see the same contract.

use serde::Serialize;

use crate::actions::ActionError;

/// Serializable result envelope. `data` fields are flattened into the
/// envelope object, matching the `{success, products: [...]}` style the
/// presentation layer expects.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    // A flattened `None` emits no fields at all.
    #[serde(flatten)]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap an operation result. Failures are logged here so the caller
    /// only has to print the envelope.
    pub fn from_result(result: Result<T, ActionError>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(err) => {
                tracing::error!(error = %err, "operation failed");
                Self {
                    success: false,
                    data: None,
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

/// Payload for operations that return no data beyond success itself.
#[derive(Debug, Serialize)]
pub struct NoData {}

impl Envelope<NoData> {
    /// Wrap a data-less operation result.
    pub fn from_unit_result(result: Result<(), ActionError>) -> Self {
        Self::from_result(result.map(|()| NoData {}))
    }
}
