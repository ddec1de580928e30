//! Wire bodies for HTTP error responses.
//!
//! The domain [`crate::domain::Error`] stays framework agnostic; these types
//! are the JSON envelopes clients actually receive, and double as the OpenAPI
//! schemas for the error responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of 400 and 500 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Fixed, client-safe description of the failure.
    #[schema(example = "Invalid request url params")]
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body of 422 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorsBody {
    /// One entry per empty required field, in field order.
    #[schema(example = json!(["missing required field: colourHex"]))]
    pub errors: Vec<String>,
}
