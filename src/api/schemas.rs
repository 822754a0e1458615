// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response body
///
/// Success responses carry the payload directly, so there is no matching
/// success wrapper; each route documents its own response type.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "name is required and must be a non-empty string")]
    pub error: String,
}
