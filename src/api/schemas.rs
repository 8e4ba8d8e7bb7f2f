// src/api/schemas.rs
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Response envelope shared by the content and auth endpoints.
#[derive(Serialize, ToSchema)]
pub struct Envelope {
    /// Mirrors the HTTP status code
    #[schema(example = 200)]
    pub status: u16,
    #[schema(example = "Projects retrieved successfully")]
    pub message: String,
    /// Resource payload; null for errors and empty listings
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
    /// Set only by `POST /api/admin/auth`
    pub token: Option<String>,
}
