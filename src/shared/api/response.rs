// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Uniform envelope returned by every content endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: Option<T>,
    pub token: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn build(status: StatusCode, message: &str, data: Option<T>, token: Option<String>) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            status: status.as_u16(),
            message: message.to_string(),
            data,
            token,
        })
    }

    pub fn success(message: &str, data: T) -> HttpResponse {
        Self::build(StatusCode::OK, message, Some(data), None)
    }

    pub fn created(message: &str, data: T) -> HttpResponse {
        Self::build(StatusCode::CREATED, message, Some(data), None)
    }

    pub fn with_token(status: StatusCode, message: &str, data: T, token: String) -> HttpResponse {
        Self::build(status, message, Some(data), Some(token))
    }
}

impl ApiResponse<()> {
    /// Success without a payload, e.g. an empty listing.
    pub fn empty(message: &str) -> HttpResponse {
        Self::build(StatusCode::OK, message, None, None)
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        Self::build(status, message, None, None)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
