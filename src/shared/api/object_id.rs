use actix_web::HttpResponse;
use uuid::Uuid;

use crate::shared::api::ApiResponse;

/// Parses a path identifier, answering 400 for empty or malformed input.
///
/// `label` is the capitalised resource name, e.g. `"Project"`.
pub fn parse_object_id(raw: &str, label: &str) -> Result<Uuid, HttpResponse> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ApiResponse::bad_request(&format!("{} ID is required", label)));
    }

    Uuid::parse_str(raw).map_err(|_| {
        ApiResponse::bad_request(&format!("Invalid {} ID", label.to_lowercase()))
    })
}
