// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("Invalid request body"),
        )
        .into()
    })
}
