use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::modules::stats::application::ports::outgoing::ExternalApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("portfolio-api/", env!("CARGO_PKG_VERSION"));

/// Shared outbound client. Cloning is cheap and reuses the connection pool.
pub fn build_http_client() -> Result<Client, ExternalApiError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ExternalApiError::Transport(e.to_string()))
}

/// Sends the request and decodes a 2xx JSON body.
pub(super) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, ExternalApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ExternalApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExternalApiError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ExternalApiError::Decode(e.to_string()))
}

/// Sends the request and decodes the JSON body whatever the status, so
/// upstream error payloads reach the caller unchanged.
pub(super) async fn relay_json(request: RequestBuilder) -> Result<Value, ExternalApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ExternalApiError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Relaying non-success upstream body");
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| ExternalApiError::Decode(e.to_string()))
}
