use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        token_expiry_hours: 72,
    }))
}

/// Token provider in the shape the `AdminUser` extractor looks up.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(test_token_provider())
}

/// `Authorization` header carrying a valid token for `user_id`.
pub fn bearer(user_id: Uuid) -> (&'static str, String) {
    let token = test_token_provider()
        .issue_token(user_id, "admin@example.com")
        .expect("test token must encode");

    ("Authorization", format!("Bearer {}", token))
}
