use crate::config::{AppConfig, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub token_expiry_hours: i64,
}

impl JwtConfig {
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ConfigError> {
        // HS256 requires at least 32 bytes
        if config.jwt_secret.len() < 32 {
            return Err(ConfigError::WeakJwtSecret);
        }

        if config.jwt_expiry_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRY_HOURS",
                value: config.jwt_expiry_hours.to_string(),
            });
        }

        Ok(Self {
            secret_key: config.jwt_secret.clone(),
            token_expiry_hours: config.jwt_expiry_hours,
        })
    }
}
