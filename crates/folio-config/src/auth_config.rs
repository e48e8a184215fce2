use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret for session tokens. Required to serve logins.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    /// Identity-provider base URL for the session-claims endpoint and the
    /// login/logout popup URLs, e.g. `https://myapp.azurestaticapps.net`.
    pub easy_auth_base_url: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            easy_auth_base_url: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_BYTES
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} bytes, got {}",
                MIN_JWT_SECRET_BYTES,
                secret.len()
            )));
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        if let Some(base) = &self.easy_auth_base_url
            && !(base.starts_with("http://") || base.starts_with("https://"))
        {
            return Err(ConfigError::auth(
                "auth.easy_auth_base_url must start with http:// or https://",
            ));
        }

        Ok(())
    }
}
