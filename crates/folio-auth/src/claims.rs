use crate::{AuthError, Result as AuthErrorResult};

use folio_core::Role;

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Backend session token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (backend user id)
    pub sub: String,
    /// Role at token-issue time
    pub role: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl SessionClaims {
    pub fn new(user_id: Uuid, role: Role, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            exp: now + ttl_secs,
            iat: now,
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if Uuid::parse_str(&self.sub).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub is not a valid uuid".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if Role::from_str(&self.role).is_err() {
            return Err(AuthError::InvalidClaim {
                claim: "role".to_string(),
                message: format!("unknown role '{}'", self.role),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Backend user id carried by the token. Call after `validate()`.
    #[track_caller]
    pub fn user_id(&self) -> AuthErrorResult<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Role carried by the token; unknown values fall back to student.
    pub fn role(&self) -> Role {
        Role::from_str(&self.role).unwrap_or_default()
    }
}
