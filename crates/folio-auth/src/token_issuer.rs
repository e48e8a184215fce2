use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use folio_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

/// Issues backend session tokens after a successful identity bridge.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    #[track_caller]
    pub fn issue(&self, user_id: Uuid, role: Role) -> AuthErrorResult<String> {
        let claims = SessionClaims::new(user_id, role, self.ttl_secs);
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
