//! Identity from an SDK-decoded ID token.
//!
//! During an interactive login the SDK already holds decoded ID-token
//! claims; this path bypasses the session-claims normalizer entirely and
//! produces the same [`ExternalIdentity`] shape.

use crate::ExternalIdentity;

use serde::Deserialize;

/// The subset of ID-token claims the bridge cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdTokenClaims {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub oid: Option<String>,
}

impl From<IdTokenClaims> for ExternalIdentity {
    fn from(claims: IdTokenClaims) -> Self {
        ExternalIdentity {
            display_name: claims.name.or(claims.given_name),
            email: claims.preferred_username.or(claims.email),
            subject_id: claims.oid,
        }
    }
}
