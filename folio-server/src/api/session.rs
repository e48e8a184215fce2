//! Session REST API handlers
//!
//! Login flow: the SPA forwards the raw session-claims payload from the
//! identity provider; we normalize it, bridge it onto a backend account,
//! and answer with a session JWT plus the account profile.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use folio_auth::easy_auth;
use folio_core::UserProfile;
use folio_db::AccountRepository;
use folio_session::SessionBridge;

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub is_club_lead: bool,
    pub can_verify: bool,
}

impl From<UserProfile> for SessionProfile {
    fn from(profile: UserProfile) -> Self {
        Self {
            is_club_lead: profile.role.is_club_lead(),
            can_verify: profile.role.can_verify(),
            profile,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub profile: SessionProfile,
}

#[derive(Debug, Serialize)]
pub struct AuthUrlsResponse {
    pub login: String,
    pub logout: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthUrlsQuery {
    /// Origin the login popup should return to.
    pub redirect: String,
}

/// POST /api/v1/session
///
/// Body: raw session-claims payload, any of the supported shapes.
pub async fn create_session(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<SessionResponse>> {
    let identity =
        easy_auth::normalize(&payload).ok_or_else(|| ApiError::Unauthorized {
            code: "IDENTITY_UNAVAILABLE".to_string(),
            message: "No usable identity in the auth payload".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        })?;

    let bridge = SessionBridge::new(state.pool.clone());
    let profile = bridge.establish(&identity).await?;

    let token = state.issuer.issue(profile.id, profile.role)?;

    Ok(Json(SessionResponse {
        token,
        profile: profile.into(),
    }))
}

/// GET /api/v1/session/me
///
/// Current account profile with role flags.
pub async fn current_session(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SessionProfile>> {
    let accounts = AccountRepository::new(state.pool.clone());
    let profile = accounts
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No account for user {}", auth.user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(profile.into()))
}

/// GET /api/v1/session/urls?redirect=...
///
/// Login/logout popup URLs on the identity provider. The popup dance
/// itself belongs to the SPA.
pub async fn auth_urls(
    State(state): State<AppState>,
    Query(query): Query<AuthUrlsQuery>,
) -> ApiResult<Json<AuthUrlsResponse>> {
    let base = state.easy_auth_base.as_deref().ok_or_else(|| {
        ApiError::Unavailable {
            message: "Identity provider base URL is not configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(Json(AuthUrlsResponse {
        login: format!(
            "{}/.auth/login/aad?post_login_redirect_uri={}",
            base,
            encode_uri_component(&query.redirect)
        ),
        logout: format!("{}/.auth/logout", base),
    }))
}

/// Percent-encode a URL query component (RFC 3986 unreserved set).
fn encode_uri_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
