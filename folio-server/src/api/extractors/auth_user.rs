//! Axum extractors for REST API authentication

use crate::api::error::ApiError;
use crate::state::AppState;

use folio_auth::AuthError;
use folio_core::Role;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The authenticated caller, extracted from the bearer session token.
///
/// Every user-scoped handler takes this; the uuid inside is the only
/// ownership input the repositories ever see.
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: Role,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(http::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .ok_or(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token = header
                .strip_prefix("Bearer ")
                .ok_or(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let claims = state.validator.validate(token)?;

            Ok(AuthUser {
                user_id: claims.user_id()?,
                role: claims.role(),
            })
        }
    }
}
