//! Portfolio profile REST API handlers
//!
//! The profile is a single per-user document, so writes are upserts. The
//! photo endpoints pair the blob store with the `photoURL` field on the
//! document.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use folio_core::{ProfileForm, ProfileRecord};
use folio_db::{Collection, DbError, ProfileRepository};

use std::panic::Location;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

/// GET /api/v1/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileRecord>> {
    state.bootstrap.ensure_exists(Collection::Profiles).await;

    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .get(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No profile for user {}", auth.user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(profile))
}

/// PUT /api/v1/profile
pub async fn put_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(form): Json<ProfileForm>,
) -> ApiResult<Json<ProfileRecord>> {
    state.bootstrap.ensure_exists(Collection::Profiles).await;

    let repo = ProfileRepository::new(state.pool.clone());
    repo.upsert(auth.user_id, &form).await?;

    // Read back so the client sees the preserved createdAt
    let profile = repo
        .get(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Internal {
            message: "Profile vanished after upsert".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(profile))
}

/// PUT /api/v1/profile/photo
///
/// Body: raw photo bytes. Stores the blob, then saves its URL on the
/// profile document.
pub async fn put_profile_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    bytes: Bytes,
) -> ApiResult<Json<PhotoResponse>> {
    if bytes.is_empty() {
        return Err(ApiError::BadRequest {
            message: "Photo body is empty".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let url = state.photos.save(auth.user_id, &bytes).await?;

    let repo = ProfileRepository::new(state.pool.clone());
    repo.set_photo_url(auth.user_id, Some(&url)).await?;

    Ok(Json(PhotoResponse { photo_url: url }))
}

/// DELETE /api/v1/profile/photo
///
/// Removing a photo that was never uploaded is not an error.
pub async fn delete_profile_photo(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<StatusCode> {
    state.photos.delete(auth.user_id).await?;

    let repo = ProfileRepository::new(state.pool.clone());
    match repo.set_photo_url(auth.user_id, None).await {
        Ok(()) | Err(DbError::NotFound { .. }) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into()),
    }
}

/// GET /photos/{user_id}
///
/// Serves stored profile photos.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Response> {
    let user_id = Uuid::parse_str(&user_id)?;

    match state.photos.load(user_id).await? {
        Some(bytes) => Ok((StatusCode::OK, bytes).into_response()),
        None => Err(ApiError::NotFound {
            message: "Photo not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
