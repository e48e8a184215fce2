//! Generic record REST API handlers
//!
//! One set of handlers serves all seven record kinds; the kind is picked
//! at route-registration time. Every operation is scoped to the
//! authenticated user, and the backing collection is lazily bootstrapped
//! on first touch.

use crate::api::error::Result as ApiResult;
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use folio_db::{DocumentRepository, RecordKind};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RecordListResponse<K> {
    pub records: Vec<K>,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordResponse {
    pub id: Uuid,
}

/// GET /api/v1/{collection}
pub async fn list_records<K: RecordKind>(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<RecordListResponse<K>>> {
    state.bootstrap.ensure_exists(K::COLLECTION).await;

    let repo: DocumentRepository<K> = DocumentRepository::new(state.pool.clone());
    let records = repo.get_all(auth.user_id).await?;

    Ok(Json(RecordListResponse { records }))
}

/// POST /api/v1/{collection}
pub async fn create_record<K: RecordKind>(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(form): Json<K::Form>,
) -> ApiResult<(StatusCode, Json<CreateRecordResponse>)>
where
    K::Form: DeserializeOwned,
{
    state.bootstrap.ensure_exists(K::COLLECTION).await;

    let repo: DocumentRepository<K> = DocumentRepository::new(state.pool.clone());
    let id = repo.create(auth.user_id, &form).await?;

    Ok((StatusCode::CREATED, Json(CreateRecordResponse { id })))
}

/// PUT /api/v1/{collection}/{id}
pub async fn update_record<K: RecordKind>(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(form): Json<K::Form>,
) -> ApiResult<StatusCode>
where
    K::Form: DeserializeOwned,
{
    let record_id = Uuid::parse_str(&id)?;

    let repo: DocumentRepository<K> = DocumentRepository::new(state.pool.clone());
    repo.update(auth.user_id, record_id, &form).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/{collection}/{id}
pub async fn delete_record<K: RecordKind>(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let record_id = Uuid::parse_str(&id)?;

    let repo: DocumentRepository<K> = DocumentRepository::new(state.pool.clone());
    repo.delete(auth.user_id, record_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
