use crate::api::profile::{
    delete_profile_photo, get_photo, get_profile, put_profile, put_profile_photo,
};
use crate::api::records::{create_record, delete_record, list_records, update_record};
use crate::api::session::{auth_urls, create_session, current_session};
use crate::api::summary::get_summary;
use crate::health;
use crate::state::AppState;

use folio_core::{
    Achievement, Certification, Course, Education, Position, Project, SkillCategory,
};
use folio_db::RecordKind;

use axum::{
    Router,
    routing::{get, post, put},
};
use serde::de::DeserializeOwned;
use tower_http::cors::{Any, CorsLayer};

/// Routes for one record kind, mounted at its collection name.
fn record_routes<K: RecordKind>(router: Router<AppState>) -> Router<AppState>
where
    K::Form: DeserializeOwned,
{
    let collection = K::COLLECTION.as_str();
    router
        .route(
            &format!("/api/v1/{}", collection),
            get(list_records::<K>).post(create_record::<K>),
        )
        .route(
            &format!("/api/v1/{}/{{id}}", collection),
            put(update_record::<K>).delete(delete_record::<K>),
        )
}

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Session endpoints
        .route("/api/v1/session", post(create_session))
        .route("/api/v1/session/me", get(current_session))
        .route("/api/v1/session/urls", get(auth_urls))
        // Profile endpoints
        .route("/api/v1/profile", get(get_profile).put(put_profile))
        .route(
            "/api/v1/profile/photo",
            put(put_profile_photo).delete(delete_profile_photo),
        )
        .route("/photos/{user_id}", get(get_photo))
        // Dashboard summary
        .route("/api/v1/summary", get(get_summary))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness));

    // Record CRUD, one set of generic handlers per kind
    router = record_routes::<Project>(router);
    router = record_routes::<Education>(router);
    router = record_routes::<Course>(router);
    router = record_routes::<Achievement>(router);
    router = record_routes::<SkillCategory>(router);
    router = record_routes::<Position>(router);
    router = record_routes::<Certification>(router);

    router
        // Add shared state
        .with_state(state)
        // CORS middleware (the SPA is served from a different origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
