use crate::storage::PhotoStore;

use folio_auth::{JwtValidator, TokenIssuer};
use folio_db::CollectionBootstrap;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub bootstrap: Arc<CollectionBootstrap>,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<JwtValidator>,
    pub photos: Arc<PhotoStore>,
    /// Identity-provider base URL for login/logout popup URLs.
    pub easy_auth_base: Option<String>,
}
