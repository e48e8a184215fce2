//! Best-effort collection bootstrap.
//!
//! Writes a well-known sentinel document into each collection so the
//! collection and its field shape are visible in the store console before
//! any real document lands. The sentinel is flagged and excluded from
//! every user-scoped query. Bootstrap is memoized per collection per
//! process and never blocks normal CRUD: failures are logged and
//! swallowed.

use crate::{Collection, DbError, Result};

use std::collections::HashSet;

use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

/// Well-known id of the sentinel document in each collection.
pub const SAMPLE_DOC_ID: &str = "_sample";

pub struct CollectionBootstrap {
    pool: SqlitePool,
    ready: RwLock<HashSet<Collection>>,
}

impl CollectionBootstrap {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            ready: RwLock::new(HashSet::new()),
        }
    }

    /// Ensure `collection` has its sentinel document. Memoized on success;
    /// a failed attempt is retried on the next call.
    pub async fn ensure_exists(&self, collection: Collection) {
        // Fast path: already bootstrapped this process (read lock)
        {
            let ready = self.ready.read().await;
            if ready.contains(&collection) {
                return;
            }
        }

        // Slow path: write lock for the whole check-and-create
        let mut ready = self.ready.write().await;

        // Double-check: another task may have bootstrapped while we waited
        if ready.contains(&collection) {
            return;
        }

        match self.write_sentinel(collection).await {
            Ok(()) => {
                ready.insert(collection);
            }
            Err(e) => {
                log::warn!("Could not ensure collection '{}' exists: {}", collection, e);
            }
        }
    }

    /// Bootstrap every record collection. Best-effort; used at startup.
    pub async fn initialize_all(&self) {
        for collection in Collection::BOOTSTRAPPED {
            self.ensure_exists(collection).await;
        }
        log::info!("Collection initialization complete");
    }

    async fn write_sentinel(&self, collection: Collection) -> Result<()> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM documents WHERE collection = ? AND id = ?")
                .bind(collection.as_str())
                .bind(SAMPLE_DOC_ID)
                .fetch_optional(&self.pool)
                .await?;

        if existing.is_some() {
            return Ok(());
        }

        let now = Utc::now().timestamp();
        let mut body = collection.sample_body();
        body["_isSample"] = json!(true);
        body["_createdAt"] = json!(now);
        let body_text = serde_json::to_string(&body).map_err(|e| DbError::Corrupt {
            message: format!("Failed to serialize sentinel body: {}", e),
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        })?;

        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, user_id, is_sample, body, created_at, updated_at)
                VALUES (?, ?, NULL, 1, ?, ?, ?)
            "#,
        )
        .bind(collection.as_str())
        .bind(SAMPLE_DOC_ID)
        .bind(&body_text)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        log::info!("Collection '{}' initialized with sentinel document", collection);
        Ok(())
    }
}
