//! Generic per-user document CRUD, instantiated once per record kind.

use crate::collections::{Collection, validate_document_shape};
use crate::{DbError, Result as DbErrorResult};

use error_location::ErrorLocation;

use std::marker::PhantomData;
use std::panic::Location;

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Natural ordering for a kind's `get_all`.
#[derive(Debug, Clone, Copy)]
pub struct OrderBy {
    /// Document field holding the sort key.
    pub field: &'static str,
    pub descending: bool,
}

impl OrderBy {
    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            descending: false,
        }
    }
}

/// A user-owned record kind stored in its own collection.
///
/// `Form` is the kind minus the store-assigned id and the ownership field;
/// it is the only payload `create` and `update` accept, so ownership can
/// never ride in on a write.
pub trait RecordKind: Serialize + DeserializeOwned + Send + Sync + 'static {
    type Form: Serialize + Send + Sync;

    const COLLECTION: Collection;
    const ORDER: OrderBy;
}

pub struct DocumentRepository<K: RecordKind> {
    pool: SqlitePool,
    _kind: PhantomData<K>,
}

impl<K: RecordKind> DocumentRepository<K> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    /// Write a new document with `userId` injected. Unset optional fields
    /// serialize as explicit nulls. Returns the store-assigned id.
    pub async fn create(&self, user_id: Uuid, form: &K::Form) -> DbErrorResult<Uuid> {
        let id = Uuid::new_v4();
        let body = Self::body_for(user_id, form)?;

        if !validate_document_shape(K::COLLECTION, &body) {
            log::warn!("{} document structure validation failed", K::COLLECTION);
        }

        let now = Utc::now().timestamp();
        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, user_id, is_sample, body, created_at, updated_at)
                VALUES (?, ?, ?, 0, ?, ?, ?)
            "#,
        )
        .bind(K::COLLECTION.as_str())
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(serialize_body(&body)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// All of the user's records, in the kind's natural order. A user with
    /// no records gets an empty vec, not an error.
    pub async fn get_all(&self, user_id: Uuid) -> DbErrorResult<Vec<K>> {
        let direction = if K::ORDER.descending { "DESC" } else { "ASC" };
        let sql = format!(
            "SELECT id, body FROM documents \
             WHERE collection = ? AND user_id = ? AND is_sample = 0 \
             ORDER BY json_extract(body, '$.{}') {}",
            K::ORDER.field, direction
        );

        let rows = sqlx::query(&sql)
            .bind(K::COLLECTION.as_str())
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let id: String = row.try_get("id")?;
                let body: String = row.try_get("body")?;
                hydrate::<K>(&id, &body)
            })
            .collect()
    }

    /// Replace the document body. Ownership is re-verified in the query;
    /// the `userId` field is re-stamped from the caller, so an update can
    /// never move a record to another user.
    pub async fn update(&self, user_id: Uuid, id: Uuid, form: &K::Form) -> DbErrorResult<()> {
        let body = Self::body_for(user_id, form)?;

        if !validate_document_shape(K::COLLECTION, &body) {
            log::warn!("{} document structure validation failed", K::COLLECTION);
        }

        let result = sqlx::query(
            r#"
                UPDATE documents
                SET body = ?, updated_at = ?
                WHERE collection = ? AND id = ? AND user_id = ? AND is_sample = 0
            "#,
        )
        .bind(serialize_body(&body)?)
        .bind(Utc::now().timestamp())
        .bind(K::COLLECTION.as_str())
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("{} {} for user {}", K::COLLECTION, id, user_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Hard delete. Ownership is re-verified in the query.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                DELETE FROM documents
                WHERE collection = ? AND id = ? AND user_id = ? AND is_sample = 0
            "#,
        )
        .bind(K::COLLECTION.as_str())
        .bind(id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("{} {} for user {}", K::COLLECTION, id, user_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Serialize the form and stamp ownership into the document body.
    #[track_caller]
    fn body_for(user_id: Uuid, form: &K::Form) -> DbErrorResult<Value> {
        let mut body = serde_json::to_value(form).map_err(|e| DbError::Corrupt {
            message: format!("Failed to serialize {} form: {}", K::COLLECTION, e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        body["userId"] = Value::String(user_id.to_string());
        Ok(body)
    }
}

#[track_caller]
fn serialize_body(body: &Value) -> DbErrorResult<String> {
    serde_json::to_string(body).map_err(|e| DbError::Corrupt {
        message: format!("Failed to serialize document body: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Inject the document key into the stored body and deserialize the kind.
#[track_caller]
fn hydrate<K: RecordKind>(id: &str, body: &str) -> DbErrorResult<K> {
    let mut value: Value = serde_json::from_str(body).map_err(|e| DbError::Corrupt {
        message: format!("Invalid JSON in {} document {}: {}", K::COLLECTION, id, e),
        location: ErrorLocation::from(Location::caller()),
    })?;
    match value.as_object_mut() {
        Some(fields) => {
            fields.insert("id".to_string(), Value::String(id.to_string()));
        }
        None => {
            return Err(DbError::Corrupt {
                message: format!("{} document {} is not a JSON object", K::COLLECTION, id),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    serde_json::from_value(value).map_err(|e| DbError::Corrupt {
        message: format!("Malformed {} document {}: {}", K::COLLECTION, id, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
