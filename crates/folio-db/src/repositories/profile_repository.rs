//! Storage for the portfolio `profiles` collection.
//!
//! Unlike the other record kinds, the profile document is keyed by the
//! user id itself - each user has at most one - so create and update
//! collapse into a single upsert that preserves the original creation
//! timestamp.

use crate::collections::{Collection, validate_document_shape};
use crate::{DbError, Result as DbErrorResult};

use error_location::ErrorLocation;
use folio_core::{ProfileForm, ProfileRecord};

use std::panic::Location;

use chrono::Utc;
use serde_json::{Value, json};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, user_id: Uuid) -> DbErrorResult<Option<ProfileRecord>> {
        let row = sqlx::query(
            "SELECT body FROM documents WHERE collection = ? AND id = ? AND is_sample = 0",
        )
        .bind(Collection::Profiles.as_str())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let body: String = r.try_get("body")?;
            serde_json::from_str(&body).map_err(|e| DbError::Corrupt {
                message: format!("Malformed profile document: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }

    /// Create or replace the user's profile. `createdAt` survives the
    /// upsert; `updatedAt` always moves.
    pub async fn upsert(&self, user_id: Uuid, form: &ProfileForm) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let mut body: Value = serde_json::to_value(form).map_err(|e| DbError::Corrupt {
            message: format!("Failed to serialize profile form: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        body["userId"] = Value::String(user_id.to_string());
        body["createdAt"] = json!(now);
        body["updatedAt"] = json!(now);

        if !validate_document_shape(Collection::Profiles, &body) {
            log::warn!("Profile document structure validation failed");
        }

        let body_text = serde_json::to_string(&body).map_err(|e| DbError::Corrupt {
            message: format!("Failed to serialize profile body: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, user_id, is_sample, body, created_at, updated_at)
                VALUES (?, ?, ?, 0, ?, ?, ?)
                ON CONFLICT (collection, id) DO UPDATE SET
                    body = json_set(
                        excluded.body,
                        '$.createdAt', json_extract(documents.body, '$.createdAt')
                    ),
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(Collection::Profiles.as_str())
        .bind(user_id.to_string())
        .bind(user_id.to_string())
        .bind(&body_text)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Point the profile's `photoURL` at a stored photo, or clear it.
    /// The profile document must already exist.
    pub async fn set_photo_url(&self, user_id: Uuid, url: Option<&str>) -> DbErrorResult<()> {
        let photo = match url {
            Some(u) => Value::String(u.to_string()),
            None => Value::Null,
        };
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE documents
                SET body = json_set(body, '$.photoURL', json(?), '$.updatedAt', ?),
                    updated_at = ?
                WHERE collection = ? AND id = ? AND is_sample = 0
            "#,
        )
        .bind(photo.to_string())
        .bind(now)
        .bind(now)
        .bind(Collection::Profiles.as_str())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("profile for user {}", user_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
