//! Storage for the auth-owned `users` collection.
//!
//! Each document is keyed by the backend-assigned user id, which is what
//! makes duplicate-tab logins race-safe: concurrent bridges write the same
//! document and last write wins on the merge fields, never producing a
//! second document.

use crate::collections::Collection;
use crate::{DbError, Result as DbErrorResult};

use error_location::ErrorLocation;
use folio_core::UserProfile;

use std::panic::Location;

use chrono::Utc;
use serde_json::Value;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            "SELECT body FROM documents WHERE collection = ? AND id = ? AND is_sample = 0",
        )
        .bind(Collection::Users.as_str())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let body: String = r.try_get("body")?;
            deserialize_profile(&body)
        })
        .transpose()
    }

    /// Stable external-subject to backend-id mapping: the account created
    /// for a given subject is found again on every later login.
    pub async fn find_by_subject(&self, subject_id: &str) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query(
            "SELECT body FROM documents \
             WHERE collection = ? AND is_sample = 0 \
             AND json_extract(body, '$.externalSubjectId') = ? \
             LIMIT 1",
        )
        .bind(Collection::Users.as_str())
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            let body: String = r.try_get("body")?;
            deserialize_profile(&body)
        })
        .transpose()
    }

    /// Write a first-login profile. On conflict the document id already
    /// exists, meaning a concurrent first login for the same account; the
    /// later body wins.
    pub async fn create(&self, profile: &UserProfile) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();
        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, user_id, is_sample, body, created_at, updated_at)
                VALUES (?, ?, ?, 0, ?, ?, ?)
                ON CONFLICT (collection, id) DO UPDATE SET
                    body = excluded.body,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(Collection::Users.as_str())
        .bind(profile.id.to_string())
        .bind(profile.id.to_string())
        .bind(serialize_profile(profile)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Rewrite an existing profile document. The caller is responsible for
    /// preserving `role` and `created_at`; the bridge does so by mutating
    /// the stored profile rather than building a fresh one.
    pub async fn update(&self, profile: &UserProfile) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE documents
                SET body = ?, updated_at = ?
                WHERE collection = ? AND id = ? AND is_sample = 0
            "#,
        )
        .bind(serialize_profile(profile)?)
        .bind(Utc::now().timestamp())
        .bind(Collection::Users.as_str())
        .bind(profile.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                message: format!("user profile {}", profile.id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[track_caller]
fn serialize_profile(profile: &UserProfile) -> DbErrorResult<String> {
    let body: Value = serde_json::to_value(profile).map_err(|e| DbError::Corrupt {
        message: format!("Failed to serialize user profile: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;
    serde_json::to_string(&body).map_err(|e| DbError::Corrupt {
        message: format!("Failed to serialize user profile: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn deserialize_profile(body: &str) -> DbErrorResult<UserProfile> {
    serde_json::from_str(body).map_err(|e| DbError::Corrupt {
        message: format!("Malformed user profile document: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
