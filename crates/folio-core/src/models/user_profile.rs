//! Backend-owned user identity document.

use crate::Role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One document per backend user, keyed by the backend-assigned id.
///
/// Created by the session bridge on first login and merge-updated on every
/// subsequent login. `role` and `created_at` are never overwritten by the
/// bridge once set. Field names match the original document wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "uid")]
    pub id: Uuid,
    pub external_subject_id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub last_login_at: DateTime<Utc>,
}

impl UserProfile {
    /// Profile as created on first bridge: role defaults to student,
    /// both timestamps set to the moment of creation.
    pub fn new(
        id: Uuid,
        external_subject_id: Option<String>,
        email: Option<String>,
        name: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            external_subject_id,
            email,
            name,
            role: Role::Student,
            created_at: now,
            last_login_at: now,
        }
    }
}
