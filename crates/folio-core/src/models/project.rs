//! Project record - a personal project in the user's portfolio.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored project document. `id` is assigned by the store, `user_id`
/// is stamped at creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub project_link: Option<String>,
    pub github_repo: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_date: Option<DateTime<Utc>>,
}

/// Create/update payload: everything the user edits. Ownership and id are
/// deliberately absent so they can never ride in on an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub project_link: Option<String>,
    #[serde(default)]
    pub github_repo: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_date: Option<DateTime<Utc>>,
}
