//! Position record - a position of responsibility held by the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionForm {
    pub title: String,
    pub organization: String,
    pub description: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start_date: DateTime<Utc>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub end_date: Option<DateTime<Utc>>,
}
