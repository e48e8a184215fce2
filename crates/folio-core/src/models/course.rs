//! Course record - a completed online or offline course.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub provider: String,
    #[serde(default)]
    pub certificate_link: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub completion_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseForm {
    pub title: String,
    pub provider: String,
    #[serde(default)]
    pub certificate_link: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub completion_date: DateTime<Utc>,
}
