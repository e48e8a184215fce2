//! Certification record - an industry certification held by the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub issuer: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub issue_date: DateTime<Utc>,
    #[serde(default)]
    pub certificate_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationForm {
    pub title: String,
    pub issuer: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub issue_date: DateTime<Utc>,
    #[serde(default)]
    pub certificate_link: Option<String>,
}
