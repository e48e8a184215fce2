//! Education record - one degree or school entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: Uuid,
    pub user_id: Uuid,
    pub institute: String,
    pub degree: String,
    #[serde(default)]
    pub branch: Option<String>,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub cgpa_or_percentage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationForm {
    pub institute: String,
    pub degree: String,
    #[serde(default)]
    pub branch: Option<String>,
    pub start_year: i32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub cgpa_or_percentage: Option<String>,
}
