#![allow(dead_code)]

use folio_auth::ExternalIdentity;
use folio_db::connection;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connection::connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Full identity as a healthy login payload would yield it
pub fn full_identity(subject: &str) -> ExternalIdentity {
    ExternalIdentity {
        display_name: Some("Asha Rao".to_string()),
        email: Some("asha.rao@example.com".to_string()),
        subject_id: Some(subject.to_string()),
    }
}

/// Identity with a subject but no optional claims
pub fn bare_identity(subject: &str) -> ExternalIdentity {
    ExternalIdentity {
        display_name: None,
        email: None,
        subject_id: Some(subject.to_string()),
    }
}
