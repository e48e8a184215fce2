use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Closed error taxonomy for document-store operations.
///
/// Callers surface these to the user and do not retry automatically.
#[derive(Error, Debug)]
pub enum DbError {
    #[error(
        "Permission denied: {message}. Ensure store access rules are deployed for this environment. {location}"
    )]
    PermissionDenied {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document store unavailable: {message}. Check connectivity and retry. {location}")]
    Unavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("The requested document was not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored document is corrupt: {message} {location}")]
    Corrupt {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match &source {
            sqlx::Error::RowNotFound => Self::NotFound {
                message: "no matching row".to_string(),
                location,
            },
            sqlx::Error::Io(e) => Self::Unavailable {
                message: e.to_string(),
                location,
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::Unavailable {
                message: source.to_string(),
                location,
            },
            sqlx::Error::Database(db) => {
                let message = db.message().to_lowercase();
                if message.contains("readonly") || message.contains("authoriz") {
                    Self::PermissionDenied {
                        message: db.message().to_string(),
                        location,
                    }
                } else {
                    Self::Sqlx { source, location }
                }
            }
            _ => Self::Sqlx { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
