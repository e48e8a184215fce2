pub mod bootstrap;
pub mod collections;
pub mod connection;
pub mod error;
pub mod repositories;

pub use bootstrap::{CollectionBootstrap, SAMPLE_DOC_ID};
pub use collections::{Collection, validate_document_shape};
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::record_repository::{DocumentRepository, OrderBy, RecordKind};
