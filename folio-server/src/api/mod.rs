pub mod error;
pub mod extractors;
pub mod profile;
pub mod records;
pub mod session;
pub mod summary;
