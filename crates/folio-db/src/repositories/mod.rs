pub mod account_repository;
pub mod profile_repository;
pub mod record_kinds;
pub mod record_repository;
