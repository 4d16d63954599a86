//! PostgreSQL adapters for the domain ports

pub mod billing;
pub mod directory;

pub use billing::PgBillStore;
pub use directory::PgDirectoryStore;
