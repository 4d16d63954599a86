//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL backing for the property management
//! system using SQLx: connection pool management, error translation, and
//! adapters implementing the domain port traits.
//!
//! # Architecture
//!
//! The crate follows the ports-and-adapters pattern: the domain crates
//! define store traits (`BillStore`, `DirectoryStore`) and this crate
//! implements them against PostgreSQL. Queries are runtime-checked
//! (`sqlx::query_as` over `FromRow` row structs), so the crate builds
//! without a live database.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, PgBillStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/property")).await?;
//! let store = PgBillStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod rows;
pub mod adapters;

pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use adapters::{PgBillStore, PgDirectoryStore};
