//! Property Directory Domain
//!
//! This crate models the property directory: buildings, their rentable
//! units, the tenants renting them, and the leases tying the two together.
//! The directory is plain CRUD; the billing domain references units from
//! here when joining bills to the unit they were raised for.

pub mod property;
pub mod unit;
pub mod tenant;
pub mod lease;
pub mod ports;
pub mod service;
pub mod error;

pub use property::{NewProperty, Property};
pub use unit::{NewUnit, Unit, UnitPatch};
pub use tenant::{NewTenant, Tenant, TenantPatch};
pub use lease::{Lease, LeasePatch, LeaseWithParties, NewLease};
pub use ports::DirectoryStore;
pub use service::DirectoryService;
pub use error::DirectoryError;
