//! Property directory errors

use thiserror::Error;

use core_kernel::{LeaseId, PortError, PropertyId, TenantId, UnitId};

/// Errors that can occur in the property directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Property not found
    #[error("Property not found: {0}")]
    PropertyNotFound(PropertyId),

    /// Unit not found
    #[error("Unit not found: {0}")]
    UnitNotFound(UnitId),

    /// Tenant not found
    #[error("Tenant not found: {0}")]
    TenantNotFound(TenantId),

    /// Lease not found
    #[error("Lease not found: {0}")]
    LeaseNotFound(LeaseId),

    /// Property code already taken
    #[error("A property with code '{0}' already exists")]
    DuplicateCode(String),

    /// Unit name already taken within the property
    #[error("A unit named '{name}' already exists in property {property_id}")]
    DuplicateUnitName { property_id: PropertyId, name: String },

    /// The row is still referenced by other data
    #[error("Still referenced: {0}")]
    StillReferenced(String),

    /// A referenced row does not exist
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(PortError),
}
