//! Directory persistence port

use async_trait::async_trait;

use core_kernel::{DomainPort, LeaseId, PortError, PropertyId, TenantId, UnitId};

use crate::lease::{Lease, LeasePatch, LeaseWithParties, NewLease};
use crate::property::{NewProperty, Property};
use crate::tenant::{NewTenant, Tenant, TenantPatch};
use crate::unit::{NewUnit, Unit, UnitPatch};

/// Persistence access for the property directory
///
/// Partial updates follow PATCH semantics: fields absent from a patch are
/// left unchanged. Uniqueness violations (property code, unit name within a
/// property) surface as `PortError::Conflict`, deletes of rows still
/// referenced elsewhere likewise.
#[async_trait]
pub trait DirectoryStore: DomainPort {
    // Properties
    async fn list_properties(&self) -> Result<Vec<Property>, PortError>;
    async fn insert_property(&self, property: NewProperty) -> Result<Property, PortError>;

    // Units
    async fn list_units(&self, property_id: Option<PropertyId>) -> Result<Vec<Unit>, PortError>;
    async fn find_unit(&self, id: UnitId) -> Result<Unit, PortError>;
    async fn insert_unit(&self, unit: NewUnit) -> Result<Unit, PortError>;
    async fn update_unit(&self, id: UnitId, patch: UnitPatch) -> Result<Unit, PortError>;
    async fn delete_unit(&self, id: UnitId) -> Result<Unit, PortError>;

    // Tenants
    async fn list_tenants(&self) -> Result<Vec<Tenant>, PortError>;
    async fn find_tenant(&self, id: TenantId) -> Result<Tenant, PortError>;
    async fn insert_tenant(&self, tenant: NewTenant) -> Result<Tenant, PortError>;
    async fn update_tenant(&self, id: TenantId, patch: TenantPatch) -> Result<Tenant, PortError>;
    async fn delete_tenant(&self, id: TenantId) -> Result<Tenant, PortError>;

    // Leases
    async fn list_leases(&self) -> Result<Vec<LeaseWithParties>, PortError>;
    async fn find_lease(&self, id: LeaseId) -> Result<LeaseWithParties, PortError>;
    async fn insert_lease(&self, lease: NewLease) -> Result<Lease, PortError>;
    async fn update_lease(&self, id: LeaseId, patch: LeasePatch) -> Result<Lease, PortError>;
    async fn delete_lease(&self, id: LeaseId) -> Result<Lease, PortError>;
}
