//! Directory application service
//!
//! Thin orchestration over the `DirectoryStore` port: translate port errors
//! into typed directory errors and keep the handlers free of persistence
//! concerns. The directory carries no business rules of its own; the
//! interesting invariants (unique property code, unique unit name per
//! property) are enforced by the store's constraints and surfaced here.

use tracing::debug;

use core_kernel::{LeaseId, PortError, PropertyId, TenantId, UnitId};

use crate::error::DirectoryError;
use crate::lease::{Lease, LeasePatch, LeaseWithParties, NewLease};
use crate::ports::DirectoryStore;
use crate::property::{NewProperty, Property};
use crate::tenant::{NewTenant, Tenant, TenantPatch};
use crate::unit::{NewUnit, Unit, UnitPatch};

/// Application service for the property directory
#[derive(Debug, Clone)]
pub struct DirectoryService<S> {
    store: S,
}

impl<S: DirectoryStore> DirectoryService<S> {
    /// Creates a new directory service backed by the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    // Properties

    pub async fn list_properties(&self) -> Result<Vec<Property>, DirectoryError> {
        self.store.list_properties().await.map_err(DirectoryError::Store)
    }

    pub async fn create_property(&self, property: NewProperty) -> Result<Property, DirectoryError> {
        debug!(code = %property.code, "creating property");
        let code = property.code.clone();
        self.store.insert_property(property).await.map_err(|e| match e {
            PortError::Conflict { .. } => DirectoryError::DuplicateCode(code),
            other => DirectoryError::Store(other),
        })
    }

    // Units

    pub async fn list_units(
        &self,
        property_id: Option<PropertyId>,
    ) -> Result<Vec<Unit>, DirectoryError> {
        self.store.list_units(property_id).await.map_err(DirectoryError::Store)
    }

    pub async fn get_unit(&self, id: UnitId) -> Result<Unit, DirectoryError> {
        self.store.find_unit(id).await.map_err(|e| unit_error(e, id))
    }

    pub async fn create_unit(&self, unit: NewUnit) -> Result<Unit, DirectoryError> {
        debug!(property_id = %unit.property_id, name = %unit.name, "creating unit");
        let (property_id, name) = (unit.property_id, unit.name.clone());
        self.store.insert_unit(unit).await.map_err(|e| match e {
            PortError::Conflict { .. } => DirectoryError::DuplicateUnitName { property_id, name },
            PortError::Validation { message, .. } => DirectoryError::InvalidReference(message),
            other => DirectoryError::Store(other),
        })
    }

    pub async fn update_unit(&self, id: UnitId, patch: UnitPatch) -> Result<Unit, DirectoryError> {
        self.store.update_unit(id, patch).await.map_err(|e| unit_error(e, id))
    }

    pub async fn remove_unit(&self, id: UnitId) -> Result<Unit, DirectoryError> {
        debug!(unit_id = %id, "deleting unit");
        self.store.delete_unit(id).await.map_err(|e| match e {
            PortError::Conflict { message } => DirectoryError::StillReferenced(message),
            other => unit_error(other, id),
        })
    }

    // Tenants

    pub async fn list_tenants(&self) -> Result<Vec<Tenant>, DirectoryError> {
        self.store.list_tenants().await.map_err(DirectoryError::Store)
    }

    pub async fn get_tenant(&self, id: TenantId) -> Result<Tenant, DirectoryError> {
        self.store.find_tenant(id).await.map_err(|e| tenant_error(e, id))
    }

    pub async fn create_tenant(&self, tenant: NewTenant) -> Result<Tenant, DirectoryError> {
        debug!(name = %tenant.name, "creating tenant");
        self.store.insert_tenant(tenant).await.map_err(DirectoryError::Store)
    }

    pub async fn update_tenant(
        &self,
        id: TenantId,
        patch: TenantPatch,
    ) -> Result<Tenant, DirectoryError> {
        self.store.update_tenant(id, patch).await.map_err(|e| tenant_error(e, id))
    }

    pub async fn remove_tenant(&self, id: TenantId) -> Result<Tenant, DirectoryError> {
        debug!(tenant_id = %id, "deleting tenant");
        self.store.delete_tenant(id).await.map_err(|e| match e {
            PortError::Conflict { message } => DirectoryError::StillReferenced(message),
            other => tenant_error(other, id),
        })
    }

    // Leases

    pub async fn list_leases(&self) -> Result<Vec<LeaseWithParties>, DirectoryError> {
        self.store.list_leases().await.map_err(DirectoryError::Store)
    }

    pub async fn get_lease(&self, id: LeaseId) -> Result<LeaseWithParties, DirectoryError> {
        self.store.find_lease(id).await.map_err(|e| lease_error(e, id))
    }

    pub async fn create_lease(&self, lease: NewLease) -> Result<Lease, DirectoryError> {
        debug!(unit_id = %lease.unit_id, tenant_id = %lease.tenant_id, "creating lease");
        self.store.insert_lease(lease).await.map_err(|e| match e {
            PortError::Validation { message, .. } => DirectoryError::InvalidReference(message),
            other => DirectoryError::Store(other),
        })
    }

    pub async fn update_lease(
        &self,
        id: LeaseId,
        patch: LeasePatch,
    ) -> Result<Lease, DirectoryError> {
        self.store.update_lease(id, patch).await.map_err(|e| lease_error(e, id))
    }

    pub async fn remove_lease(&self, id: LeaseId) -> Result<Lease, DirectoryError> {
        debug!(lease_id = %id, "deleting lease");
        self.store.delete_lease(id).await.map_err(|e| lease_error(e, id))
    }
}

fn unit_error(e: PortError, id: UnitId) -> DirectoryError {
    match e {
        PortError::NotFound { .. } => DirectoryError::UnitNotFound(id),
        PortError::Validation { message, .. } => DirectoryError::InvalidReference(message),
        other => DirectoryError::Store(other),
    }
}

fn tenant_error(e: PortError, id: TenantId) -> DirectoryError {
    match e {
        PortError::NotFound { .. } => DirectoryError::TenantNotFound(id),
        other => DirectoryError::Store(other),
    }
}

fn lease_error(e: PortError, id: LeaseId) -> DirectoryError {
    match e {
        PortError::NotFound { .. } => DirectoryError::LeaseNotFound(id),
        PortError::Validation { message, .. } => DirectoryError::InvalidReference(message),
        other => DirectoryError::Store(other),
    }
}
