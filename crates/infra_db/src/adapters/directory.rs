//! PostgreSQL directory store
//!
//! Implements the `DirectoryStore` port against the properties, units,
//! tenants, and leases tables. Uniqueness (property code, unit name within
//! a property) is enforced by the database indexes; deletes of rows still
//! referenced elsewhere are rejected and surface as conflicts.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, LeaseId, PortError, PropertyId, TenantId, UnitId};
use domain_property::{
    DirectoryStore, Lease, LeasePatch, LeaseWithParties, NewLease, NewProperty, NewTenant,
    NewUnit, Property, Tenant, TenantPatch, Unit, UnitPatch,
};

use crate::error::DatabaseError;
use crate::rows::{LeaseRow, LeaseWithPartiesRow, PropertyRow, TenantRow, UnitRow};

const UNIT_COLUMNS: &str = "id, property_id, name, floor, base_price";
const TENANT_COLUMNS: &str = "id, name, phone, email, identity_card";
const LEASE_COLUMNS: &str =
    "id, unit_id, tenant_id, start_date, end_date, deposit, rent_price, occupant_count, active";

const LEASE_WITH_PARTIES_QUERY: &str = "SELECT l.id, l.unit_id, l.tenant_id, l.start_date, \
     l.end_date, l.deposit, l.rent_price, l.occupant_count, l.active, \
     t.id AS t_id, t.name AS t_name, t.phone AS t_phone, t.email AS t_email, \
     t.identity_card AS t_identity_card, \
     u.id AS u_id, u.property_id AS u_property_id, u.name AS u_name, \
     u.floor AS u_floor, u.base_price AS u_base_price \
     FROM leases l \
     LEFT JOIN tenants t ON t.id = l.tenant_id \
     LEFT JOIN units u ON u.id = l.unit_id";

/// PostgreSQL-backed implementation of the `DirectoryStore` port
#[derive(Debug, Clone)]
pub struct PgDirectoryStore {
    pool: PgPool,
}

impl PgDirectoryStore {
    /// Creates a new directory store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgDirectoryStore {}

#[async_trait]
impl DirectoryStore for PgDirectoryStore {
    #[instrument(skip(self))]
    async fn list_properties(&self) -> Result<Vec<Property>, PortError> {
        let rows = sqlx::query_as::<_, PropertyRow>(
            "SELECT id, code, name, address, electric_id, water_id \
             FROM properties ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_to_port)?;

        Ok(rows.into_iter().map(Property::from).collect())
    }

    #[instrument(skip(self, property), fields(code = %property.code))]
    async fn insert_property(&self, property: NewProperty) -> Result<Property, PortError> {
        debug!("inserting property");

        let row = sqlx::query_as::<_, PropertyRow>(
            "INSERT INTO properties (code, name, address, electric_id, water_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, code, name, address, electric_id, water_id",
        )
        .bind(property.code)
        .bind(property.name)
        .bind(property.address)
        .bind(property.electric_id)
        .bind(property.water_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_to_port)?;

        Ok(row.into())
    }

    #[instrument(skip(self))]
    async fn list_units(&self, property_id: Option<PropertyId>) -> Result<Vec<Unit>, PortError> {
        let rows = match property_id {
            Some(property_id) => {
                sqlx::query_as::<_, UnitRow>(&format!(
                    "SELECT {UNIT_COLUMNS} FROM units WHERE property_id = $1 ORDER BY id"
                ))
                .bind(property_id.value())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, UnitRow>(&format!(
                    "SELECT {UNIT_COLUMNS} FROM units ORDER BY id"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(db_to_port)?;

        Ok(rows.into_iter().map(Unit::from).collect())
    }

    #[instrument(skip(self), fields(unit_id = %id))]
    async fn find_unit(&self, id: UnitId) -> Result<Unit, PortError> {
        let row = sqlx::query_as::<_, UnitRow>(&format!(
            "SELECT {UNIT_COLUMNS} FROM units WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Unit::from)
            .ok_or_else(|| PortError::not_found("Unit", id))
    }

    #[instrument(skip(self, unit), fields(property_id = %unit.property_id, name = %unit.name))]
    async fn insert_unit(&self, unit: NewUnit) -> Result<Unit, PortError> {
        debug!("inserting unit");

        let property_id = unit.property_id;

        let row = sqlx::query_as::<_, UnitRow>(&format!(
            "INSERT INTO units (property_id, name, floor, base_price) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {UNIT_COLUMNS}"
        ))
        .bind(unit.property_id.value())
        .bind(unit.name)
        .bind(unit.floor)
        .bind(unit.base_price.map(Decimal::from))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::ForeignKeyViolation(_) => {
                PortError::validation(format!("property {property_id} does not exist"))
            }
            other => other.into(),
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self, patch), fields(unit_id = %id))]
    async fn update_unit(&self, id: UnitId, patch: UnitPatch) -> Result<Unit, PortError> {
        let row = sqlx::query_as::<_, UnitRow>(&format!(
            "UPDATE units SET \
             property_id = COALESCE($2, property_id), \
             name = COALESCE($3, name), \
             floor = COALESCE($4, floor), \
             base_price = COALESCE($5, base_price) \
             WHERE id = $1 \
             RETURNING {UNIT_COLUMNS}"
        ))
        .bind(id.value())
        .bind(patch.property_id.map(|p| p.value()))
        .bind(patch.name)
        .bind(patch.floor)
        .bind(patch.base_price.map(Decimal::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Unit::from)
            .ok_or_else(|| PortError::not_found("Unit", id))
    }

    #[instrument(skip(self), fields(unit_id = %id))]
    async fn delete_unit(&self, id: UnitId) -> Result<Unit, PortError> {
        debug!("deleting unit");

        let row = sqlx::query_as::<_, UnitRow>(&format!(
            "DELETE FROM units WHERE id = $1 RETURNING {UNIT_COLUMNS}"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Unit::from)
            .ok_or_else(|| PortError::not_found("Unit", id))
    }

    #[instrument(skip(self))]
    async fn list_tenants(&self) -> Result<Vec<Tenant>, PortError> {
        let rows = sqlx::query_as::<_, TenantRow>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_to_port)?;

        Ok(rows.into_iter().map(Tenant::from).collect())
    }

    #[instrument(skip(self), fields(tenant_id = %id))]
    async fn find_tenant(&self, id: TenantId) -> Result<Tenant, PortError> {
        let row = sqlx::query_as::<_, TenantRow>(&format!(
            "SELECT {TENANT_COLUMNS} FROM tenants WHERE id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Tenant::from)
            .ok_or_else(|| PortError::not_found("Tenant", id))
    }

    #[instrument(skip(self, tenant), fields(name = %tenant.name))]
    async fn insert_tenant(&self, tenant: NewTenant) -> Result<Tenant, PortError> {
        debug!("inserting tenant");

        let row = sqlx::query_as::<_, TenantRow>(&format!(
            "INSERT INTO tenants (name, phone, email, identity_card) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {TENANT_COLUMNS}"
        ))
        .bind(tenant.name)
        .bind(tenant.phone)
        .bind(tenant.email)
        .bind(tenant.identity_card)
        .fetch_one(&self.pool)
        .await
        .map_err(db_to_port)?;

        Ok(row.into())
    }

    #[instrument(skip(self, patch), fields(tenant_id = %id))]
    async fn update_tenant(&self, id: TenantId, patch: TenantPatch) -> Result<Tenant, PortError> {
        let row = sqlx::query_as::<_, TenantRow>(&format!(
            "UPDATE tenants SET \
             name = COALESCE($2, name), \
             phone = COALESCE($3, phone), \
             email = COALESCE($4, email), \
             identity_card = COALESCE($5, identity_card) \
             WHERE id = $1 \
             RETURNING {TENANT_COLUMNS}"
        ))
        .bind(id.value())
        .bind(patch.name)
        .bind(patch.phone)
        .bind(patch.email)
        .bind(patch.identity_card)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Tenant::from)
            .ok_or_else(|| PortError::not_found("Tenant", id))
    }

    #[instrument(skip(self), fields(tenant_id = %id))]
    async fn delete_tenant(&self, id: TenantId) -> Result<Tenant, PortError> {
        debug!("deleting tenant");

        let row = sqlx::query_as::<_, TenantRow>(&format!(
            "DELETE FROM tenants WHERE id = $1 RETURNING {TENANT_COLUMNS}"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Tenant::from)
            .ok_or_else(|| PortError::not_found("Tenant", id))
    }

    #[instrument(skip(self))]
    async fn list_leases(&self) -> Result<Vec<LeaseWithParties>, PortError> {
        let rows = sqlx::query_as::<_, LeaseWithPartiesRow>(&format!(
            "{LEASE_WITH_PARTIES_QUERY} ORDER BY l.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_to_port)?;

        Ok(rows.into_iter().map(LeaseWithParties::from).collect())
    }

    #[instrument(skip(self), fields(lease_id = %id))]
    async fn find_lease(&self, id: LeaseId) -> Result<LeaseWithParties, PortError> {
        let row = sqlx::query_as::<_, LeaseWithPartiesRow>(&format!(
            "{LEASE_WITH_PARTIES_QUERY} WHERE l.id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(LeaseWithParties::from)
            .ok_or_else(|| PortError::not_found("Lease", id))
    }

    #[instrument(skip(self, lease), fields(unit_id = %lease.unit_id, tenant_id = %lease.tenant_id))]
    async fn insert_lease(&self, lease: NewLease) -> Result<Lease, PortError> {
        debug!("inserting lease");

        let row = sqlx::query_as::<_, LeaseRow>(&format!(
            "INSERT INTO leases \
             (unit_id, tenant_id, start_date, end_date, deposit, rent_price, \
              occupant_count, active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {LEASE_COLUMNS}"
        ))
        .bind(lease.unit_id.value())
        .bind(lease.tenant_id.value())
        .bind(lease.start_date)
        .bind(lease.end_date)
        .bind(lease.deposit.map(Decimal::from))
        .bind(lease.rent_price.map(Decimal::from))
        .bind(lease.occupant_count.unwrap_or(1))
        .bind(lease.active.unwrap_or(true))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::ForeignKeyViolation(msg) => PortError::validation(msg),
            other => other.into(),
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self, patch), fields(lease_id = %id))]
    async fn update_lease(&self, id: LeaseId, patch: LeasePatch) -> Result<Lease, PortError> {
        let row = sqlx::query_as::<_, LeaseRow>(&format!(
            "UPDATE leases SET \
             unit_id = COALESCE($2, unit_id), \
             tenant_id = COALESCE($3, tenant_id), \
             start_date = COALESCE($4, start_date), \
             end_date = COALESCE($5, end_date), \
             deposit = COALESCE($6, deposit), \
             rent_price = COALESCE($7, rent_price), \
             occupant_count = COALESCE($8, occupant_count), \
             active = COALESCE($9, active) \
             WHERE id = $1 \
             RETURNING {LEASE_COLUMNS}"
        ))
        .bind(id.value())
        .bind(patch.unit_id.map(|u| u.value()))
        .bind(patch.tenant_id.map(|t| t.value()))
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.deposit.map(Decimal::from))
        .bind(patch.rent_price.map(Decimal::from))
        .bind(patch.occupant_count)
        .bind(patch.active)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Lease::from)
            .ok_or_else(|| PortError::not_found("Lease", id))
    }

    #[instrument(skip(self), fields(lease_id = %id))]
    async fn delete_lease(&self, id: LeaseId) -> Result<Lease, PortError> {
        debug!("deleting lease");

        let row = sqlx::query_as::<_, LeaseRow>(&format!(
            "DELETE FROM leases WHERE id = $1 RETURNING {LEASE_COLUMNS}"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(Lease::from)
            .ok_or_else(|| PortError::not_found("Lease", id))
    }
}

/// Converts a SQLx error to a port error via the database taxonomy
fn db_to_port(e: sqlx::Error) -> PortError {
    DatabaseError::from(e).into()
}
