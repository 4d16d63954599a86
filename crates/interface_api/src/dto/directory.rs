//! Property directory DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{LeaseId, Money, PropertyId, TenantId, UnitId};
use domain_property::{
    Lease, LeasePatch, LeaseWithParties, NewLease, NewProperty, NewTenant, NewUnit, Property,
    Tenant, TenantPatch, Unit, UnitPatch,
};

// Properties

#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub electric_id: Option<String>,
    pub water_id: Option<String>,
}

impl From<CreatePropertyRequest> for NewProperty {
    fn from(req: CreatePropertyRequest) -> Self {
        NewProperty {
            code: req.code,
            name: req.name,
            address: req.address,
            electric_id: req.electric_id,
            water_id: req.water_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PropertyResponse {
    pub id: PropertyId,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub electric_id: Option<String>,
    pub water_id: Option<String>,
}

impl From<Property> for PropertyResponse {
    fn from(property: Property) -> Self {
        PropertyResponse {
            id: property.id,
            code: property.code,
            name: property.name,
            address: property.address,
            electric_id: property.electric_id,
            water_id: property.water_id,
        }
    }
}

// Units

#[derive(Debug, Deserialize)]
pub struct CreateUnitRequest {
    pub property_id: PropertyId,
    pub name: String,
    pub floor: Option<i32>,
    pub base_price: Option<Money>,
}

impl From<CreateUnitRequest> for NewUnit {
    fn from(req: CreateUnitRequest) -> Self {
        NewUnit {
            property_id: req.property_id,
            name: req.name,
            floor: req.floor,
            base_price: req.base_price,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUnitRequest {
    pub property_id: Option<PropertyId>,
    pub name: Option<String>,
    pub floor: Option<i32>,
    pub base_price: Option<Money>,
}

impl From<UpdateUnitRequest> for UnitPatch {
    fn from(req: UpdateUnitRequest) -> Self {
        UnitPatch {
            property_id: req.property_id,
            name: req.name,
            floor: req.floor,
            base_price: req.base_price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitResponse {
    pub id: UnitId,
    pub property_id: PropertyId,
    pub name: String,
    pub floor: Option<i32>,
    pub base_price: Option<Money>,
}

impl From<Unit> for UnitResponse {
    fn from(unit: Unit) -> Self {
        UnitResponse {
            id: unit.id,
            property_id: unit.property_id,
            name: unit.name,
            floor: unit.floor,
            base_price: unit.base_price,
        }
    }
}

/// Filter for unit listings
#[derive(Debug, Default, Deserialize)]
pub struct UnitListQuery {
    pub property_id: Option<PropertyId>,
}

// Tenants

#[derive(Debug, Deserialize)]
pub struct CreateTenantRequest {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_card: Option<String>,
}

impl From<CreateTenantRequest> for NewTenant {
    fn from(req: CreateTenantRequest) -> Self {
        NewTenant {
            name: req.name,
            phone: req.phone,
            email: req.email,
            identity_card: req.identity_card,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTenantRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_card: Option<String>,
}

impl From<UpdateTenantRequest> for TenantPatch {
    fn from(req: UpdateTenantRequest) -> Self {
        TenantPatch {
            name: req.name,
            phone: req.phone,
            email: req.email,
            identity_card: req.identity_card,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TenantResponse {
    pub id: TenantId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_card: Option<String>,
}

impl From<Tenant> for TenantResponse {
    fn from(tenant: Tenant) -> Self {
        TenantResponse {
            id: tenant.id,
            name: tenant.name,
            phone: tenant.phone,
            email: tenant.email,
            identity_card: tenant.identity_card,
        }
    }
}

// Leases

#[derive(Debug, Deserialize)]
pub struct CreateLeaseRequest {
    pub unit_id: UnitId,
    pub tenant_id: TenantId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: Option<Money>,
    pub rent_price: Option<Money>,
    pub occupant_count: Option<i32>,
    pub active: Option<bool>,
}

impl From<CreateLeaseRequest> for NewLease {
    fn from(req: CreateLeaseRequest) -> Self {
        NewLease {
            unit_id: req.unit_id,
            tenant_id: req.tenant_id,
            start_date: req.start_date,
            end_date: req.end_date,
            deposit: req.deposit,
            rent_price: req.rent_price,
            occupant_count: req.occupant_count,
            active: req.active,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateLeaseRequest {
    pub unit_id: Option<UnitId>,
    pub tenant_id: Option<TenantId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub deposit: Option<Money>,
    pub rent_price: Option<Money>,
    pub occupant_count: Option<i32>,
    pub active: Option<bool>,
}

impl From<UpdateLeaseRequest> for LeasePatch {
    fn from(req: UpdateLeaseRequest) -> Self {
        LeasePatch {
            unit_id: req.unit_id,
            tenant_id: req.tenant_id,
            start_date: req.start_date,
            end_date: req.end_date,
            deposit: req.deposit,
            rent_price: req.rent_price,
            occupant_count: req.occupant_count,
            active: req.active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaseResponse {
    pub id: LeaseId,
    pub unit_id: UnitId,
    pub tenant_id: TenantId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: Option<Money>,
    pub rent_price: Option<Money>,
    pub occupant_count: i32,
    pub active: bool,
}

impl From<Lease> for LeaseResponse {
    fn from(lease: Lease) -> Self {
        LeaseResponse {
            id: lease.id,
            unit_id: lease.unit_id,
            tenant_id: lease.tenant_id,
            start_date: lease.start_date,
            end_date: lease.end_date,
            deposit: lease.deposit,
            rent_price: lease.rent_price,
            occupant_count: lease.occupant_count,
            active: lease.active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaseDetailResponse {
    pub lease: LeaseResponse,
    pub tenant: Option<TenantResponse>,
    pub unit: Option<UnitResponse>,
}

impl From<LeaseWithParties> for LeaseDetailResponse {
    fn from(joined: LeaseWithParties) -> Self {
        LeaseDetailResponse {
            lease: joined.lease.into(),
            tenant: joined.tenant.map(TenantResponse::from),
            unit: joined.unit.map(UnitResponse::from),
        }
    }
}
