//! Leases
//!
//! A lease ties a tenant to a unit for a period of time. Listings join the
//! tenant and unit in, with left-join semantics so a lease still shows up
//! after its counterpart rows are gone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{LeaseId, Money, TenantId, UnitId};

use crate::tenant::Tenant;
use crate::unit::Unit;

/// A rental agreement between a tenant and a unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lease {
    /// Unique identifier
    pub id: LeaseId,
    /// Rented unit
    pub unit_id: UnitId,
    /// Renting tenant
    pub tenant_id: TenantId,
    /// First day of the lease
    pub start_date: NaiveDate,
    /// Last day of the lease
    pub end_date: NaiveDate,
    /// Security deposit
    pub deposit: Option<Money>,
    /// Agreed monthly rent
    pub rent_price: Option<Money>,
    /// Number of occupants
    pub occupant_count: i32,
    /// Whether the lease is currently in effect
    pub active: bool,
}

/// A lease joined with its tenant and unit
#[derive(Debug, Clone, Serialize)]
pub struct LeaseWithParties {
    pub lease: Lease,
    pub tenant: Option<Tenant>,
    pub unit: Option<Unit>,
}

/// Data for creating a new lease
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLease {
    pub unit_id: UnitId,
    pub tenant_id: TenantId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: Option<Money>,
    pub rent_price: Option<Money>,
    pub occupant_count: Option<i32>,
    pub active: Option<bool>,
}

impl NewLease {
    /// Creates a new lease record with the required fields
    pub fn new(
        unit_id: UnitId,
        tenant_id: TenantId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            unit_id,
            tenant_id,
            start_date,
            end_date,
            deposit: None,
            rent_price: None,
            occupant_count: None,
            active: None,
        }
    }

    /// Sets the security deposit
    pub fn with_deposit(mut self, deposit: Money) -> Self {
        self.deposit = Some(deposit);
        self
    }

    /// Sets the monthly rent
    pub fn with_rent_price(mut self, rent_price: Money) -> Self {
        self.rent_price = Some(rent_price);
        self
    }

    /// Sets the occupant count (defaults to 1)
    pub fn with_occupant_count(mut self, occupant_count: i32) -> Self {
        self.occupant_count = Some(occupant_count);
        self
    }
}

/// Partial update for a lease; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeasePatch {
    pub unit_id: Option<UnitId>,
    pub tenant_id: Option<TenantId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub deposit: Option<Money>,
    pub rent_price: Option<Money>,
    pub occupant_count: Option<i32>,
    pub active: Option<bool>,
}

impl LeasePatch {
    /// Returns true if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.unit_id.is_none()
            && self.tenant_id.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.deposit.is_none()
            && self.rent_price.is_none()
            && self.occupant_count.is_none()
            && self.active.is_none()
    }
}
