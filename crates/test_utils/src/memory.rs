//! In-memory store doubles
//!
//! One shared state backs both ports, the way one database backs both
//! adapters in production. The maps enforce the same constraints the
//! PostgreSQL schema does: unique property codes, unique (property, name)
//! unit pairs, unique (unit, month, year) billing cycles, and referential
//! integrity on inserts and deletes.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{
    BillId, BillItemId, DomainPort, LeaseId, Money, PortError, PropertyId, TenantId, UnitId,
};
use domain_billing::{
    BillItem, BillPatch, BillStore, BillWithUnit, MonthlyBill, NewBill, NewBillItem,
};
use domain_property::{
    DirectoryStore, Lease, LeasePatch, LeaseWithParties, NewLease, NewProperty, NewTenant,
    NewUnit, Property, Tenant, TenantPatch, Unit, UnitPatch,
};

/// In-memory implementation of `BillStore` and `DirectoryStore`
///
/// Clones share state, so one instance can back several services in a
/// test the way one pool backs several adapters.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    properties: BTreeMap<i64, Property>,
    units: BTreeMap<i64, Unit>,
    tenants: BTreeMap<i64, Tenant>,
    leases: BTreeMap<i64, Lease>,
    bills: BTreeMap<i64, MonthlyBill>,
    items: BTreeMap<i64, BillItem>,
    next_property: i64,
    next_unit: i64,
    next_tenant: i64,
    next_lease: i64,
    next_bill: i64,
    next_item: i64,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("store mutex poisoned")
    }
}

impl StoreState {
    fn cycle_taken(&self, unit_id: UnitId, month: i32, year: i32, except: Option<BillId>) -> bool {
        self.bills.values().any(|bill| {
            Some(bill.id) != except
                && bill.unit_id == unit_id
                && bill.month == month
                && bill.year == year
        })
    }

    fn unit_name_taken(&self, property_id: PropertyId, name: &str, except: Option<UnitId>) -> bool {
        self.units.values().any(|unit| {
            Some(unit.id) != except && unit.property_id == property_id && unit.name == name
        })
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl BillStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<BillWithUnit>, PortError> {
        let state = self.lock();
        Ok(state
            .bills
            .values()
            .map(|bill| BillWithUnit {
                bill: bill.clone(),
                unit: state.units.get(&bill.unit_id.value()).cloned(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: BillId) -> Result<BillWithUnit, PortError> {
        let state = self.lock();
        state
            .bills
            .get(&id.value())
            .map(|bill| BillWithUnit {
                bill: bill.clone(),
                unit: state.units.get(&bill.unit_id.value()).cloned(),
            })
            .ok_or_else(|| PortError::not_found("Bill", id))
    }

    async fn find_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, PortError> {
        let state = self.lock();
        if !state.bills.contains_key(&bill_id.value()) {
            return Err(PortError::not_found("Bill", bill_id));
        }
        Ok(state
            .items
            .values()
            .filter(|item| item.bill_id == bill_id)
            .cloned()
            .collect())
    }

    async fn insert_bill(&self, bill: NewBill) -> Result<MonthlyBill, PortError> {
        let mut state = self.lock();

        if !state.units.contains_key(&bill.unit_id.value()) {
            return Err(PortError::validation(format!(
                "unit {} does not exist",
                bill.unit_id
            )));
        }
        if state.cycle_taken(bill.unit_id, bill.month, bill.year, None) {
            return Err(PortError::conflict("duplicate billing cycle"));
        }

        state.next_bill += 1;
        let created = MonthlyBill {
            id: BillId::new(state.next_bill),
            unit_id: bill.unit_id,
            month: bill.month,
            year: bill.year,
            electric_start: bill.electric_start,
            electric_end: bill.electric_end,
            electric_rate: bill.electric_rate,
            water_usage: bill.water_usage,
            water_rate: bill.water_rate,
            total_amount: bill.total_amount,
            paid_amount: bill.paid_amount.unwrap_or_else(Money::zero),
            note: bill.note,
            created_at: Utc::now(),
        };
        state.bills.insert(created.id.value(), created.clone());
        Ok(created)
    }

    async fn update_bill(&self, id: BillId, patch: BillPatch) -> Result<MonthlyBill, PortError> {
        let mut state = self.lock();

        let current = state
            .bills
            .get(&id.value())
            .cloned()
            .ok_or_else(|| PortError::not_found("Bill", id))?;

        let unit_id = patch.unit_id.unwrap_or(current.unit_id);
        let month = patch.month.unwrap_or(current.month);
        let year = patch.year.unwrap_or(current.year);
        if state.cycle_taken(unit_id, month, year, Some(id)) {
            return Err(PortError::conflict("duplicate billing cycle"));
        }

        let bill = state.bills.get_mut(&id.value()).expect("checked above");
        bill.unit_id = unit_id;
        bill.month = month;
        bill.year = year;
        if let Some(start) = patch.electric_start {
            bill.electric_start = Some(start);
        }
        if let Some(end) = patch.electric_end {
            bill.electric_end = Some(end);
        }
        if let Some(rate) = patch.electric_rate {
            bill.electric_rate = Some(rate);
        }
        if let Some(usage) = patch.water_usage {
            bill.water_usage = Some(usage);
        }
        if let Some(rate) = patch.water_rate {
            bill.water_rate = Some(rate);
        }
        if let Some(total) = patch.total_amount {
            bill.total_amount = total;
        }
        if let Some(paid) = patch.paid_amount {
            bill.paid_amount = paid;
        }
        if let Some(note) = patch.note {
            bill.note = Some(note);
        }

        Ok(bill.clone())
    }

    async fn insert_item(
        &self,
        bill_id: BillId,
        item: NewBillItem,
    ) -> Result<BillItem, PortError> {
        let mut state = self.lock();

        if !state.bills.contains_key(&bill_id.value()) {
            return Err(PortError::not_found("Bill", bill_id));
        }

        state.next_item += 1;
        let created = BillItem {
            id: BillItemId::new(state.next_item),
            bill_id,
            item_type: item.item_type,
            description: item.description,
            amount: item.amount,
        };
        state.items.insert(created.id.value(), created.clone());
        Ok(created)
    }
}

#[async_trait]
impl DirectoryStore for InMemoryStore {
    async fn list_properties(&self) -> Result<Vec<Property>, PortError> {
        Ok(self.lock().properties.values().cloned().collect())
    }

    async fn insert_property(&self, property: NewProperty) -> Result<Property, PortError> {
        let mut state = self.lock();

        if state.properties.values().any(|p| p.code == property.code) {
            return Err(PortError::conflict("duplicate property code"));
        }

        state.next_property += 1;
        let created = Property {
            id: PropertyId::new(state.next_property),
            code: property.code,
            name: property.name,
            address: property.address,
            electric_id: property.electric_id,
            water_id: property.water_id,
        };
        state.properties.insert(created.id.value(), created.clone());
        Ok(created)
    }

    async fn list_units(&self, property_id: Option<PropertyId>) -> Result<Vec<Unit>, PortError> {
        let state = self.lock();
        Ok(state
            .units
            .values()
            .filter(|unit| property_id.map_or(true, |p| unit.property_id == p))
            .cloned()
            .collect())
    }

    async fn find_unit(&self, id: UnitId) -> Result<Unit, PortError> {
        self.lock()
            .units
            .get(&id.value())
            .cloned()
            .ok_or_else(|| PortError::not_found("Unit", id))
    }

    async fn insert_unit(&self, unit: NewUnit) -> Result<Unit, PortError> {
        let mut state = self.lock();

        if !state.properties.contains_key(&unit.property_id.value()) {
            return Err(PortError::validation(format!(
                "property {} does not exist",
                unit.property_id
            )));
        }
        if state.unit_name_taken(unit.property_id, &unit.name, None) {
            return Err(PortError::conflict("duplicate unit name in property"));
        }

        state.next_unit += 1;
        let created = Unit {
            id: UnitId::new(state.next_unit),
            property_id: unit.property_id,
            name: unit.name,
            floor: unit.floor,
            base_price: unit.base_price,
        };
        state.units.insert(created.id.value(), created.clone());
        Ok(created)
    }

    async fn update_unit(&self, id: UnitId, patch: UnitPatch) -> Result<Unit, PortError> {
        let mut state = self.lock();

        let current = state
            .units
            .get(&id.value())
            .cloned()
            .ok_or_else(|| PortError::not_found("Unit", id))?;

        let property_id = patch.property_id.unwrap_or(current.property_id);
        let name = patch.name.clone().unwrap_or_else(|| current.name.clone());
        if state.unit_name_taken(property_id, &name, Some(id)) {
            return Err(PortError::conflict("duplicate unit name in property"));
        }

        let unit = state.units.get_mut(&id.value()).expect("checked above");
        unit.property_id = property_id;
        unit.name = name;
        if let Some(floor) = patch.floor {
            unit.floor = Some(floor);
        }
        if let Some(base_price) = patch.base_price {
            unit.base_price = Some(base_price);
        }

        Ok(unit.clone())
    }

    async fn delete_unit(&self, id: UnitId) -> Result<Unit, PortError> {
        let mut state = self.lock();

        if !state.units.contains_key(&id.value()) {
            return Err(PortError::not_found("Unit", id));
        }
        let referenced = state.leases.values().any(|l| l.unit_id == id)
            || state.bills.values().any(|b| b.unit_id == id);
        if referenced {
            return Err(PortError::conflict("unit is still referenced"));
        }

        Ok(state.units.remove(&id.value()).expect("checked above"))
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, PortError> {
        Ok(self.lock().tenants.values().cloned().collect())
    }

    async fn find_tenant(&self, id: TenantId) -> Result<Tenant, PortError> {
        self.lock()
            .tenants
            .get(&id.value())
            .cloned()
            .ok_or_else(|| PortError::not_found("Tenant", id))
    }

    async fn insert_tenant(&self, tenant: NewTenant) -> Result<Tenant, PortError> {
        let mut state = self.lock();

        state.next_tenant += 1;
        let created = Tenant {
            id: TenantId::new(state.next_tenant),
            name: tenant.name,
            phone: tenant.phone,
            email: tenant.email,
            identity_card: tenant.identity_card,
        };
        state.tenants.insert(created.id.value(), created.clone());
        Ok(created)
    }

    async fn update_tenant(&self, id: TenantId, patch: TenantPatch) -> Result<Tenant, PortError> {
        let mut state = self.lock();

        let tenant = state
            .tenants
            .get_mut(&id.value())
            .ok_or_else(|| PortError::not_found("Tenant", id))?;

        if let Some(name) = patch.name {
            tenant.name = name;
        }
        if let Some(phone) = patch.phone {
            tenant.phone = Some(phone);
        }
        if let Some(email) = patch.email {
            tenant.email = Some(email);
        }
        if let Some(identity_card) = patch.identity_card {
            tenant.identity_card = Some(identity_card);
        }

        Ok(tenant.clone())
    }

    async fn delete_tenant(&self, id: TenantId) -> Result<Tenant, PortError> {
        let mut state = self.lock();

        if !state.tenants.contains_key(&id.value()) {
            return Err(PortError::not_found("Tenant", id));
        }
        if state.leases.values().any(|l| l.tenant_id == id) {
            return Err(PortError::conflict("tenant is still referenced"));
        }

        Ok(state.tenants.remove(&id.value()).expect("checked above"))
    }

    async fn list_leases(&self) -> Result<Vec<LeaseWithParties>, PortError> {
        let state = self.lock();
        Ok(state
            .leases
            .values()
            .map(|lease| LeaseWithParties {
                lease: lease.clone(),
                tenant: state.tenants.get(&lease.tenant_id.value()).cloned(),
                unit: state.units.get(&lease.unit_id.value()).cloned(),
            })
            .collect())
    }

    async fn find_lease(&self, id: LeaseId) -> Result<LeaseWithParties, PortError> {
        let state = self.lock();
        state
            .leases
            .get(&id.value())
            .map(|lease| LeaseWithParties {
                lease: lease.clone(),
                tenant: state.tenants.get(&lease.tenant_id.value()).cloned(),
                unit: state.units.get(&lease.unit_id.value()).cloned(),
            })
            .ok_or_else(|| PortError::not_found("Lease", id))
    }

    async fn insert_lease(&self, lease: NewLease) -> Result<Lease, PortError> {
        let mut state = self.lock();

        if !state.units.contains_key(&lease.unit_id.value()) {
            return Err(PortError::validation(format!(
                "unit {} does not exist",
                lease.unit_id
            )));
        }
        if !state.tenants.contains_key(&lease.tenant_id.value()) {
            return Err(PortError::validation(format!(
                "tenant {} does not exist",
                lease.tenant_id
            )));
        }

        state.next_lease += 1;
        let created = Lease {
            id: LeaseId::new(state.next_lease),
            unit_id: lease.unit_id,
            tenant_id: lease.tenant_id,
            start_date: lease.start_date,
            end_date: lease.end_date,
            deposit: lease.deposit,
            rent_price: lease.rent_price,
            occupant_count: lease.occupant_count.unwrap_or(1),
            active: lease.active.unwrap_or(true),
        };
        state.leases.insert(created.id.value(), created.clone());
        Ok(created)
    }

    async fn update_lease(&self, id: LeaseId, patch: LeasePatch) -> Result<Lease, PortError> {
        let mut state = self.lock();

        let lease = state
            .leases
            .get_mut(&id.value())
            .ok_or_else(|| PortError::not_found("Lease", id))?;

        if let Some(unit_id) = patch.unit_id {
            lease.unit_id = unit_id;
        }
        if let Some(tenant_id) = patch.tenant_id {
            lease.tenant_id = tenant_id;
        }
        if let Some(start_date) = patch.start_date {
            lease.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            lease.end_date = end_date;
        }
        if let Some(deposit) = patch.deposit {
            lease.deposit = Some(deposit);
        }
        if let Some(rent_price) = patch.rent_price {
            lease.rent_price = Some(rent_price);
        }
        if let Some(occupant_count) = patch.occupant_count {
            lease.occupant_count = occupant_count;
        }
        if let Some(active) = patch.active {
            lease.active = active;
        }

        Ok(lease.clone())
    }

    async fn delete_lease(&self, id: LeaseId) -> Result<Lease, PortError> {
        let mut state = self.lock();

        state
            .leases
            .remove(&id.value())
            .ok_or_else(|| PortError::not_found("Lease", id))
    }
}
