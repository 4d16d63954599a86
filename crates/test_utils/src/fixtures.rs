//! Pre-built test data for common entities

use chrono::NaiveDate;

use core_kernel::{Money, PropertyId, TenantId, UnitId};
use domain_billing::{BillItemType, NewBillItem};
use domain_property::{NewLease, NewProperty, NewTenant, NewUnit};

/// A small building with utility provider ids
pub fn sample_property() -> NewProperty {
    NewProperty::new("K10", "Kim Ma 10")
        .with_address("10 Kim Ma, Ha Noi")
        .with_utility_ids("EVN-0042", "HAWACO-0815")
}

/// A ground-floor unit in the given property
pub fn sample_unit(property_id: PropertyId) -> NewUnit {
    NewUnit::new(property_id, "101")
        .with_floor(1)
        .with_base_price(Money::from_units(4_500_000))
}

/// A tenant with full contact details
pub fn sample_tenant() -> NewTenant {
    NewTenant::new("Nguyen Van A")
        .with_phone("0912345678")
        .with_email("nva@example.com")
        .with_identity_card("012345678901")
}

/// A one-year lease over the given unit and tenant
pub fn sample_lease(unit_id: UnitId, tenant_id: TenantId) -> NewLease {
    NewLease::new(
        unit_id,
        tenant_id,
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date"),
    )
    .with_deposit(Money::from_units(9_000_000))
    .with_rent_price(Money::from_units(4_500_000))
    .with_occupant_count(2)
}

/// A monthly parking charge
pub fn parking_item() -> NewBillItem {
    NewBillItem::new(BillItemType::Parking, Money::from_units(100_000))
        .with_description("motorbike parking")
}
