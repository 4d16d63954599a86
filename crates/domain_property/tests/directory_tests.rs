//! Tests for the property directory domain types

use chrono::NaiveDate;
use core_kernel::{LeaseId, Money, PropertyId, TenantId, UnitId};
use domain_property::{
    Lease, LeasePatch, LeaseWithParties, NewLease, NewProperty, NewTenant, NewUnit, TenantPatch,
    UnitPatch,
};

#[test]
fn new_property_builder_fills_optionals() {
    let property = NewProperty::new("K10", "Kim Ma 10")
        .with_address("10 Kim Ma, Ha Noi")
        .with_utility_ids("EVN-001", "HAWACO-77");

    assert_eq!(property.code, "K10");
    assert_eq!(property.address.as_deref(), Some("10 Kim Ma, Ha Noi"));
    assert_eq!(property.electric_id.as_deref(), Some("EVN-001"));
    assert_eq!(property.water_id.as_deref(), Some("HAWACO-77"));
}

#[test]
fn new_unit_defaults_are_absent() {
    let unit = NewUnit::new(PropertyId::new(1), "101");

    assert!(unit.floor.is_none());
    assert!(unit.base_price.is_none());
}

#[test]
fn new_unit_builder_sets_price_and_floor() {
    let unit = NewUnit::new(PropertyId::new(1), "T01")
        .with_floor(3)
        .with_base_price(Money::from_units(4_500_000));

    assert_eq!(unit.floor, Some(3));
    assert_eq!(unit.base_price, Some(Money::from_units(4_500_000)));
}

#[test]
fn new_tenant_builder() {
    let tenant = NewTenant::new("Nguyen Van A")
        .with_phone("0912345678")
        .with_email("a@example.com")
        .with_identity_card("0123456789");

    assert_eq!(tenant.name, "Nguyen Van A");
    assert_eq!(tenant.phone.as_deref(), Some("0912345678"));
}

#[test]
fn new_lease_builder_defaults() {
    let lease = NewLease::new(
        UnitId::new(1),
        TenantId::new(2),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    );

    assert!(lease.deposit.is_none());
    assert!(lease.occupant_count.is_none());
    assert!(lease.active.is_none());
}

#[test]
fn empty_patches_report_empty() {
    assert!(UnitPatch::default().is_empty());
    assert!(TenantPatch::default().is_empty());
    assert!(LeasePatch::default().is_empty());

    let patch = UnitPatch {
        name: Some("102".to_string()),
        ..Default::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn unit_patch_deserializes_missing_fields_as_absent() {
    let patch: UnitPatch = serde_json::from_str(r#"{"floor": 2}"#).unwrap();

    assert_eq!(patch.floor, Some(2));
    assert!(patch.name.is_none());
    assert!(patch.property_id.is_none());
    assert!(patch.base_price.is_none());
}

#[test]
fn lease_with_missing_parties_serializes_nulls() {
    let joined = LeaseWithParties {
        lease: Lease {
            id: LeaseId::new(1),
            unit_id: UnitId::new(1),
            tenant_id: TenantId::new(1),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            deposit: None,
            rent_price: Some(Money::from_units(5_000_000)),
            occupant_count: 1,
            active: true,
        },
        tenant: None,
        unit: None,
    };

    let json = serde_json::to_value(&joined).unwrap();
    assert!(json["tenant"].is_null());
    assert!(json["unit"].is_null());
    assert_eq!(json["lease"]["rent_price"], "5000000");
}
