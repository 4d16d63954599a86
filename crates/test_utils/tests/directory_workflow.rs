//! Cross-crate property directory workflows

use core_kernel::{LeaseId, Money, TenantId};
use domain_property::{
    DirectoryError, DirectoryService, LeasePatch, NewProperty, NewUnit, TenantPatch, UnitPatch,
};
use test_utils::{sample_lease, sample_property, sample_tenant, sample_unit, InMemoryStore};

fn directory() -> DirectoryService<InMemoryStore> {
    DirectoryService::new(InMemoryStore::new())
}

#[tokio::test]
async fn property_codes_are_unique() {
    let directory = directory();

    directory.create_property(sample_property()).await.unwrap();
    let err = directory
        .create_property(NewProperty::new("K10", "Another building"))
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::DuplicateCode(code) if code == "K10"));
}

#[tokio::test]
async fn unit_names_are_unique_within_a_property_only() {
    let directory = directory();

    let first = directory.create_property(sample_property()).await.unwrap();
    let second = directory
        .create_property(NewProperty::new("TD1", "Tay Dang 1"))
        .await
        .unwrap();

    directory.create_unit(sample_unit(first.id)).await.unwrap();

    // Same name in the same building collides.
    let err = directory
        .create_unit(NewUnit::new(first.id, "101"))
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::DuplicateUnitName { name, .. } if name == "101"));

    // Same name in another building is fine.
    assert!(directory.create_unit(NewUnit::new(second.id, "101")).await.is_ok());
}

#[tokio::test]
async fn unit_listing_filters_by_property() {
    let directory = directory();

    let first = directory.create_property(sample_property()).await.unwrap();
    let second = directory
        .create_property(NewProperty::new("TD1", "Tay Dang 1"))
        .await
        .unwrap();

    directory.create_unit(sample_unit(first.id)).await.unwrap();
    directory.create_unit(NewUnit::new(first.id, "102")).await.unwrap();
    directory.create_unit(NewUnit::new(second.id, "T01")).await.unwrap();

    assert_eq!(directory.list_units(None).await.unwrap().len(), 3);
    assert_eq!(directory.list_units(Some(first.id)).await.unwrap().len(), 2);
    assert_eq!(directory.list_units(Some(second.id)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn unit_patch_only_touches_supplied_fields() {
    let directory = directory();
    let property = directory.create_property(sample_property()).await.unwrap();
    let unit = directory.create_unit(sample_unit(property.id)).await.unwrap();

    let patch = UnitPatch {
        base_price: Some(Money::from_units(5_000_000)),
        ..Default::default()
    };
    let updated = directory.update_unit(unit.id, patch).await.unwrap();

    assert_eq!(updated.base_price, Some(Money::from_units(5_000_000)));
    assert_eq!(updated.name, unit.name);
    assert_eq!(updated.floor, unit.floor);
}

#[tokio::test]
async fn lease_lifecycle_with_joined_reads() {
    let directory = directory();
    let property = directory.create_property(sample_property()).await.unwrap();
    let unit = directory.create_unit(sample_unit(property.id)).await.unwrap();
    let tenant = directory.create_tenant(sample_tenant()).await.unwrap();

    let lease = directory
        .create_lease(sample_lease(unit.id, tenant.id))
        .await
        .unwrap();
    assert_eq!(lease.occupant_count, 2);
    assert!(lease.active);

    // Joined read carries both parties.
    let detail = directory.get_lease(lease.id).await.unwrap();
    assert_eq!(detail.tenant.as_ref().map(|t| t.id), Some(tenant.id));
    assert_eq!(detail.unit.as_ref().map(|u| u.id), Some(unit.id));

    // Deactivate through a patch.
    let patch = LeasePatch {
        active: Some(false),
        ..Default::default()
    };
    let ended = directory.update_lease(lease.id, patch).await.unwrap();
    assert!(!ended.active);

    // A tenant under lease cannot be removed; after the lease goes, they can.
    let err = directory.remove_tenant(tenant.id).await.unwrap_err();
    assert!(matches!(err, DirectoryError::StillReferenced(_)));

    directory.remove_lease(lease.id).await.unwrap();
    assert!(directory.remove_tenant(tenant.id).await.is_ok());
}

#[tokio::test]
async fn lease_requires_existing_parties() {
    let directory = directory();
    let property = directory.create_property(sample_property()).await.unwrap();
    let unit = directory.create_unit(sample_unit(property.id)).await.unwrap();

    let err = directory
        .create_lease(sample_lease(unit.id, TenantId::new(777)))
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::InvalidReference(_)));
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let directory = directory();

    assert!(matches!(
        directory.get_lease(LeaseId::new(1)).await.unwrap_err(),
        DirectoryError::LeaseNotFound(_)
    ));
    assert!(matches!(
        directory
            .update_tenant(TenantId::new(1), TenantPatch::default())
            .await
            .unwrap_err(),
        DirectoryError::TenantNotFound(_)
    ));
}
