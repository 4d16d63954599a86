//! Cross-crate billing workflows
//!
//! Exercises the billing service against the in-memory store, with the
//! directory service providing the units the bills hang off.

use core_kernel::{BillId, Money, UnitId};
use domain_billing::{charges, BillItemType, BillPatch, BillStatus, BillingError, BillingService};
use domain_property::{DirectoryError, DirectoryService, NewUnit};
use test_utils::{parking_item, sample_property, sample_unit, BillBuilder, InMemoryStore};

struct World {
    billing: BillingService<InMemoryStore>,
    directory: DirectoryService<InMemoryStore>,
}

/// One store backing both services, as one database does in production
fn world() -> World {
    let store = InMemoryStore::new();
    World {
        billing: BillingService::new(store.clone()),
        directory: DirectoryService::new(store),
    }
}

async fn provisioned_unit(world: &World) -> UnitId {
    let property = world
        .directory
        .create_property(sample_property())
        .await
        .unwrap();
    let unit = world
        .directory
        .create_unit(sample_unit(property.id))
        .await
        .unwrap();
    unit.id
}

#[tokio::test]
async fn full_monthly_billing_cycle() {
    let world = world();
    let unit_id = provisioned_unit(&world).await;

    // Raise January's bill with both metered components.
    let bill = world
        .billing
        .create_bill(
            BillBuilder::new()
                .unit(unit_id)
                .cycle(1, 2024)
                .electric(100, 200, 3500)
                .water(10, 25_000)
                .total(5_600_000)
                .build(),
        )
        .await
        .unwrap();

    assert_eq!(bill.status(), BillStatus::Unpaid);
    assert_eq!(bill.paid_amount, Money::zero());

    // The metered components price out as expected.
    let metered = charges::metered_total(&bill).unwrap();
    assert_eq!(metered, Money::from_units(350_000 + 250_000));

    // Fresh bills have no items.
    assert!(world.billing.list_items(bill.id).await.unwrap().is_empty());

    // Attach a parking charge; it echoes the parent bill.
    let item = world.billing.add_item(bill.id, parking_item()).await.unwrap();
    assert_eq!(item.bill_id, bill.id);
    assert_eq!(item.item_type, BillItemType::Parking);

    let items = world.billing.list_items(bill.id).await.unwrap();
    assert_eq!(items.len(), 1);

    // Record a partial payment, then settle, then correct downward.
    let partial = world
        .billing
        .amend_bill(bill.id, BillPatch::payment(Money::from_units(3_000_000)))
        .await
        .unwrap();
    assert_eq!(partial.status(), BillStatus::Partial);
    assert_eq!(partial.balance_due(), Money::from_units(2_600_000));

    let settled = world
        .billing
        .amend_bill(bill.id, BillPatch::payment(Money::from_units(5_600_000)))
        .await
        .unwrap();
    assert_eq!(settled.status(), BillStatus::Paid);

    let reopened = world
        .billing
        .amend_bill(bill.id, BillPatch::payment(Money::from_units(500_000)))
        .await
        .unwrap();
    assert_eq!(reopened.status(), BillStatus::Partial);
}

#[tokio::test]
async fn one_bill_per_unit_per_cycle() {
    let world = world();
    let unit_id = provisioned_unit(&world).await;

    world
        .billing
        .create_bill(BillBuilder::new().unit(unit_id).cycle(1, 2024).build())
        .await
        .unwrap();

    // Same cycle again: conflict, not overwrite.
    let err = world
        .billing
        .create_bill(BillBuilder::new().unit(unit_id).cycle(1, 2024).total(1).build())
        .await
        .unwrap_err();
    assert!(matches!(err, BillingError::DuplicateCycle { month: 1, year: 2024, .. }));

    // The original bill is untouched.
    let bills = world.billing.list_bills().await.unwrap();
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].bill.total_amount, Money::from_units(5_000_000));

    // A different month is a different cycle.
    assert!(world
        .billing
        .create_bill(BillBuilder::new().unit(unit_id).cycle(2, 2024).build())
        .await
        .is_ok());
}

#[tokio::test]
async fn amending_onto_a_taken_cycle_is_rejected() {
    let world = world();
    let unit_id = provisioned_unit(&world).await;

    world
        .billing
        .create_bill(BillBuilder::new().unit(unit_id).cycle(1, 2024).build())
        .await
        .unwrap();
    let february = world
        .billing
        .create_bill(BillBuilder::new().unit(unit_id).cycle(2, 2024).build())
        .await
        .unwrap();

    let patch = BillPatch {
        month: Some(1),
        ..Default::default()
    };
    let err = world.billing.amend_bill(february.id, patch).await.unwrap_err();
    assert!(matches!(err, BillingError::Store(_)));
}

#[tokio::test]
async fn bill_for_unknown_unit_is_rejected() {
    let world = world();

    let err = world
        .billing
        .create_bill(BillBuilder::new().unit(UnitId::new(9999)).build())
        .await
        .unwrap_err();

    assert!(matches!(err, BillingError::InvalidReference(_)));
}

#[tokio::test]
async fn bills_survive_their_unit() {
    let world = world();
    let property = world
        .directory
        .create_property(sample_property())
        .await
        .unwrap();
    let billed = world
        .directory
        .create_unit(sample_unit(property.id))
        .await
        .unwrap();
    let vacant = world
        .directory
        .create_unit(NewUnit::new(property.id, "102"))
        .await
        .unwrap();

    world
        .billing
        .create_bill(BillBuilder::new().unit(billed.id).build())
        .await
        .unwrap();

    // A unit with bills cannot be deleted out from under them.
    let err = world.directory.remove_unit(billed.id).await.unwrap_err();
    assert!(matches!(err, DirectoryError::StillReferenced(_)));

    // An unreferenced unit can.
    assert!(world.directory.remove_unit(vacant.id).await.is_ok());

    // The bill listing still joins its unit.
    let bills = world.billing.list_bills().await.unwrap();
    assert_eq!(bills.len(), 1);
    assert!(bills[0].unit.is_some());
}

#[tokio::test]
async fn item_operations_against_missing_bills() {
    let world = world();

    let err = world
        .billing
        .add_item(BillId::new(9999), parking_item())
        .await
        .unwrap_err();
    assert!(matches!(err, BillingError::BillNotFound(_)));

    let err = world.billing.list_items(BillId::new(9999)).await.unwrap_err();
    assert!(matches!(err, BillingError::BillNotFound(_)));
}

#[tokio::test]
async fn listing_is_stable_and_ordered_by_id() {
    let world = world();
    let unit_id = provisioned_unit(&world).await;

    for month in 1..=6 {
        world
            .billing
            .create_bill(BillBuilder::new().unit(unit_id).cycle(month, 2024).build())
            .await
            .unwrap();
    }

    let first = world.billing.list_bills().await.unwrap();
    let second = world.billing.list_bills().await.unwrap();

    let ids: Vec<_> = first.iter().map(|b| b.bill.id).collect();
    let ids_again: Vec<_> = second.iter().map(|b| b.bill.id).collect();

    assert_eq!(ids, ids_again);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}
