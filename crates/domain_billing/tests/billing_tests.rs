//! Tests for the billing domain
//!
//! Service behavior is exercised against a small in-memory store; the
//! richer cross-crate workflows live in the test_utils crate.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{BillId, DomainPort, Money, PortError, UnitId};
use domain_billing::{
    BillItem, BillItemType, BillPatch, BillStatus, BillStore, BillWithUnit, BillingError,
    BillingService, MonthlyBill, NewBill, NewBillItem,
};

/// Minimal store double: bills and items in BTreeMaps, no unit join data
#[derive(Clone, Default)]
struct MapStore {
    state: Arc<Mutex<MapState>>,
}

#[derive(Default)]
struct MapState {
    bills: BTreeMap<i64, MonthlyBill>,
    items: BTreeMap<i64, BillItem>,
    next_bill: i64,
    next_item: i64,
}

impl DomainPort for MapStore {}

#[async_trait]
impl BillStore for MapStore {
    async fn find_all(&self) -> Result<Vec<BillWithUnit>, PortError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .bills
            .values()
            .map(|bill| BillWithUnit {
                bill: bill.clone(),
                unit: None,
            })
            .collect())
    }

    async fn find_by_id(&self, id: BillId) -> Result<BillWithUnit, PortError> {
        let state = self.state.lock().unwrap();
        state
            .bills
            .get(&id.value())
            .map(|bill| BillWithUnit {
                bill: bill.clone(),
                unit: None,
            })
            .ok_or_else(|| PortError::not_found("Bill", id))
    }

    async fn find_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, PortError> {
        let state = self.state.lock().unwrap();
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
        let mut state = self.state.lock().unwrap();
        let duplicate = state.bills.values().any(|existing| {
            existing.unit_id == bill.unit_id
                && existing.month == bill.month
                && existing.year == bill.year
        });
        if duplicate {
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
        let mut state = self.state.lock().unwrap();
        let bill = state
            .bills
            .get_mut(&id.value())
            .ok_or_else(|| PortError::not_found("Bill", id))?;

        if let Some(unit_id) = patch.unit_id {
            bill.unit_id = unit_id;
        }
        if let Some(month) = patch.month {
            bill.month = month;
        }
        if let Some(year) = patch.year {
            bill.year = year;
        }
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
        let mut state = self.state.lock().unwrap();
        if !state.bills.contains_key(&bill_id.value()) {
            return Err(PortError::not_found("Bill", bill_id));
        }

        state.next_item += 1;
        let created = BillItem {
            id: core_kernel::BillItemId::new(state.next_item),
            bill_id,
            item_type: item.item_type,
            description: item.description,
            amount: item.amount,
        };
        state.items.insert(created.id.value(), created.clone());
        Ok(created)
    }
}

fn service() -> BillingService<MapStore> {
    BillingService::new(MapStore::default())
}

fn simple_bill(unit: i64, month: i32, year: i32) -> NewBill {
    NewBill::new(UnitId::new(unit), month, year, Money::from_units(5_000_000))
}

#[tokio::test]
async fn create_and_fetch_bill() {
    let service = service();

    let created = service.create_bill(simple_bill(1, 1, 2024)).await.unwrap();
    let fetched = service.get_bill(created.id).await.unwrap();

    assert_eq!(fetched.bill.id, created.id);
    assert_eq!(fetched.bill.paid_amount, Money::zero());
    assert_eq!(fetched.bill.status(), BillStatus::Unpaid);
}

#[tokio::test]
async fn duplicate_cycle_is_a_conflict() {
    let service = service();

    service.create_bill(simple_bill(1, 1, 2024)).await.unwrap();
    let err = service.create_bill(simple_bill(1, 1, 2024)).await.unwrap_err();

    assert!(matches!(
        err,
        BillingError::DuplicateCycle { month: 1, year: 2024, .. }
    ));
}

#[tokio::test]
async fn same_cycle_for_another_unit_is_fine() {
    let service = service();

    service.create_bill(simple_bill(1, 1, 2024)).await.unwrap();
    assert!(service.create_bill(simple_bill(2, 1, 2024)).await.is_ok());
}

#[tokio::test]
async fn month_out_of_range_is_rejected() {
    let service = service();

    let err = service.create_bill(simple_bill(1, 13, 2024)).await.unwrap_err();
    assert!(matches!(err, BillingError::InvalidMonth(13)));

    let err = service.create_bill(simple_bill(1, 0, 2024)).await.unwrap_err();
    assert!(matches!(err, BillingError::InvalidMonth(0)));
}

#[tokio::test]
async fn backwards_meter_readings_are_rejected() {
    let service = service();

    let bill = simple_bill(1, 1, 2024).with_electric(200, 100, Money::from_units(3500));
    let err = service.create_bill(bill).await.unwrap_err();

    assert!(matches!(err, BillingError::InvalidMeterRange { start: 200, end: 100 }));
}

#[tokio::test]
async fn unknown_bill_is_not_found() {
    let service = service();

    let err = service.get_bill(BillId::new(9999)).await.unwrap_err();
    assert!(matches!(err, BillingError::BillNotFound(id) if id == BillId::new(9999)));
}

#[tokio::test]
async fn empty_patch_is_a_noop() {
    let service = service();

    let created = service
        .create_bill(
            simple_bill(1, 1, 2024)
                .with_electric(100, 200, Money::from_units(3500))
                .with_note("january"),
        )
        .await
        .unwrap();

    let amended = service.amend_bill(created.id, BillPatch::default()).await.unwrap();

    assert_eq!(amended.unit_id, created.unit_id);
    assert_eq!(amended.electric_start, created.electric_start);
    assert_eq!(amended.electric_end, created.electric_end);
    assert_eq!(amended.total_amount, created.total_amount);
    assert_eq!(amended.paid_amount, created.paid_amount);
    assert_eq!(amended.note, created.note);
}

#[tokio::test]
async fn recording_payments_walks_the_status_forward_and_back() {
    let service = service();
    let bill = service
        .create_bill(NewBill::new(UnitId::new(1), 1, 2024, Money::from_units(5_600_000)))
        .await
        .unwrap();
    assert_eq!(bill.status(), BillStatus::Unpaid);

    let partial = service
        .amend_bill(bill.id, BillPatch::payment(Money::from_units(3_000_000)))
        .await
        .unwrap();
    assert_eq!(partial.status(), BillStatus::Partial);

    let paid = service
        .amend_bill(bill.id, BillPatch::payment(Money::from_units(5_600_000)))
        .await
        .unwrap();
    assert_eq!(paid.status(), BillStatus::Paid);

    // A refund correction reopens the bill; paid is not terminal.
    let reopened = service
        .amend_bill(bill.id, BillPatch::payment(Money::from_units(1_000_000)))
        .await
        .unwrap();
    assert_eq!(reopened.status(), BillStatus::Partial);
}

#[tokio::test]
async fn amend_of_unknown_bill_is_not_found() {
    let service = service();

    let err = service
        .amend_bill(BillId::new(404), BillPatch::payment(Money::from_units(1)))
        .await
        .unwrap_err();

    assert!(matches!(err, BillingError::BillNotFound(_)));
}

#[tokio::test]
async fn fresh_bill_has_no_items() {
    let service = service();
    let bill = service.create_bill(simple_bill(1, 1, 2024)).await.unwrap();

    let items = service.list_items(bill.id).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn added_item_echoes_its_parent_bill() {
    let service = service();
    let bill = service.create_bill(simple_bill(1, 1, 2024)).await.unwrap();

    let item = service
        .add_item(
            bill.id,
            NewBillItem::new(BillItemType::Parking, Money::from_units(100_000)),
        )
        .await
        .unwrap();

    assert_eq!(item.bill_id, bill.id);

    let items = service.list_items(bill.id).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_type, BillItemType::Parking);
}

#[tokio::test]
async fn item_against_unknown_bill_is_not_found() {
    let service = service();

    let err = service
        .add_item(
            BillId::new(9999),
            NewBillItem::new(BillItemType::Wifi, Money::from_units(150_000)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, BillingError::BillNotFound(_)));
}

#[tokio::test]
async fn non_positive_item_amounts_are_rejected() {
    let service = service();
    let bill = service.create_bill(simple_bill(1, 1, 2024)).await.unwrap();

    let zero = service
        .add_item(bill.id, NewBillItem::new(BillItemType::Other, Money::zero()))
        .await
        .unwrap_err();
    assert!(matches!(zero, BillingError::InvalidAmount(_)));

    let negative = service
        .add_item(
            bill.id,
            NewBillItem::new(BillItemType::Other, Money::from_units(-5)),
        )
        .await
        .unwrap_err();
    assert!(matches!(negative, BillingError::InvalidAmount(_)));

    // Nothing was attached.
    assert!(service.list_items(bill.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_items_of_unknown_bill_is_not_found() {
    let service = service();

    let err = service.list_items(BillId::new(1)).await.unwrap_err();
    assert!(matches!(err, BillingError::BillNotFound(_)));
}
