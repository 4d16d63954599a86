//! Billing application service
//!
//! The lifecycle API over the `BillStore` port: validate the request,
//! derive or check charges, delegate to the store, and translate port
//! errors into typed billing errors.

use tracing::debug;

use core_kernel::{BillId, Money, PortError};

use crate::bill::{BillPatch, BillWithUnit, MonthlyBill, NewBill};
use crate::charges;
use crate::error::BillingError;
use crate::item::{BillItem, NewBillItem};
use crate::ports::BillStore;

/// Application service for the bill lifecycle
#[derive(Debug, Clone)]
pub struct BillingService<S> {
    store: S,
}

impl<S: BillStore> BillingService<S> {
    /// Creates a new billing service backed by the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every bill with its unit
    pub async fn list_bills(&self) -> Result<Vec<BillWithUnit>, BillingError> {
        self.store.find_all().await.map_err(BillingError::Store)
    }

    /// Fetches one bill with its unit
    pub async fn get_bill(&self, id: BillId) -> Result<BillWithUnit, BillingError> {
        self.store.find_by_id(id).await.map_err(|e| bill_error(e, id))
    }

    /// Raises a new bill for a cycle
    ///
    /// Validates the month, the meter readings, and the amounts before
    /// delegating. A second bill for the same (unit, month, year) cycle is
    /// a `DuplicateCycle` conflict.
    pub async fn create_bill(&self, bill: NewBill) -> Result<MonthlyBill, BillingError> {
        debug!(unit_id = %bill.unit_id, month = bill.month, year = bill.year, "raising bill");

        validate_month(bill.month)?;
        charges::electricity_charge(bill.electric_start, bill.electric_end, bill.electric_rate)?;
        validate_amount(bill.total_amount)?;
        if let Some(paid) = bill.paid_amount {
            validate_amount(paid)?;
        }

        let (unit_id, month, year) = (bill.unit_id, bill.month, bill.year);
        self.store.insert_bill(bill).await.map_err(|e| match e {
            PortError::Conflict { .. } => BillingError::DuplicateCycle { unit_id, month, year },
            PortError::Validation { message, .. } => BillingError::InvalidReference(message),
            other => BillingError::Store(other),
        })
    }

    /// Applies a partial update to a bill
    ///
    /// Only supplied fields change; an empty patch is a no-op that returns
    /// the bill unchanged. Fields present in the patch are validated the
    /// same way as at creation. The payment status is not writable; it
    /// follows the amounts on every read.
    pub async fn amend_bill(
        &self,
        id: BillId,
        patch: BillPatch,
    ) -> Result<MonthlyBill, BillingError> {
        debug!(bill_id = %id, "amending bill");

        if let Some(month) = patch.month {
            validate_month(month)?;
        }
        if let (Some(start), Some(end)) = (patch.electric_start, patch.electric_end) {
            if end < start {
                return Err(BillingError::InvalidMeterRange { start, end });
            }
        }
        if let Some(total) = patch.total_amount {
            validate_amount(total)?;
        }
        if let Some(paid) = patch.paid_amount {
            validate_amount(paid)?;
        }

        self.store
            .update_bill(id, patch)
            .await
            .map_err(|e| bill_error(e, id))
    }

    /// Lists the items attached to a bill
    pub async fn list_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, BillingError> {
        self.store
            .find_items(bill_id)
            .await
            .map_err(|e| bill_error(e, bill_id))
    }

    /// Attaches an ad-hoc charge to a bill
    ///
    /// The amount must be positive; zero and negative charges are
    /// rejected before the store is consulted.
    pub async fn add_item(
        &self,
        bill_id: BillId,
        item: NewBillItem,
    ) -> Result<BillItem, BillingError> {
        debug!(bill_id = %bill_id, item_type = %item.item_type, "attaching bill item");

        if !item.amount.is_positive() {
            return Err(BillingError::InvalidAmount(item.amount));
        }

        self.store
            .insert_item(bill_id, item)
            .await
            .map_err(|e| bill_error(e, bill_id))
    }
}

fn validate_month(month: i32) -> Result<(), BillingError> {
    if !(1..=12).contains(&month) {
        return Err(BillingError::InvalidMonth(month));
    }
    Ok(())
}

fn validate_amount(amount: Money) -> Result<(), BillingError> {
    if amount.is_negative() {
        return Err(BillingError::InvalidAmount(amount));
    }
    Ok(())
}

fn bill_error(e: PortError, id: BillId) -> BillingError {
    match e {
        PortError::NotFound { .. } => BillingError::BillNotFound(id),
        PortError::Validation { message, .. } => BillingError::InvalidReference(message),
        other => BillingError::Store(other),
    }
}
