//! Monthly bills
//!
//! This module defines the bill aggregate and its creation/patch types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BillId, Money, UnitId};
use domain_property::Unit;

/// Payment status of a bill
///
/// Derived from the paid amount relative to the total; never stored or
/// written directly. There is no terminal state: lowering the paid amount
/// of a settled bill reopens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Nothing received yet
    Unpaid,
    /// Partial payment received
    Partial,
    /// Fully settled
    Paid,
}

impl BillStatus {
    /// Derives the status from the billed and received amounts
    pub fn derive(total: Money, paid: Money) -> Self {
        if paid >= total {
            BillStatus::Paid
        } else if paid.is_positive() {
            BillStatus::Partial
        } else {
            BillStatus::Unpaid
        }
    }
}

/// One billing cycle for one unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBill {
    /// Unique identifier
    pub id: BillId,
    /// Billed unit
    pub unit_id: UnitId,
    /// Billing month (1-12)
    pub month: i32,
    /// Billing year
    pub year: i32,
    /// Electricity meter reading at the start of the cycle
    pub electric_start: Option<i32>,
    /// Electricity meter reading at the end of the cycle
    pub electric_end: Option<i32>,
    /// Price per metered electricity unit
    pub electric_rate: Option<Money>,
    /// Water usage for the cycle (meter delta or headcount)
    pub water_usage: Option<i32>,
    /// Price per water usage unit
    pub water_rate: Option<Money>,
    /// Total billed amount
    pub total_amount: Money,
    /// Amount received so far
    pub paid_amount: Money,
    /// Free-text note
    pub note: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl MonthlyBill {
    /// Returns the payment status derived from the current amounts
    pub fn status(&self) -> BillStatus {
        BillStatus::derive(self.total_amount, self.paid_amount)
    }

    /// Returns the outstanding balance
    pub fn balance_due(&self) -> Money {
        self.total_amount - self.paid_amount
    }
}

/// A bill joined with the unit it was raised for
///
/// The unit side is optional: a bill outlives its unit, so listings carry
/// left-join semantics.
#[derive(Debug, Clone, Serialize)]
pub struct BillWithUnit {
    pub bill: MonthlyBill,
    pub unit: Option<Unit>,
}

/// Data for raising a new bill
///
/// Unset optional fields take their defaults at insertion time
/// (paid amount 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBill {
    pub unit_id: UnitId,
    pub month: i32,
    pub year: i32,
    pub electric_start: Option<i32>,
    pub electric_end: Option<i32>,
    pub electric_rate: Option<Money>,
    pub water_usage: Option<i32>,
    pub water_rate: Option<Money>,
    pub total_amount: Money,
    pub paid_amount: Option<Money>,
    pub note: Option<String>,
}

impl NewBill {
    /// Creates a new bill record with the required fields
    pub fn new(unit_id: UnitId, month: i32, year: i32, total_amount: Money) -> Self {
        Self {
            unit_id,
            month,
            year,
            electric_start: None,
            electric_end: None,
            electric_rate: None,
            water_usage: None,
            water_rate: None,
            total_amount,
            paid_amount: None,
            note: None,
        }
    }

    /// Sets the electricity meter readings and rate
    pub fn with_electric(mut self, start: i32, end: i32, rate: Money) -> Self {
        self.electric_start = Some(start);
        self.electric_end = Some(end);
        self.electric_rate = Some(rate);
        self
    }

    /// Sets the water usage and rate
    pub fn with_water(mut self, usage: i32, rate: Money) -> Self {
        self.water_usage = Some(usage);
        self.water_rate = Some(rate);
        self
    }

    /// Sets the amount already received
    pub fn with_paid_amount(mut self, paid_amount: Money) -> Self {
        self.paid_amount = Some(paid_amount);
        self
    }

    /// Sets the free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Partial update for a bill
///
/// Absent fields are left unchanged; there is no way to null a field out
/// through a patch. Status is not here: it is derived from the amounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillPatch {
    pub unit_id: Option<UnitId>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub electric_start: Option<i32>,
    pub electric_end: Option<i32>,
    pub electric_rate: Option<Money>,
    pub water_usage: Option<i32>,
    pub water_rate: Option<Money>,
    pub total_amount: Option<Money>,
    pub paid_amount: Option<Money>,
    pub note: Option<String>,
}

impl BillPatch {
    /// A patch recording a received payment
    pub fn payment(paid_amount: Money) -> Self {
        Self {
            paid_amount: Some(paid_amount),
            ..Default::default()
        }
    }

    /// Returns true if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.unit_id.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.electric_start.is_none()
            && self.electric_end.is_none()
            && self.electric_rate.is_none()
            && self.water_usage.is_none()
            && self.water_rate.is_none()
            && self.total_amount.is_none()
            && self.paid_amount.is_none()
            && self.note.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_derivation_follows_paid_amount() {
        let total = Money::from_units(5_600_000);

        assert_eq!(BillStatus::derive(total, Money::zero()), BillStatus::Unpaid);
        assert_eq!(
            BillStatus::derive(total, Money::from_units(3_000_000)),
            BillStatus::Partial
        );
        assert_eq!(BillStatus::derive(total, total), BillStatus::Paid);
    }

    #[test]
    fn overpayment_is_still_paid() {
        let status = BillStatus::derive(Money::from_units(100), Money::from_units(150));
        assert_eq!(status, BillStatus::Paid);
    }

    #[test]
    fn negative_paid_amount_is_unpaid() {
        let status = BillStatus::derive(Money::from_units(100), Money::from_units(-50));
        assert_eq!(status, BillStatus::Unpaid);
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(BillPatch::default().is_empty());
        assert!(!BillPatch::payment(Money::from_units(1)).is_empty());
    }
}
