//! Billing domain errors

use thiserror::Error;

use core_kernel::{BillId, Money, PortError, UnitId};

/// Errors that can occur in the billing domain
#[derive(Debug, Error)]
pub enum BillingError {
    /// Bill not found
    #[error("Bill not found: {0}")]
    BillNotFound(BillId),

    /// A bill for this cycle already exists
    #[error("A bill for unit {unit_id} already exists for {month}/{year}")]
    DuplicateCycle {
        unit_id: UnitId,
        month: i32,
        year: i32,
    },

    /// Month outside 1-12
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(i32),

    /// Electricity meter ran backwards
    #[error("Invalid meter range: end reading {end} is below start reading {start}")]
    InvalidMeterRange { start: i32, end: i32 },

    /// Item or payment amount out of range
    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    /// A referenced row does not exist
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Underlying store failure
    #[error(transparent)]
    Store(PortError),
}
