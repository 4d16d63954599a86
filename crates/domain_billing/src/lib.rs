//! Billing Domain - Monthly Bill Lifecycle
//!
//! This crate implements the billing engine for the property management
//! system: one bill per unit per month, charges derived from meter readings,
//! and ad-hoc line items attached after the fact.
//!
//! # Billing cycle
//!
//! The (unit, month, year) triple identifies one billing period and is
//! unique; attempting to raise a second bill for the same cycle is a
//! conflict, never an overwrite.
//!
//! # Payment status
//!
//! A bill's status (unpaid, partial, paid) is derived from its paid amount
//! relative to its total on every read. It is not an independently writable
//! field, so it can never drift from the amounts: recording a payment moves
//! the bill forward, and reducing the paid amount (e.g. a refund
//! correction) reopens it.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BillingService, NewBill};
//!
//! let service = BillingService::new(store);
//!
//! let bill = service
//!     .create_bill(
//!         NewBill::new(unit_id, 1, 2024, Money::from_units(5_600_000))
//!             .with_electric(100, 200, Money::from_units(3_500)),
//!     )
//!     .await?;
//! ```

pub mod bill;
pub mod item;
pub mod charges;
pub mod ports;
pub mod service;
pub mod error;

pub use bill::{BillPatch, BillStatus, BillWithUnit, MonthlyBill, NewBill};
pub use item::{BillItem, BillItemType, NewBillItem};
pub use ports::BillStore;
pub use service::BillingService;
pub use error::BillingError;
