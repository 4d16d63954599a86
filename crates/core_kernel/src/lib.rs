//! Core Kernel - Foundational types and utilities for the property management system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money type with precise decimal arithmetic
//! - Strongly-typed entity identifiers
//! - Port abstractions for the persistence boundary

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, MoneyError};
pub use identifiers::{BillId, BillItemId, LeaseId, PropertyId, TenantId, UnitId};
pub use ports::{DomainPort, PortError};
