//! Rentable units
//!
//! A unit is one rentable space inside a property. Unit names repeat
//! across buildings ("101" exists everywhere), so uniqueness is on the
//! (property, name) pair rather than the name alone.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, PropertyId, UnitId};

/// A rentable space inside a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier
    pub id: UnitId,
    /// Owning property
    pub property_id: PropertyId,
    /// Display name, e.g. "101" or "T01"
    pub name: String,
    /// Floor number
    pub floor: Option<i32>,
    /// Base monthly price
    pub base_price: Option<Money>,
}

/// Data for creating a new unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUnit {
    pub property_id: PropertyId,
    pub name: String,
    pub floor: Option<i32>,
    pub base_price: Option<Money>,
}

impl NewUnit {
    /// Creates a new unit record with the required fields
    pub fn new(property_id: PropertyId, name: impl Into<String>) -> Self {
        Self {
            property_id,
            name: name.into(),
            floor: None,
            base_price: None,
        }
    }

    /// Sets the floor number
    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Sets the base monthly price
    pub fn with_base_price(mut self, base_price: Money) -> Self {
        self.base_price = Some(base_price);
        self
    }
}

/// Partial update for a unit; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitPatch {
    pub property_id: Option<PropertyId>,
    pub name: Option<String>,
    pub floor: Option<i32>,
    pub base_price: Option<Money>,
}

impl UnitPatch {
    /// Returns true if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.property_id.is_none()
            && self.name.is_none()
            && self.floor.is_none()
            && self.base_price.is_none()
    }
}
