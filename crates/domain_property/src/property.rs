//! Properties (buildings)

use serde::{Deserialize, Serialize};

use core_kernel::PropertyId;

/// A managed building
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: PropertyId,
    /// Short unique code, e.g. "K10"
    pub code: String,
    /// Display name
    pub name: String,
    /// Street address
    pub address: Option<String>,
    /// Customer id at the electricity provider
    pub electric_id: Option<String>,
    /// Customer id at the water provider
    pub water_id: Option<String>,
}

/// Data for creating a new property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub electric_id: Option<String>,
    pub water_id: Option<String>,
}

impl NewProperty {
    /// Creates a new property record with the required fields
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            address: None,
            electric_id: None,
            water_id: None,
        }
    }

    /// Sets the street address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the utility provider customer ids
    pub fn with_utility_ids(
        mut self,
        electric_id: impl Into<String>,
        water_id: impl Into<String>,
    ) -> Self {
        self.electric_id = Some(electric_id.into());
        self.water_id = Some(water_id.into());
        self
    }
}
