//! Bill line items
//!
//! Ad-hoc, non-metered charges attached to a bill after it was raised:
//! parking, wifi, one-off services. Items are append-only; the observed
//! surface exposes no update or delete for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{BillId, BillItemId, Money};

/// Kind of ad-hoc charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillItemType {
    Electric,
    Water,
    Parking,
    Wifi,
    Service,
    Other,
}

impl BillItemType {
    /// Returns the canonical wire/storage form
    pub fn as_str(&self) -> &'static str {
        match self {
            BillItemType::Electric => "ELECTRIC",
            BillItemType::Water => "WATER",
            BillItemType::Parking => "PARKING",
            BillItemType::Wifi => "WIFI",
            BillItemType::Service => "SERVICE",
            BillItemType::Other => "OTHER",
        }
    }
}

impl fmt::Display for BillItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BillItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ELECTRIC" => Ok(BillItemType::Electric),
            "WATER" => Ok(BillItemType::Water),
            "PARKING" => Ok(BillItemType::Parking),
            "WIFI" => Ok(BillItemType::Wifi),
            "SERVICE" => Ok(BillItemType::Service),
            "OTHER" => Ok(BillItemType::Other),
            other => Err(format!("unknown bill item type: {other}")),
        }
    }
}

/// A charge line attached to a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillItem {
    /// Unique identifier
    pub id: BillItemId,
    /// Parent bill
    pub bill_id: BillId,
    /// Kind of charge
    pub item_type: BillItemType,
    /// Description
    pub description: Option<String>,
    /// Charged amount, always positive
    pub amount: Money,
}

/// Data for attaching a new item to a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBillItem {
    pub item_type: BillItemType,
    pub description: Option<String>,
    pub amount: Money,
}

impl NewBillItem {
    /// Creates a new item with the required fields
    pub fn new(item_type: BillItemType, amount: Money) -> Self {
        Self {
            item_type,
            description: None,
            amount,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_string_roundtrip() {
        let types = [
            BillItemType::Electric,
            BillItemType::Water,
            BillItemType::Parking,
            BillItemType::Wifi,
            BillItemType::Service,
            BillItemType::Other,
        ];

        for t in types {
            let parsed: BillItemType = t.as_str().parse().unwrap();
            assert_eq!(parsed, t);
        }
    }

    #[test]
    fn item_type_serde_uses_screaming_case() {
        let json = serde_json::to_string(&BillItemType::Parking).unwrap();
        assert_eq!(json, "\"PARKING\"");
    }

    #[test]
    fn unknown_item_type_fails_to_parse() {
        assert!("GARAGE".parse::<BillItemType>().is_err());
    }
}
