//! Database row types
//!
//! `FromRow` structs for runtime-checked queries plus their conversions
//! into domain types. Joined rows carry the joined side as nullable
//! aliased columns so left-join semantics survive the decoding.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use core_kernel::{BillId, BillItemId, LeaseId, Money, PropertyId, TenantId, UnitId};
use domain_billing::{BillItem, BillItemType, BillWithUnit, MonthlyBill};
use domain_property::{Lease, LeaseWithParties, Property, Tenant, Unit};

use crate::error::DatabaseError;

/// Database row for a property
#[derive(Debug, Clone, FromRow)]
pub struct PropertyRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub electric_id: Option<String>,
    pub water_id: Option<String>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Property {
            id: PropertyId::new(row.id),
            code: row.code,
            name: row.name,
            address: row.address,
            electric_id: row.electric_id,
            water_id: row.water_id,
        }
    }
}

/// Database row for a unit
#[derive(Debug, Clone, FromRow)]
pub struct UnitRow {
    pub id: i64,
    pub property_id: i64,
    pub name: String,
    pub floor: Option<i32>,
    pub base_price: Option<Decimal>,
}

impl From<UnitRow> for Unit {
    fn from(row: UnitRow) -> Self {
        Unit {
            id: UnitId::new(row.id),
            property_id: PropertyId::new(row.property_id),
            name: row.name,
            floor: row.floor,
            base_price: row.base_price.map(Money::new),
        }
    }
}

/// Database row for a tenant
#[derive(Debug, Clone, FromRow)]
pub struct TenantRow {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub identity_card: Option<String>,
}

impl From<TenantRow> for Tenant {
    fn from(row: TenantRow) -> Self {
        Tenant {
            id: TenantId::new(row.id),
            name: row.name,
            phone: row.phone,
            email: row.email,
            identity_card: row.identity_card,
        }
    }
}

/// Database row for a lease
#[derive(Debug, Clone, FromRow)]
pub struct LeaseRow {
    pub id: i64,
    pub unit_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: Option<Decimal>,
    pub rent_price: Option<Decimal>,
    pub occupant_count: i32,
    pub active: bool,
}

impl From<LeaseRow> for Lease {
    fn from(row: LeaseRow) -> Self {
        Lease {
            id: LeaseId::new(row.id),
            unit_id: UnitId::new(row.unit_id),
            tenant_id: TenantId::new(row.tenant_id),
            start_date: row.start_date,
            end_date: row.end_date,
            deposit: row.deposit.map(Money::new),
            rent_price: row.rent_price.map(Money::new),
            occupant_count: row.occupant_count,
            active: row.active,
        }
    }
}

/// Database row for a lease joined with its tenant and unit
#[derive(Debug, Clone, FromRow)]
pub struct LeaseWithPartiesRow {
    pub id: i64,
    pub unit_id: i64,
    pub tenant_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub deposit: Option<Decimal>,
    pub rent_price: Option<Decimal>,
    pub occupant_count: i32,
    pub active: bool,
    pub t_id: Option<i64>,
    pub t_name: Option<String>,
    pub t_phone: Option<String>,
    pub t_email: Option<String>,
    pub t_identity_card: Option<String>,
    pub u_id: Option<i64>,
    pub u_property_id: Option<i64>,
    pub u_name: Option<String>,
    pub u_floor: Option<i32>,
    pub u_base_price: Option<Decimal>,
}

impl From<LeaseWithPartiesRow> for LeaseWithParties {
    fn from(row: LeaseWithPartiesRow) -> Self {
        let tenant = match (row.t_id, row.t_name) {
            (Some(id), Some(name)) => Some(Tenant {
                id: TenantId::new(id),
                name,
                phone: row.t_phone,
                email: row.t_email,
                identity_card: row.t_identity_card,
            }),
            _ => None,
        };

        let unit = joined_unit(
            row.u_id,
            row.u_property_id,
            row.u_name,
            row.u_floor,
            row.u_base_price,
        );

        LeaseWithParties {
            lease: Lease {
                id: LeaseId::new(row.id),
                unit_id: UnitId::new(row.unit_id),
                tenant_id: TenantId::new(row.tenant_id),
                start_date: row.start_date,
                end_date: row.end_date,
                deposit: row.deposit.map(Money::new),
                rent_price: row.rent_price.map(Money::new),
                occupant_count: row.occupant_count,
                active: row.active,
            },
            tenant,
            unit,
        }
    }
}

/// Database row for a monthly bill
#[derive(Debug, Clone, FromRow)]
pub struct BillRow {
    pub id: i64,
    pub unit_id: i64,
    pub month: i32,
    pub year: i32,
    pub electric_start: Option<i32>,
    pub electric_end: Option<i32>,
    pub electric_rate: Option<Decimal>,
    pub water_usage: Option<i32>,
    pub water_rate: Option<Decimal>,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BillRow> for MonthlyBill {
    fn from(row: BillRow) -> Self {
        MonthlyBill {
            id: BillId::new(row.id),
            unit_id: UnitId::new(row.unit_id),
            month: row.month,
            year: row.year,
            electric_start: row.electric_start,
            electric_end: row.electric_end,
            electric_rate: row.electric_rate.map(Money::new),
            water_usage: row.water_usage,
            water_rate: row.water_rate.map(Money::new),
            total_amount: Money::new(row.total_amount),
            paid_amount: Money::new(row.paid_amount),
            note: row.note,
            created_at: row.created_at,
        }
    }
}

/// Database row for a bill joined with its unit
#[derive(Debug, Clone, FromRow)]
pub struct BillWithUnitRow {
    pub id: i64,
    pub unit_id: i64,
    pub month: i32,
    pub year: i32,
    pub electric_start: Option<i32>,
    pub electric_end: Option<i32>,
    pub electric_rate: Option<Decimal>,
    pub water_usage: Option<i32>,
    pub water_rate: Option<Decimal>,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub u_id: Option<i64>,
    pub u_property_id: Option<i64>,
    pub u_name: Option<String>,
    pub u_floor: Option<i32>,
    pub u_base_price: Option<Decimal>,
}

impl From<BillWithUnitRow> for BillWithUnit {
    fn from(row: BillWithUnitRow) -> Self {
        let unit = joined_unit(
            row.u_id,
            row.u_property_id,
            row.u_name,
            row.u_floor,
            row.u_base_price,
        );

        BillWithUnit {
            bill: MonthlyBill {
                id: BillId::new(row.id),
                unit_id: UnitId::new(row.unit_id),
                month: row.month,
                year: row.year,
                electric_start: row.electric_start,
                electric_end: row.electric_end,
                electric_rate: row.electric_rate.map(Money::new),
                water_usage: row.water_usage,
                water_rate: row.water_rate.map(Money::new),
                total_amount: Money::new(row.total_amount),
                paid_amount: Money::new(row.paid_amount),
                note: row.note,
                created_at: row.created_at,
            },
            unit,
        }
    }
}

/// Database row for a bill item
#[derive(Debug, Clone, FromRow)]
pub struct BillItemRow {
    pub id: i64,
    pub bill_id: i64,
    #[sqlx(rename = "type")]
    pub item_type: String,
    pub description: Option<String>,
    pub amount: Decimal,
}

impl TryFrom<BillItemRow> for BillItem {
    type Error = DatabaseError;

    fn try_from(row: BillItemRow) -> Result<Self, Self::Error> {
        let item_type: BillItemType =
            row.item_type.parse().map_err(DatabaseError::Decode)?;

        Ok(BillItem {
            id: BillItemId::new(row.id),
            bill_id: BillId::new(row.bill_id),
            item_type,
            description: row.description,
            amount: Money::new(row.amount),
        })
    }
}

/// Rebuilds a left-joined unit from its nullable columns
fn joined_unit(
    id: Option<i64>,
    property_id: Option<i64>,
    name: Option<String>,
    floor: Option<i32>,
    base_price: Option<Decimal>,
) -> Option<Unit> {
    match (id, property_id, name) {
        (Some(id), Some(property_id), Some(name)) => Some(Unit {
            id: UnitId::new(id),
            property_id: PropertyId::new(property_id),
            name,
            floor,
            base_price: base_price.map(Money::new),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bill_row() -> BillRow {
        BillRow {
            id: 1,
            unit_id: 2,
            month: 1,
            year: 2024,
            electric_start: Some(100),
            electric_end: Some(200),
            electric_rate: Some(dec!(3500)),
            water_usage: Some(10),
            water_rate: Some(dec!(25000)),
            total_amount: dec!(5600000),
            paid_amount: dec!(0),
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn bill_row_converts_to_domain() {
        let bill: MonthlyBill = bill_row().into();

        assert_eq!(bill.id, BillId::new(1));
        assert_eq!(bill.unit_id, UnitId::new(2));
        assert_eq!(bill.total_amount, Money::from_units(5_600_000));
        assert_eq!(bill.electric_rate, Some(Money::from_units(3500)));
    }

    #[test]
    fn joined_unit_requires_all_key_columns() {
        assert!(joined_unit(Some(1), Some(1), Some("101".into()), None, None).is_some());
        assert!(joined_unit(None, None, None, None, None).is_none());
        assert!(joined_unit(Some(1), None, Some("101".into()), None, None).is_none());
    }

    #[test]
    fn item_row_rejects_unknown_type() {
        let row = BillItemRow {
            id: 1,
            bill_id: 1,
            item_type: "GARAGE".to_string(),
            description: None,
            amount: dec!(100000),
        };

        assert!(BillItem::try_from(row).is_err());
    }

    #[test]
    fn item_row_converts_known_type() {
        let row = BillItemRow {
            id: 3,
            bill_id: 1,
            item_type: "PARKING".to_string(),
            description: Some("motorbike".to_string()),
            amount: dec!(100000),
        };

        let item = BillItem::try_from(row).unwrap();
        assert_eq!(item.item_type, BillItemType::Parking);
        assert_eq!(item.bill_id, BillId::new(1));
    }
}
