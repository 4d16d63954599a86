//! Billing DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{BillId, BillItemId, Money, UnitId};
use domain_billing::{
    BillItem, BillItemType, BillPatch, BillStatus, BillWithUnit, MonthlyBill, NewBill,
    NewBillItem,
};

use crate::dto::directory::UnitResponse;

#[derive(Debug, Deserialize)]
pub struct CreateBillRequest {
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

impl From<CreateBillRequest> for NewBill {
    fn from(req: CreateBillRequest) -> Self {
        NewBill {
            unit_id: req.unit_id,
            month: req.month,
            year: req.year,
            electric_start: req.electric_start,
            electric_end: req.electric_end,
            electric_rate: req.electric_rate,
            water_usage: req.water_usage,
            water_rate: req.water_rate,
            total_amount: req.total_amount,
            paid_amount: req.paid_amount,
            note: req.note,
        }
    }
}

/// Partial bill update; fields left out of the body stay unchanged.
/// Status is absent on purpose: it follows the amounts.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBillRequest {
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

impl From<UpdateBillRequest> for BillPatch {
    fn from(req: UpdateBillRequest) -> Self {
        BillPatch {
            unit_id: req.unit_id,
            month: req.month,
            year: req.year,
            electric_start: req.electric_start,
            electric_end: req.electric_end,
            electric_rate: req.electric_rate,
            water_usage: req.water_usage,
            water_rate: req.water_rate,
            total_amount: req.total_amount,
            paid_amount: req.paid_amount,
            note: req.note,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBillItemRequest {
    #[serde(rename = "type")]
    pub item_type: BillItemType,
    pub description: Option<String>,
    pub amount: Money,
}

impl From<CreateBillItemRequest> for NewBillItem {
    fn from(req: CreateBillItemRequest) -> Self {
        NewBillItem {
            item_type: req.item_type,
            description: req.description,
            amount: req.amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BillResponse {
    pub id: BillId,
    pub unit_id: UnitId,
    pub month: i32,
    pub year: i32,
    pub electric_start: Option<i32>,
    pub electric_end: Option<i32>,
    pub electric_rate: Option<Money>,
    pub water_usage: Option<i32>,
    pub water_rate: Option<Money>,
    pub total_amount: Money,
    pub paid_amount: Money,
    pub status: BillStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<MonthlyBill> for BillResponse {
    fn from(bill: MonthlyBill) -> Self {
        let status = bill.status();
        BillResponse {
            id: bill.id,
            unit_id: bill.unit_id,
            month: bill.month,
            year: bill.year,
            electric_start: bill.electric_start,
            electric_end: bill.electric_end,
            electric_rate: bill.electric_rate,
            water_usage: bill.water_usage,
            water_rate: bill.water_rate,
            total_amount: bill.total_amount,
            paid_amount: bill.paid_amount,
            status,
            note: bill.note,
            created_at: bill.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BillSummaryResponse {
    pub bill: BillResponse,
    pub unit: Option<UnitResponse>,
}

impl From<BillWithUnit> for BillSummaryResponse {
    fn from(joined: BillWithUnit) -> Self {
        BillSummaryResponse {
            bill: joined.bill.into(),
            unit: joined.unit.map(UnitResponse::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BillDetailResponse {
    pub bill: BillResponse,
    pub unit: Option<UnitResponse>,
    pub items: Vec<BillItemResponse>,
}

#[derive(Debug, Serialize)]
pub struct BillItemResponse {
    pub id: BillItemId,
    pub bill_id: BillId,
    #[serde(rename = "type")]
    pub item_type: BillItemType,
    pub description: Option<String>,
    pub amount: Money,
}

impl From<BillItem> for BillItemResponse {
    fn from(item: BillItem) -> Self {
        BillItemResponse {
            id: item.id,
            bill_id: item.bill_id,
            item_type: item.item_type,
            description: item.description,
            amount: item.amount,
        }
    }
}
