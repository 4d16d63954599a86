//! Billing persistence port

use async_trait::async_trait;

use core_kernel::{BillId, DomainPort, PortError};

use crate::bill::{BillPatch, BillWithUnit, MonthlyBill, NewBill};
use crate::item::{BillItem, NewBillItem};

/// Persistence access for bills and bill items
///
/// Implementations must treat each operation as one atomic unit: the
/// bill-exists check behind `find_items` and `insert_item` has to observe
/// the same snapshot as the read or write that follows it, so a concurrent
/// bill deletion cannot race an item insert into succeeding against a
/// vanished parent. A uniqueness violation on (unit, month, year) surfaces
/// as `PortError::Conflict`.
#[async_trait]
pub trait BillStore: DomainPort {
    /// Lists every bill joined with its unit (left join; the unit side is
    /// absent when the unit has been deleted). Iteration order is stable
    /// within a call.
    async fn find_all(&self) -> Result<Vec<BillWithUnit>, PortError>;

    /// Fetches one bill with its unit
    async fn find_by_id(&self, id: BillId) -> Result<BillWithUnit, PortError>;

    /// Lists the items of a bill; fails NotFound when the bill itself does
    /// not exist, even though an existing bill may legitimately have no
    /// items
    async fn find_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, PortError>;

    /// Inserts a bill; unset optional fields take their declared defaults
    async fn insert_bill(&self, bill: NewBill) -> Result<MonthlyBill, PortError>;

    /// Applies a partial update; only supplied fields change
    async fn update_bill(&self, id: BillId, patch: BillPatch) -> Result<MonthlyBill, PortError>;

    /// Attaches an item to an existing bill
    async fn insert_item(&self, bill_id: BillId, item: NewBillItem)
        -> Result<BillItem, PortError>;
}
