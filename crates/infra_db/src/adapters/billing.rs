//! PostgreSQL bill store
//!
//! Implements the `BillStore` port against the monthly_bills and
//! bill_items tables. Read-then-write sequences (the bill-exists check in
//! front of item reads/writes) run inside one transaction so they observe
//! a consistent snapshot; the unique index on (unit_id, month, year) is
//! the backstop against concurrent duplicate creation and surfaces here
//! as a conflict.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{BillId, DomainPort, PortError};
use domain_billing::{BillItem, BillPatch, BillStore, BillWithUnit, MonthlyBill, NewBill, NewBillItem};

use crate::error::DatabaseError;
use crate::rows::{BillItemRow, BillRow, BillWithUnitRow};

const BILL_COLUMNS: &str = "id, unit_id, month, year, electric_start, electric_end, \
     electric_rate, water_usage, water_rate, total_amount, paid_amount, note, created_at";

const BILL_WITH_UNIT_QUERY: &str = "SELECT b.id, b.unit_id, b.month, b.year, \
     b.electric_start, b.electric_end, b.electric_rate, b.water_usage, b.water_rate, \
     b.total_amount, b.paid_amount, b.note, b.created_at, \
     u.id AS u_id, u.property_id AS u_property_id, u.name AS u_name, \
     u.floor AS u_floor, u.base_price AS u_base_price \
     FROM monthly_bills b LEFT JOIN units u ON u.id = b.unit_id";

/// PostgreSQL-backed implementation of the `BillStore` port
#[derive(Debug, Clone)]
pub struct PgBillStore {
    pool: PgPool,
}

impl PgBillStore {
    /// Creates a new bill store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DomainPort for PgBillStore {}

#[async_trait]
impl BillStore for PgBillStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<BillWithUnit>, PortError> {
        debug!("listing bills");

        let rows = sqlx::query_as::<_, BillWithUnitRow>(&format!(
            "{BILL_WITH_UNIT_QUERY} ORDER BY b.id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_to_port)?;

        Ok(rows.into_iter().map(BillWithUnit::from).collect())
    }

    #[instrument(skip(self), fields(bill_id = %id))]
    async fn find_by_id(&self, id: BillId) -> Result<BillWithUnit, PortError> {
        debug!("fetching bill");

        let row = sqlx::query_as::<_, BillWithUnitRow>(&format!(
            "{BILL_WITH_UNIT_QUERY} WHERE b.id = $1"
        ))
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(BillWithUnit::from)
            .ok_or_else(|| PortError::not_found("Bill", id))
    }

    #[instrument(skip(self), fields(bill_id = %bill_id))]
    async fn find_items(&self, bill_id: BillId) -> Result<Vec<BillItem>, PortError> {
        debug!("listing bill items");

        let mut tx = self.pool.begin().await.map_err(db_to_port)?;

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM monthly_bills WHERE id = $1")
                .bind(bill_id.value())
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_to_port)?;
        if exists.is_none() {
            return Err(PortError::not_found("Bill", bill_id));
        }

        let rows = sqlx::query_as::<_, BillItemRow>(
            "SELECT id, bill_id, type, description, amount \
             FROM bill_items WHERE bill_id = $1 ORDER BY id",
        )
        .bind(bill_id.value())
        .fetch_all(&mut *tx)
        .await
        .map_err(db_to_port)?;

        tx.commit().await.map_err(db_to_port)?;

        rows.into_iter()
            .map(|row| BillItem::try_from(row).map_err(PortError::from))
            .collect()
    }

    #[instrument(skip(self, bill), fields(unit_id = %bill.unit_id, month = bill.month, year = bill.year))]
    async fn insert_bill(&self, bill: NewBill) -> Result<MonthlyBill, PortError> {
        debug!("inserting bill");

        let unit_id = bill.unit_id;
        let paid_amount = bill.paid_amount.unwrap_or_default();

        let row = sqlx::query_as::<_, BillRow>(&format!(
            "INSERT INTO monthly_bills \
             (unit_id, month, year, electric_start, electric_end, electric_rate, \
              water_usage, water_rate, total_amount, paid_amount, note, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now()) \
             RETURNING {BILL_COLUMNS}"
        ))
        .bind(bill.unit_id.value())
        .bind(bill.month)
        .bind(bill.year)
        .bind(bill.electric_start)
        .bind(bill.electric_end)
        .bind(bill.electric_rate.map(Decimal::from))
        .bind(bill.water_usage)
        .bind(bill.water_rate.map(Decimal::from))
        .bind(Decimal::from(bill.total_amount))
        .bind(Decimal::from(paid_amount))
        .bind(bill.note)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from(e) {
            DatabaseError::ForeignKeyViolation(_) => {
                PortError::validation(format!("unit {unit_id} does not exist"))
            }
            other => other.into(),
        })?;

        Ok(row.into())
    }

    #[instrument(skip(self, patch), fields(bill_id = %id))]
    async fn update_bill(&self, id: BillId, patch: BillPatch) -> Result<MonthlyBill, PortError> {
        debug!("updating bill");

        let row = sqlx::query_as::<_, BillRow>(&format!(
            "UPDATE monthly_bills SET \
             unit_id = COALESCE($2, unit_id), \
             month = COALESCE($3, month), \
             year = COALESCE($4, year), \
             electric_start = COALESCE($5, electric_start), \
             electric_end = COALESCE($6, electric_end), \
             electric_rate = COALESCE($7, electric_rate), \
             water_usage = COALESCE($8, water_usage), \
             water_rate = COALESCE($9, water_rate), \
             total_amount = COALESCE($10, total_amount), \
             paid_amount = COALESCE($11, paid_amount), \
             note = COALESCE($12, note) \
             WHERE id = $1 \
             RETURNING {BILL_COLUMNS}"
        ))
        .bind(id.value())
        .bind(patch.unit_id.map(|u| u.value()))
        .bind(patch.month)
        .bind(patch.year)
        .bind(patch.electric_start)
        .bind(patch.electric_end)
        .bind(patch.electric_rate.map(Decimal::from))
        .bind(patch.water_usage)
        .bind(patch.water_rate.map(Decimal::from))
        .bind(patch.total_amount.map(Decimal::from))
        .bind(patch.paid_amount.map(Decimal::from))
        .bind(patch.note)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_to_port)?;

        row.map(MonthlyBill::from)
            .ok_or_else(|| PortError::not_found("Bill", id))
    }

    #[instrument(skip(self, item), fields(bill_id = %bill_id, item_type = %item.item_type))]
    async fn insert_item(
        &self,
        bill_id: BillId,
        item: NewBillItem,
    ) -> Result<BillItem, PortError> {
        debug!("inserting bill item");

        let mut tx = self.pool.begin().await.map_err(db_to_port)?;

        let exists: Option<i64> =
            sqlx::query_scalar("SELECT id FROM monthly_bills WHERE id = $1")
                .bind(bill_id.value())
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_to_port)?;
        if exists.is_none() {
            return Err(PortError::not_found("Bill", bill_id));
        }

        let row = sqlx::query_as::<_, BillItemRow>(
            "INSERT INTO bill_items (bill_id, type, description, amount) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, bill_id, type, description, amount",
        )
        .bind(bill_id.value())
        .bind(item.item_type.as_str())
        .bind(item.description)
        .bind(Decimal::from(item.amount))
        .fetch_one(&mut *tx)
        .await
        .map_err(db_to_port)?;

        tx.commit().await.map_err(db_to_port)?;

        BillItem::try_from(row).map_err(PortError::from)
    }
}

/// Converts a SQLx error to a port error via the database taxonomy
fn db_to_port(e: sqlx::Error) -> PortError {
    DatabaseError::from(e).into()
}
