//! Bill handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::BillId;

use crate::dto::billing::{
    BillDetailResponse, BillItemResponse, BillResponse, BillSummaryResponse, CreateBillItemRequest,
    CreateBillRequest, UpdateBillRequest,
};
use crate::{error::ApiError, AppState};

/// Lists every bill with its unit
pub async fn list_bills(
    State(state): State<AppState>,
) -> Result<Json<Vec<BillSummaryResponse>>, ApiError> {
    let bills = state.billing.list_bills().await?;
    Ok(Json(bills.into_iter().map(BillSummaryResponse::from).collect()))
}

/// Gets one bill with its unit and items
pub async fn get_bill(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BillDetailResponse>, ApiError> {
    let id = BillId::new(id);
    let joined = state.billing.get_bill(id).await?;
    let items = state.billing.list_items(id).await?;

    Ok(Json(BillDetailResponse {
        bill: joined.bill.into(),
        unit: joined.unit.map(Into::into),
        items: items.into_iter().map(BillItemResponse::from).collect(),
    }))
}

/// Raises a new bill
pub async fn create_bill(
    State(state): State<AppState>,
    Json(request): Json<CreateBillRequest>,
) -> Result<(StatusCode, Json<BillResponse>), ApiError> {
    let bill = state.billing.create_bill(request.into()).await?;
    Ok((StatusCode::CREATED, Json(bill.into())))
}

/// Applies a partial update to a bill
pub async fn update_bill(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateBillRequest>,
) -> Result<Json<BillResponse>, ApiError> {
    let bill = state.billing.amend_bill(BillId::new(id), request.into()).await?;
    Ok(Json(bill.into()))
}

/// Lists the items of a bill
pub async fn list_items(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<BillItemResponse>>, ApiError> {
    let items = state.billing.list_items(BillId::new(id)).await?;
    Ok(Json(items.into_iter().map(BillItemResponse::from).collect()))
}

/// Attaches an item to a bill
pub async fn create_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CreateBillItemRequest>,
) -> Result<(StatusCode, Json<BillItemResponse>), ApiError> {
    let item = state.billing.add_item(BillId::new(id), request.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}
