//! Lease handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::LeaseId;

use crate::dto::directory::{
    CreateLeaseRequest, LeaseDetailResponse, LeaseResponse, UpdateLeaseRequest,
};
use crate::{error::ApiError, AppState};

/// Lists every lease with its tenant and unit
pub async fn list_leases(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaseDetailResponse>>, ApiError> {
    let leases = state.directory.list_leases().await?;
    Ok(Json(leases.into_iter().map(LeaseDetailResponse::from).collect()))
}

/// Gets one lease with its tenant and unit
pub async fn get_lease(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LeaseDetailResponse>, ApiError> {
    let lease = state.directory.get_lease(LeaseId::new(id)).await?;
    Ok(Json(lease.into()))
}

/// Creates a lease
pub async fn create_lease(
    State(state): State<AppState>,
    Json(request): Json<CreateLeaseRequest>,
) -> Result<(StatusCode, Json<LeaseResponse>), ApiError> {
    let lease = state.directory.create_lease(request.into()).await?;
    Ok((StatusCode::CREATED, Json(lease.into())))
}

/// Applies a partial update to a lease
pub async fn update_lease(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateLeaseRequest>,
) -> Result<Json<LeaseResponse>, ApiError> {
    let lease = state
        .directory
        .update_lease(LeaseId::new(id), request.into())
        .await?;
    Ok(Json(lease.into()))
}

/// Deletes a lease
pub async fn delete_lease(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LeaseResponse>, ApiError> {
    let lease = state.directory.remove_lease(LeaseId::new(id)).await?;
    Ok(Json(lease.into()))
}
