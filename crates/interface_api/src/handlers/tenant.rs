//! Tenant handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use core_kernel::TenantId;

use crate::dto::directory::{CreateTenantRequest, TenantResponse, UpdateTenantRequest};
use crate::{error::ApiError, AppState};

/// Lists every tenant
pub async fn list_tenants(
    State(state): State<AppState>,
) -> Result<Json<Vec<TenantResponse>>, ApiError> {
    let tenants = state.directory.list_tenants().await?;
    Ok(Json(tenants.into_iter().map(TenantResponse::from).collect()))
}

/// Gets one tenant
pub async fn get_tenant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TenantResponse>, ApiError> {
    let tenant = state.directory.get_tenant(TenantId::new(id)).await?;
    Ok(Json(tenant.into()))
}

/// Creates a tenant
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(request): Json<CreateTenantRequest>,
) -> Result<(StatusCode, Json<TenantResponse>), ApiError> {
    let tenant = state.directory.create_tenant(request.into()).await?;
    Ok((StatusCode::CREATED, Json(tenant.into())))
}

/// Applies a partial update to a tenant
pub async fn update_tenant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateTenantRequest>,
) -> Result<Json<TenantResponse>, ApiError> {
    let tenant = state
        .directory
        .update_tenant(TenantId::new(id), request.into())
        .await?;
    Ok(Json(tenant.into()))
}

/// Deletes a tenant
pub async fn delete_tenant(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TenantResponse>, ApiError> {
    let tenant = state.directory.remove_tenant(TenantId::new(id)).await?;
    Ok(Json(tenant.into()))
}
