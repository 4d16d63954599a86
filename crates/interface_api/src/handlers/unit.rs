//! Unit handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use core_kernel::UnitId;

use crate::dto::directory::{CreateUnitRequest, UnitListQuery, UnitResponse, UpdateUnitRequest};
use crate::{error::ApiError, AppState};

/// Lists units, optionally filtered by property
pub async fn list_units(
    State(state): State<AppState>,
    Query(query): Query<UnitListQuery>,
) -> Result<Json<Vec<UnitResponse>>, ApiError> {
    let units = state.directory.list_units(query.property_id).await?;
    Ok(Json(units.into_iter().map(UnitResponse::from).collect()))
}

/// Gets one unit
pub async fn get_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UnitResponse>, ApiError> {
    let unit = state.directory.get_unit(UnitId::new(id)).await?;
    Ok(Json(unit.into()))
}

/// Creates a unit
pub async fn create_unit(
    State(state): State<AppState>,
    Json(request): Json<CreateUnitRequest>,
) -> Result<(StatusCode, Json<UnitResponse>), ApiError> {
    let unit = state.directory.create_unit(request.into()).await?;
    Ok((StatusCode::CREATED, Json(unit.into())))
}

/// Applies a partial update to a unit
pub async fn update_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUnitRequest>,
) -> Result<Json<UnitResponse>, ApiError> {
    let unit = state.directory.update_unit(UnitId::new(id), request.into()).await?;
    Ok(Json(unit.into()))
}

/// Deletes a unit
pub async fn delete_unit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UnitResponse>, ApiError> {
    let unit = state.directory.remove_unit(UnitId::new(id)).await?;
    Ok(Json(unit.into()))
}
