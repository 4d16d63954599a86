//! Property handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::directory::{CreatePropertyRequest, PropertyResponse};
use crate::{error::ApiError, AppState};

/// Lists every property
pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let properties = state.directory.list_properties().await?;
    Ok(Json(properties.into_iter().map(PropertyResponse::from).collect()))
}

/// Creates a property
pub async fn create_property(
    State(state): State<AppState>,
    Json(request): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<PropertyResponse>), ApiError> {
    let property = state.directory.create_property(request.into()).await?;
    Ok((StatusCode::CREATED, Json(property.into())))
}
