//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use shared::models::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};

use crate::core::AppState;
use crate::store::StoreError;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct ZoneListQuery {
    pub restaurant_id: String,
}

/// GET /api/zones?restaurant_id= - all zones for a restaurant
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ZoneListQuery>,
) -> AppResult<Json<Vec<DeliveryZone>>> {
    let zones = state
        .store
        .zones_for_restaurant(&query.restaurant_id)
        .await?;
    Ok(Json(zones))
}

/// POST /api/zones - create a zone
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DeliveryZoneCreate>,
) -> AppResult<Json<DeliveryZone>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    // The resolver tolerates degenerate polygons in stored data, but the
    // admin surface refuses to create them
    if payload.coordinates.len() < 3 {
        return Err(AppError::new(ErrorCode::InvalidPolygon));
    }

    let zone = state
        .store
        .create_zone(payload)
        .await
        .map_err(|err| match err {
            StoreError::Duplicate(_) => AppError::new(ErrorCode::ZoneNameExists),
            other => other.into(),
        })?;
    Ok(Json(zone))
}

/// PUT /api/zones/{id} - update a zone
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<DeliveryZoneUpdate>,
) -> AppResult<Json<DeliveryZone>> {
    let zone = state
        .store
        .update_zone(&id, payload)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => AppError::new(ErrorCode::ZoneNotFound),
            other => other.into(),
        })?;
    Ok(Json(zone))
}

/// DELETE /api/zones/{id} - delete a zone
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.store.delete_zone(&id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::ZoneNotFound));
    }
    Ok(Json(true))
}
