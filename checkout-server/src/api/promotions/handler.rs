//! Promotion API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use validator::Validate;

use shared::models::{Promotion, PromotionCreate, PromotionUpdate};

use crate::core::AppState;
use crate::store::StoreError;
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Debug, Deserialize)]
pub struct PromotionListQuery {
    pub restaurant_id: String,
}

/// GET /api/promotions?restaurant_id= - all promotions for a restaurant
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PromotionListQuery>,
) -> AppResult<Json<Vec<Promotion>>> {
    let promotions = state
        .store
        .promotions_for_restaurant(&query.restaurant_id)
        .await?;
    Ok(Json(promotions))
}

/// POST /api/promotions - create a promotion
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PromotionCreate>,
) -> AppResult<Json<Promotion>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if payload.end_date < payload.start_date {
        return Err(AppError::validation("end_date must not precede start_date"));
    }

    let promotion = state
        .store
        .create_promotion(payload)
        .await
        .map_err(|err| match err {
            StoreError::Duplicate(_) => AppError::new(ErrorCode::PromotionCodeExists),
            other => other.into(),
        })?;
    Ok(Json(promotion))
}

/// PUT /api/promotions/{id} - update a promotion
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PromotionUpdate>,
) -> AppResult<Json<Promotion>> {
    let promotion = state
        .store
        .update_promotion(&id, payload)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => AppError::new(ErrorCode::PromotionNotFound),
            other => other.into(),
        })?;
    Ok(Json(promotion))
}

/// DELETE /api/promotions/{id} - delete a promotion
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.store.delete_promotion(&id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::PromotionNotFound));
    }
    Ok(Json(true))
}
