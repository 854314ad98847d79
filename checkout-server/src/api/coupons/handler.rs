//! Coupon API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use shared::models::{Coupon, CouponCreate, CouponUpdate};

use crate::core::AppState;
use crate::store::StoreError;
use crate::utils::{AppError, AppResult, ErrorCode};

/// POST /api/coupons - create a coupon
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CouponCreate>,
) -> AppResult<Json<Coupon>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let coupon = state
        .store
        .create_coupon(payload)
        .await
        .map_err(|err| match err {
            StoreError::Duplicate(_) => AppError::new(ErrorCode::CouponCodeExists),
            other => other.into(),
        })?;
    Ok(Json(coupon))
}

/// GET /api/coupons/{code} - fetch a coupon by code
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<Coupon>> {
    let coupon = state
        .store
        .find_coupon_by_code(&crate::store::canonical_code(&code))
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CouponNotFound))?;
    Ok(Json(coupon))
}

/// PUT /api/coupons/{code} - update a coupon
pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<CouponUpdate>,
) -> AppResult<Json<Coupon>> {
    let coupon = state
        .store
        .update_coupon(&code, payload)
        .await
        .map_err(|err| match err {
            StoreError::NotFound(_) => AppError::new(ErrorCode::CouponNotFound),
            other => other.into(),
        })?;
    Ok(Json(coupon))
}

/// DELETE /api/coupons/{code} - delete a coupon
pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<bool>> {
    let deleted = state.store.delete_coupon(&code).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::CouponNotFound));
    }
    Ok(Json(true))
}
