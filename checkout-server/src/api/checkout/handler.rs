//! Checkout API Handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use validator::Validate;

use shared::GeoPoint;

use crate::core::AppState;
use crate::delivery::DeliveryQuote;
use crate::discount::{CouponApproval, PromotionApproval};
use crate::utils::{AppError, AppResult};

/// POST /api/checkout/quote request body
#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[validate(length(min = 1))]
    pub restaurant_id: String,
    pub location: GeoPoint,
}

/// Request body for the coupon/promotion endpoints
#[derive(Debug, Deserialize, Validate)]
pub struct CodeRequest {
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub restaurant_id: String,
    #[validate(range(min = 0.0))]
    pub subtotal: f64,
}

/// POST /api/checkout/quote - delivery availability, fee and ETA
pub async fn quote(
    State(state): State<AppState>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<DeliveryQuote>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let quote = state
        .quotes
        .quote(&payload.restaurant_id, payload.location)
        .await?;
    Ok(Json(quote))
}

/// POST /api/checkout/coupon - validate a coupon code against a cart
pub async fn validate_coupon(
    State(state): State<AppState>,
    Json(payload): Json<CodeRequest>,
) -> AppResult<Json<CouponApproval>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let approval = state
        .discounts
        .validate_coupon(&payload.code, &payload.restaurant_id, payload.subtotal)
        .await?;
    Ok(Json(approval))
}

/// POST /api/checkout/coupon/redeem - validate and consume one use
pub async fn redeem_coupon(
    State(state): State<AppState>,
    Json(payload): Json<CodeRequest>,
) -> AppResult<Json<CouponApproval>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let approval = state
        .discounts
        .redeem_coupon(&payload.code, &payload.restaurant_id, payload.subtotal)
        .await?;
    Ok(Json(approval))
}

/// POST /api/checkout/promotion - validate a promotion code against a cart
pub async fn validate_promotion(
    State(state): State<AppState>,
    Json(payload): Json<CodeRequest>,
) -> AppResult<Json<PromotionApproval>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let approval = state
        .discounts
        .validate_promotion_code(&payload.code, &payload.restaurant_id, payload.subtotal)
        .await?;
    Ok(Json(approval))
}

/// POST /api/checkout/promotion/redeem - validate and consume one use
pub async fn redeem_promotion(
    State(state): State<AppState>,
    Json(payload): Json<CodeRequest>,
) -> AppResult<Json<PromotionApproval>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let approval = state
        .discounts
        .redeem_promotion(&payload.code, &payload.restaurant_id, payload.subtotal)
        .await?;
    Ok(Json(approval))
}
