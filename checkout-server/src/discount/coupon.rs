//! Coupon Eligibility
//!
//! Short-circuit validation pipeline for coupon codes.

use shared::Timestamp;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Coupon;

/// Check every eligibility rule for a coupon against an order.
///
/// Rules run in a fixed order and stop at the first failure. Each failure is
/// a distinct business rejection carrying a display-ready message, never a
/// system fault. Time enters as explicit Unix-millis so rules are testable
/// at fixed instants.
pub fn check_coupon(
    coupon: &Coupon,
    restaurant_id: &str,
    subtotal: f64,
    now_ms: Timestamp,
) -> AppResult<()> {
    if !coupon.is_active {
        return Err(AppError::new(ErrorCode::CouponInactive));
    }

    if let Some(ref scope) = coupon.restaurant_id
        && scope != restaurant_id
    {
        return Err(AppError::new(ErrorCode::CouponWrongRestaurant));
    }

    // Subtotal exactly at the minimum passes
    if let Some(minimum) = coupon.minimum_order
        && subtotal < minimum
    {
        return Err(AppError::with_message(
            ErrorCode::CouponBelowMinimum,
            format!("Minimum order of £{:.2} required", minimum),
        )
        .with_detail("minimum_order", minimum));
    }

    if let Some(limit) = coupon.usage_limit
        && coupon.usage_count >= limit
    {
        return Err(AppError::new(ErrorCode::CouponUsageLimitReached));
    }

    if let Some(valid_from) = coupon.valid_from
        && now_ms < valid_from
    {
        return Err(AppError::new(ErrorCode::CouponNotYetValid));
    }

    if let Some(valid_until) = coupon.valid_until
        && now_ms > valid_until
    {
        return Err(AppError::new(ErrorCode::CouponExpired));
    }

    Ok(())
}
