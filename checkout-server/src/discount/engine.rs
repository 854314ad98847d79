//! Discount Engine
//!
//! Validates coupon and promotion codes against a cart and computes the
//! resulting discount. Validation is a pure read; the `redeem_*` variants
//! additionally consume a use through the store's atomic conditional
//! increment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shared::Timestamp;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Coupon, Promotion};
use shared::now_millis;

use super::calculator::{PromotionBenefit, coupon_discount, promotion_benefit};
use super::coupon::check_coupon;
use super::promotion::check_promotion;
use crate::store::{DiscountStore, canonical_code};

/// Approved coupon with its computed discount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponApproval {
    pub coupon: Coupon,
    pub discount: f64,
}

/// Approved promotion with its benefit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionApproval {
    pub promotion: Promotion,
    pub benefit: PromotionBenefit,
}

/// Validates and redeems discount codes.
///
/// Every rejection is a business-category [`AppError`] with a distinct code
/// and a message safe to show verbatim; only a store transport failure
/// surfaces as a System-category `StoreUnavailable` fault, so the UI can
/// offer a retry instead of blaming the code.
#[derive(Clone)]
pub struct DiscountEngine {
    store: Arc<dyn DiscountStore>,
}

impl DiscountEngine {
    pub fn new(store: Arc<dyn DiscountStore>) -> Self {
        Self { store }
    }

    /// Validate a coupon code against a cart subtotal.
    pub async fn validate_coupon(
        &self,
        code: &str,
        restaurant_id: &str,
        subtotal: f64,
    ) -> AppResult<CouponApproval> {
        self.validate_coupon_at(code, restaurant_id, subtotal, now_millis())
            .await
    }

    /// Same pipeline with an explicit clock, for deterministic callers
    pub async fn validate_coupon_at(
        &self,
        code: &str,
        restaurant_id: &str,
        subtotal: f64,
        now_ms: Timestamp,
    ) -> AppResult<CouponApproval> {
        let code = Self::require_inputs(code, restaurant_id)?;

        let coupon = self
            .store
            .find_coupon_by_code(&code)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::CouponNotFound))?;

        check_coupon(&coupon, restaurant_id, subtotal, now_ms)?;

        let discount = coupon_discount(&coupon, subtotal);
        Ok(CouponApproval { coupon, discount })
    }

    /// Validate a promotion code for a restaurant against a cart subtotal.
    pub async fn validate_promotion_code(
        &self,
        code: &str,
        restaurant_id: &str,
        subtotal: f64,
    ) -> AppResult<PromotionApproval> {
        self.validate_promotion_code_at(code, restaurant_id, subtotal, now_millis())
            .await
    }

    /// Same pipeline with an explicit clock, for deterministic callers
    pub async fn validate_promotion_code_at(
        &self,
        code: &str,
        restaurant_id: &str,
        subtotal: f64,
        now_ms: Timestamp,
    ) -> AppResult<PromotionApproval> {
        let code = Self::require_inputs(code, restaurant_id)?;

        // Lookup is scoped by restaurant AND code AND active state; a
        // promotion code is always restaurant-local
        let promotion = self
            .store
            .find_promotion_by_code(restaurant_id, &code)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::PromotionNotFound))?;

        check_promotion(&promotion, subtotal, now_ms)?;

        let benefit = promotion_benefit(&promotion, subtotal)?;
        Ok(PromotionApproval { promotion, benefit })
    }

    /// Validate a coupon and atomically consume one use.
    ///
    /// The store increments the usage counter only while it is below the
    /// limit, so two concurrent redemptions of the last remaining use cannot
    /// both succeed; the loser sees the usage-limit rejection.
    pub async fn redeem_coupon(
        &self,
        code: &str,
        restaurant_id: &str,
        subtotal: f64,
    ) -> AppResult<CouponApproval> {
        let approval = self.validate_coupon(code, restaurant_id, subtotal).await?;

        let consumed = self.store.consume_coupon_use(&approval.coupon.code).await?;
        if !consumed {
            return Err(AppError::new(ErrorCode::CouponUsageLimitReached));
        }
        Ok(approval)
    }

    /// Validate a promotion code and atomically consume one use.
    pub async fn redeem_promotion(
        &self,
        code: &str,
        restaurant_id: &str,
        subtotal: f64,
    ) -> AppResult<PromotionApproval> {
        let approval = self
            .validate_promotion_code(code, restaurant_id, subtotal)
            .await?;

        let promo_code = approval
            .promotion
            .promotion_code
            .as_deref()
            .unwrap_or_default();
        let consumed = self
            .store
            .consume_promotion_use(restaurant_id, promo_code)
            .await?;
        if !consumed {
            return Err(AppError::new(ErrorCode::PromotionUsageLimitReached));
        }
        Ok(approval)
    }

    /// Canonicalize the code and fail fast on missing arguments, before any
    /// store I/O
    fn require_inputs(code: &str, restaurant_id: &str) -> AppResult<String> {
        if restaurant_id.trim().is_empty() {
            return Err(AppError::required_field("restaurant_id"));
        }
        let code = canonical_code(code);
        if code.is_empty() {
            return Err(AppError::required_field("code"));
        }
        Ok(code)
    }
}
