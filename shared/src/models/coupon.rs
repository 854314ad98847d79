//! Coupon Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// Coupon entity (优惠券)
///
/// A redeemable code, optionally restaurant-scoped, optionally assigned to a
/// single user. Codes are stored canonicalized to uppercase and matched
/// exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    pub id: Option<String>,
    pub code: String,
    /// None ⇒ platform-wide coupon
    pub restaurant_id: Option<String>,
    pub discount_type: DiscountType,
    /// Percentage (0-100) or fixed currency amount depending on type
    pub discount_value: f64,
    /// Cap on the computed discount; only meaningful for percentage coupons
    pub max_discount: Option<f64>,
    pub minimum_order: Option<f64>,
    pub usage_limit: Option<u32>,
    pub usage_count: u32,
    /// Valid from datetime (Unix millis)
    pub valid_from: Option<Timestamp>,
    /// Valid until datetime (Unix millis)
    pub valid_until: Option<Timestamp>,
    /// None ⇒ redeemable by any user
    pub assigned_to_user_email: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Create coupon payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CouponCreate {
    #[validate(length(min = 1))]
    pub code: String,
    pub restaurant_id: Option<String>,
    pub discount_type: DiscountType,
    #[validate(range(min = 0.0))]
    pub discount_value: f64,
    pub max_discount: Option<f64>,
    pub minimum_order: Option<f64>,
    pub usage_limit: Option<u32>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    #[validate(email)]
    pub assigned_to_user_email: Option<String>,
}

/// Update coupon payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponUpdate {
    pub discount_value: Option<f64>,
    pub max_discount: Option<f64>,
    pub minimum_order: Option<f64>,
    pub usage_limit: Option<u32>,
    pub valid_from: Option<Timestamp>,
    pub valid_until: Option<Timestamp>,
    pub assigned_to_user_email: Option<String>,
    pub is_active: Option<bool>,
}
