//! Promotion Model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Promotion type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionType {
    PercentageOff,
    FixedAmountOff,
    FreeDelivery,
    BuyOneGetOne,
}

/// Promotion entity (营销活动)
///
/// A restaurant-scoped marketing rule with an inclusive time window,
/// optionally activated by a code. Distinct from [`super::Coupon`]: always
/// restaurant-local, windowed rather than expiring, and with benefit types
/// beyond plain subtotal discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Option<String>,
    pub restaurant_id: String,
    /// None ⇒ promotion applies automatically, not via code entry
    pub promotion_code: Option<String>,
    pub promotion_type: PromotionType,
    /// Percentage (0-100) or fixed currency amount depending on type;
    /// unused for FREE_DELIVERY and BUY_ONE_GET_ONE
    pub discount_value: f64,
    pub minimum_order: Option<f64>,
    pub usage_limit: Option<u32>,
    pub usage_count: u32,
    /// Window start (Unix millis, inclusive)
    pub start_date: Timestamp,
    /// Window end (Unix millis, inclusive)
    pub end_date: Timestamp,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Create promotion payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PromotionCreate {
    #[validate(length(min = 1))]
    pub restaurant_id: String,
    pub promotion_code: Option<String>,
    pub promotion_type: PromotionType,
    #[validate(range(min = 0.0))]
    pub discount_value: f64,
    pub minimum_order: Option<f64>,
    pub usage_limit: Option<u32>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// Update promotion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionUpdate {
    pub promotion_code: Option<String>,
    pub promotion_type: Option<PromotionType>,
    pub discount_value: Option<f64>,
    pub minimum_order: Option<f64>,
    pub usage_limit: Option<u32>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_active: Option<bool>,
}
