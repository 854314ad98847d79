//! Discount Calculator
//!
//! Computes discount amounts for validated coupons and promotions.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Coupon, DiscountType, Promotion, PromotionType};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Discount amount for a validated coupon against a subtotal.
///
/// Percentage discounts are clamped to `max_discount` when set. Fixed
/// discounts pass through uncapped even above the subtotal; guarding the
/// order total against going negative belongs to the checkout flow.
pub fn coupon_discount(coupon: &Coupon, subtotal: f64) -> f64 {
    match coupon.discount_type {
        DiscountType::Percentage => {
            let discount =
                to_decimal(subtotal) * to_decimal(coupon.discount_value) / Decimal::ONE_HUNDRED;
            let discount = match coupon.max_discount {
                Some(cap) => discount.min(to_decimal(cap)),
                None => discount,
            };
            to_f64(discount)
        }
        DiscountType::Fixed => to_f64(to_decimal(coupon.discount_value)),
    }
}

/// Benefit granted by a validated promotion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromotionBenefit {
    /// Amount off the cart subtotal
    Subtotal { discount: f64 },
    /// Delivery fee waived. The subtotal is untouched; the caller must zero
    /// the fee on the delivery quote instead.
    FreeDelivery,
}

impl PromotionBenefit {
    /// Amount to subtract from the subtotal (zero for free delivery)
    pub fn subtotal_discount(&self) -> f64 {
        match self {
            Self::Subtotal { discount } => *discount,
            Self::FreeDelivery => 0.0,
        }
    }
}

/// Compute the benefit for a validated promotion.
///
/// BUY_ONE_GET_ONE carries no numeric discount; item-level mechanics live in
/// the order flow, so code entry for it is rejected outright rather than
/// approved with a zero discount that reads as success.
pub fn promotion_benefit(promotion: &Promotion, subtotal: f64) -> AppResult<PromotionBenefit> {
    match promotion.promotion_type {
        PromotionType::PercentageOff => {
            // No cap field exists for promotions; percentage is uncapped
            let discount =
                to_decimal(subtotal) * to_decimal(promotion.discount_value) / Decimal::ONE_HUNDRED;
            Ok(PromotionBenefit::Subtotal {
                discount: to_f64(discount),
            })
        }
        PromotionType::FixedAmountOff => Ok(PromotionBenefit::Subtotal {
            discount: to_f64(to_decimal(promotion.discount_value)),
        }),
        PromotionType::FreeDelivery => Ok(PromotionBenefit::FreeDelivery),
        PromotionType::BuyOneGetOne => {
            Err(AppError::new(ErrorCode::PromotionTypeUnsupported))
        }
    }
}
