//! Discount Engine Module
//!
//! Coupon and promotion code validation for checkout: eligibility pipelines,
//! discount computation, and atomic redemption.

mod calculator;
mod coupon;
mod engine;
mod promotion;

pub use calculator::{PromotionBenefit, coupon_discount, promotion_benefit};
pub use coupon::check_coupon;
pub use engine::{CouponApproval, DiscountEngine, PromotionApproval};
pub use promotion::check_promotion;
