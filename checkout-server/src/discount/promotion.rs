//! Promotion Eligibility
//!
//! Short-circuit validation pipeline for promotion codes. Restaurant scope
//! and active state are part of the store lookup, so the pipeline only
//! covers the window, usage and minimum-order rules.

use shared::Timestamp;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Promotion;

/// Check every eligibility rule for a promotion against an order.
pub fn check_promotion(promotion: &Promotion, subtotal: f64, now_ms: Timestamp) -> AppResult<()> {
    // Inclusive containment: a promotion is live from its start instant
    // through its end instant, both endpoints included
    if !(promotion.start_date..=promotion.end_date).contains(&now_ms) {
        return Err(AppError::new(ErrorCode::PromotionNotActive));
    }

    if let Some(limit) = promotion.usage_limit
        && promotion.usage_count >= limit
    {
        return Err(AppError::new(ErrorCode::PromotionUsageLimitReached));
    }

    if let Some(minimum) = promotion.minimum_order
        && subtotal < minimum
    {
        return Err(AppError::with_message(
            ErrorCode::PromotionBelowMinimum,
            format!("Minimum order of £{:.2} required", minimum),
        )
        .with_detail("minimum_order", minimum));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::PromotionType;

    const NOW: Timestamp = 1_700_000_000_000;

    fn make_promotion() -> Promotion {
        Promotion {
            id: None,
            restaurant_id: "r1".to_string(),
            promotion_code: Some("SUMMER".to_string()),
            promotion_type: PromotionType::PercentageOff,
            discount_value: 20.0,
            minimum_order: None,
            usage_limit: None,
            usage_count: 0,
            start_date: NOW - 1000,
            end_date: NOW + 1000,
            is_active: true,
            created_at: 0,
        }
    }

    #[test]
    fn test_promotion_inside_window_passes() {
        assert!(check_promotion(&make_promotion(), 50.0, NOW).is_ok());
    }

    #[test]
    fn test_window_is_inclusive_at_both_endpoints() {
        let mut promotion = make_promotion();
        promotion.start_date = NOW;
        promotion.end_date = NOW;

        // A window that is exactly "now" at both ends is still valid
        assert!(check_promotion(&promotion, 50.0, NOW).is_ok());
    }

    #[test]
    fn test_outside_window_rejected() {
        let promotion = make_promotion();

        let err = check_promotion(&promotion, 50.0, promotion.start_date - 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::PromotionNotActive);

        let err = check_promotion(&promotion, 50.0, promotion.end_date + 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::PromotionNotActive);
    }

    #[test]
    fn test_usage_limit_boundary() {
        let mut promotion = make_promotion();
        promotion.usage_limit = Some(3);

        promotion.usage_count = 2;
        assert!(check_promotion(&promotion, 50.0, NOW).is_ok());

        promotion.usage_count = 3;
        let err = check_promotion(&promotion, 50.0, NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::PromotionUsageLimitReached);
    }

    #[test]
    fn test_minimum_order_boundary() {
        let mut promotion = make_promotion();
        promotion.minimum_order = Some(30.0);

        assert!(check_promotion(&promotion, 30.0, NOW).is_ok());

        let err = check_promotion(&promotion, 29.99, NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::PromotionBelowMinimum);
        assert_eq!(err.message, "Minimum order of £30.00 required");
    }

    #[test]
    fn test_window_checked_before_usage_and_minimum() {
        let mut promotion = make_promotion();
        promotion.end_date = NOW - 1;
        promotion.usage_limit = Some(1);
        promotion.usage_count = 1;
        promotion.minimum_order = Some(100.0);

        let err = check_promotion(&promotion, 10.0, NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::PromotionNotActive);
    }
}
