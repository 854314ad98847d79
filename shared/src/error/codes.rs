//! Unified error codes for the checkout platform
//!
//! This module defines all error codes used across the checkout server and
//! its clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Delivery errors
//! - 2xxx: Coupon errors
//! - 3xxx: Promotion errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Delivery ====================
    /// No delivery zone covers the customer location
    DeliveryUnavailable = 1001,
    /// Delivery zone not found
    ZoneNotFound = 1101,
    /// Delivery zone name already exists for the restaurant
    ZoneNameExists = 1102,
    /// Delivery zone polygon is degenerate
    InvalidPolygon = 1103,

    // ==================== 2xxx: Coupon ====================
    /// No coupon matches the entered code
    CouponNotFound = 2001,
    /// Coupon has been deactivated
    CouponInactive = 2002,
    /// Coupon belongs to a different restaurant
    CouponWrongRestaurant = 2003,
    /// Order subtotal is below the coupon minimum
    CouponBelowMinimum = 2004,
    /// Coupon redemption limit reached
    CouponUsageLimitReached = 2005,
    /// Coupon validity window has not started
    CouponNotYetValid = 2006,
    /// Coupon validity window has passed
    CouponExpired = 2007,
    /// Coupon code already exists
    CouponCodeExists = 2008,

    // ==================== 3xxx: Promotion ====================
    /// No active promotion matches the entered code
    PromotionNotFound = 3001,
    /// Promotion window does not cover the current instant
    PromotionNotActive = 3002,
    /// Promotion redemption limit reached
    PromotionUsageLimitReached = 3003,
    /// Order subtotal is below the promotion minimum
    PromotionBelowMinimum = 3004,
    /// Promotion type cannot be applied through a code
    PromotionTypeUnsupported = 3005,
    /// Promotion code already exists for the restaurant
    PromotionCodeExists = 3006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Entity store unreachable (retryable)
    StoreUnavailable = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the user-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Delivery
            ErrorCode::DeliveryUnavailable => {
                "Sorry, delivery is not available to your location."
            }
            ErrorCode::ZoneNotFound => "Delivery zone not found",
            ErrorCode::ZoneNameExists => "Delivery zone name already exists",
            ErrorCode::InvalidPolygon => "Delivery zone must have at least 3 vertices",

            // Coupon
            ErrorCode::CouponNotFound => "Invalid coupon code",
            ErrorCode::CouponInactive => "This coupon is no longer active",
            ErrorCode::CouponWrongRestaurant => "This coupon is not valid for this restaurant",
            ErrorCode::CouponBelowMinimum => "Order subtotal is below the coupon minimum",
            ErrorCode::CouponUsageLimitReached => "This coupon has reached its usage limit",
            ErrorCode::CouponNotYetValid => "This coupon is not valid yet",
            ErrorCode::CouponExpired => "This coupon has expired",
            ErrorCode::CouponCodeExists => "Coupon code already exists",

            // Promotion
            ErrorCode::PromotionNotFound => "Invalid promotion code",
            ErrorCode::PromotionNotActive => "This promotion is not currently active",
            ErrorCode::PromotionUsageLimitReached => {
                "This promotion has reached its usage limit"
            }
            ErrorCode::PromotionBelowMinimum => "Order subtotal is below the promotion minimum",
            ErrorCode::PromotionTypeUnsupported => {
                "This promotion is applied to order items at checkout"
            }
            ErrorCode::PromotionCodeExists => "Promotion code already exists",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StoreUnavailable => "Service temporarily unavailable, please try again",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Delivery
            1001 => Ok(ErrorCode::DeliveryUnavailable),
            1101 => Ok(ErrorCode::ZoneNotFound),
            1102 => Ok(ErrorCode::ZoneNameExists),
            1103 => Ok(ErrorCode::InvalidPolygon),

            // Coupon
            2001 => Ok(ErrorCode::CouponNotFound),
            2002 => Ok(ErrorCode::CouponInactive),
            2003 => Ok(ErrorCode::CouponWrongRestaurant),
            2004 => Ok(ErrorCode::CouponBelowMinimum),
            2005 => Ok(ErrorCode::CouponUsageLimitReached),
            2006 => Ok(ErrorCode::CouponNotYetValid),
            2007 => Ok(ErrorCode::CouponExpired),
            2008 => Ok(ErrorCode::CouponCodeExists),

            // Promotion
            3001 => Ok(ErrorCode::PromotionNotFound),
            3002 => Ok(ErrorCode::PromotionNotActive),
            3003 => Ok(ErrorCode::PromotionUsageLimitReached),
            3004 => Ok(ErrorCode::PromotionBelowMinimum),
            3005 => Ok(ErrorCode::PromotionTypeUnsupported),
            3006 => Ok(ErrorCode::PromotionCodeExists),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StoreUnavailable),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
