//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the range of the error code:
/// - 0xxx: General errors
/// - 1xxx: Delivery errors
/// - 2xxx: Coupon errors
/// - 3xxx: Promotion errors
/// - 9xxx: System errors
///
/// Every category except [`ErrorCategory::System`] represents a recoverable
/// user-input or business-rule rejection whose message is safe to surface
/// verbatim. System errors are transport/internal faults the caller may
/// retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Delivery errors (1xxx)
    Delivery,
    /// Coupon errors (2xxx)
    Coupon,
    /// Promotion errors (3xxx)
    Promotion,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Delivery,
            2000..3000 => Self::Coupon,
            3000..4000 => Self::Promotion,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Delivery => "delivery",
            Self::Coupon => "coupon",
            Self::Promotion => "promotion",
            Self::System => "system",
        }
    }

    /// Whether errors in this category are recoverable user/business errors
    /// (as opposed to system faults)
    pub fn is_business(&self) -> bool {
        !matches!(self, Self::System)
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
