//! Unified error system for the checkout platform
//!
//! This module provides a comprehensive error handling system with:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Delivery errors
//! - 2xxx: Coupon errors
//! - 3xxx: Promotion errors
//! - 9xxx: System errors
//!
//! Business rejections (delivery/coupon/promotion ranges) carry messages
//! intended to be shown verbatim to the end user; system errors are faults
//! the caller may retry.
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! // Create a simple error
//! let err = AppError::new(ErrorCode::CouponExpired);
//!
//! // Create an error with custom message and details
//! let err = AppError::with_message(ErrorCode::CouponBelowMinimum, "Minimum order of £15.00 required")
//!     .with_detail("minimum_order", 15.0);
//!
//! // Convert to API response
//! let response = ApiResponse::<()>::error(&err);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
