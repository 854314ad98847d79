//! Utility Module
//!
//! - [`logger`] - tracing setup
//! - Error types re-exported from `shared::error`

pub mod logger;

pub use logger::{init_logger, init_logger_with_file};

// Re-export error types from shared for handler convenience
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
