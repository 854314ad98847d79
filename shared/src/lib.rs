//! Shared types for the delivery checkout platform
//!
//! Domain models, the unified error system, and common types used by the
//! checkout server and its clients.

pub mod error;
pub mod models;
pub mod types;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::{GeoPoint, Timestamp, now_millis};
