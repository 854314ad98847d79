//! Checkout Server
//!
//! Delivery quoting and discount engine for the food-ordering platform.
//!
//! # Module structure
//!
//! ```text
//! checkout-server/src/
//! ├── core/       # Configuration, state, server bootstrap
//! ├── store/      # Entity store abstraction + in-memory backend
//! ├── delivery/   # Zone resolution and delivery quotes
//! ├── discount/   # Coupon/promotion validation engine
//! ├── api/        # HTTP routes and handlers
//! └── utils/      # Logging and shared re-exports
//! ```

pub mod api;
pub mod core;
pub mod delivery;
pub mod discount;
pub mod store;
pub mod utils;

// Re-export public types
pub use crate::core::{AppState, Config, Server};
pub use delivery::{DeliveryQuote, QuoteCalculator, ZoneResolver};
pub use discount::{CouponApproval, DiscountEngine, PromotionApproval, PromotionBenefit};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};
