//! Entity Store Abstraction
//!
//! Zones, coupons and promotions are owned by the platform's hosted entity
//! store; the checkout engine only consumes them. This module models that
//! store as injected, object-safe async traits so the engines stay
//! independent of any concrete backend. [`memory::MemoryStore`] is the
//! bundled implementation.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use shared::error::AppError;
use shared::models::{
    Coupon, CouponCreate, CouponUpdate, DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate,
    Promotion, PromotionCreate, PromotionUpdate,
};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure reaching the store. Distinct from [`StoreError::NotFound`]
    /// so callers can offer a retry instead of reporting bad user input.
    #[error("Store unreachable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(msg) => {
                AppError::with_message(shared::ErrorCode::NotFound, msg)
            }
            StoreError::Duplicate(msg) => {
                AppError::with_message(shared::ErrorCode::AlreadyExists, msg)
            }
            StoreError::Validation(msg) => AppError::validation(msg),
            StoreError::Unavailable(msg) => AppError::store_unavailable(msg),
        }
    }
}

/// Delivery zone collection
#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// All zones with `is_active = true` for a restaurant, unordered
    async fn active_zones(&self, restaurant_id: &str) -> StoreResult<Vec<DeliveryZone>>;

    /// All zones for a restaurant, including inactive ones
    async fn zones_for_restaurant(&self, restaurant_id: &str) -> StoreResult<Vec<DeliveryZone>>;

    async fn find_zone(&self, id: &str) -> StoreResult<Option<DeliveryZone>>;
    async fn create_zone(&self, data: DeliveryZoneCreate) -> StoreResult<DeliveryZone>;
    async fn update_zone(&self, id: &str, data: DeliveryZoneUpdate) -> StoreResult<DeliveryZone>;
    async fn delete_zone(&self, id: &str) -> StoreResult<bool>;
}

/// Coupon collection
///
/// Coupon codes are unique platform-wide and stored in canonical uppercase
/// form; lookups are exact matches on the canonical code.
#[async_trait]
pub trait CouponStore: Send + Sync {
    async fn find_coupon_by_code(&self, code: &str) -> StoreResult<Option<Coupon>>;
    async fn create_coupon(&self, data: CouponCreate) -> StoreResult<Coupon>;
    async fn update_coupon(&self, code: &str, data: CouponUpdate) -> StoreResult<Coupon>;
    async fn delete_coupon(&self, code: &str) -> StoreResult<bool>;

    /// Atomically increment `usage_count` if it is below `usage_limit`.
    ///
    /// The bounds check and the increment happen in one critical section, so
    /// two concurrent redemptions of the last remaining use cannot both
    /// succeed. Returns whether the increment happened. Coupons without a
    /// usage limit always increment.
    async fn consume_coupon_use(&self, code: &str) -> StoreResult<bool>;
}

/// Promotion collection
///
/// Promotion codes are only unique within a restaurant, so code lookups are
/// scoped by restaurant id.
#[async_trait]
pub trait PromotionStore: Send + Sync {
    /// Active promotion matching the restaurant AND canonical code
    async fn find_promotion_by_code(
        &self,
        restaurant_id: &str,
        code: &str,
    ) -> StoreResult<Option<Promotion>>;

    async fn promotions_for_restaurant(&self, restaurant_id: &str) -> StoreResult<Vec<Promotion>>;
    async fn find_promotion(&self, id: &str) -> StoreResult<Option<Promotion>>;
    async fn create_promotion(&self, data: PromotionCreate) -> StoreResult<Promotion>;
    async fn update_promotion(&self, id: &str, data: PromotionUpdate) -> StoreResult<Promotion>;
    async fn delete_promotion(&self, id: &str) -> StoreResult<bool>;

    /// Atomic conditional increment, as [`CouponStore::consume_coupon_use`]
    async fn consume_promotion_use(&self, restaurant_id: &str, code: &str) -> StoreResult<bool>;
}

/// Store surface needed by the discount engine
pub trait DiscountStore: CouponStore + PromotionStore {}

impl<T: CouponStore + PromotionStore> DiscountStore for T {}

/// The full store surface consumed by the checkout service
pub trait CheckoutStore: ZoneStore + CouponStore + PromotionStore {}

impl<T: ZoneStore + CouponStore + PromotionStore> CheckoutStore for T {}

/// Canonical form of a coupon/promotion code: trimmed, uppercase
pub fn canonical_code(code: &str) -> String {
    code.trim().to_uppercase()
}
