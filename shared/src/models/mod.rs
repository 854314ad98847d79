//! Domain Models
//!
//! Entities owned by the remote entity store, reproduced here as explicit
//! tagged structs with create/update payloads for the admin surface.

pub mod coupon;
pub mod delivery_zone;
pub mod promotion;

pub use coupon::{Coupon, CouponCreate, CouponUpdate, DiscountType};
pub use delivery_zone::{DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate};
pub use promotion::{Promotion, PromotionCreate, PromotionType, PromotionUpdate};
