//! In-Memory Entity Store
//!
//! DashMap-backed implementation of the store traits. Serves as the default
//! backend for local development and as the test double everywhere; the
//! hosted entity store slots in behind the same traits in production
//! deployments.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{
    Coupon, CouponCreate, CouponUpdate, DeliveryZone, DeliveryZoneCreate, DeliveryZoneUpdate,
    Promotion, PromotionCreate, PromotionUpdate,
};
use shared::now_millis;
use uuid::Uuid;

use super::{
    CouponStore, PromotionStore, StoreError, StoreResult, ZoneStore, canonical_code,
};

/// In-memory entity store
///
/// Coupons are keyed by canonical code (platform-wide unique); zones and
/// promotions are keyed by store-assigned uuid.
#[derive(Debug, Default)]
pub struct MemoryStore {
    zones: DashMap<String, DeliveryZone>,
    coupons: DashMap<String, Coupon>,
    promotions: DashMap<String, Promotion>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl ZoneStore for MemoryStore {
    async fn active_zones(&self, restaurant_id: &str) -> StoreResult<Vec<DeliveryZone>> {
        Ok(self
            .zones
            .iter()
            .filter(|z| z.restaurant_id == restaurant_id && z.is_active)
            .map(|z| z.clone())
            .collect())
    }

    async fn zones_for_restaurant(&self, restaurant_id: &str) -> StoreResult<Vec<DeliveryZone>> {
        Ok(self
            .zones
            .iter()
            .filter(|z| z.restaurant_id == restaurant_id)
            .map(|z| z.clone())
            .collect())
    }

    async fn find_zone(&self, id: &str) -> StoreResult<Option<DeliveryZone>> {
        Ok(self.zones.get(id).map(|z| z.clone()))
    }

    async fn create_zone(&self, data: DeliveryZoneCreate) -> StoreResult<DeliveryZone> {
        let duplicate = self
            .zones
            .iter()
            .any(|z| z.restaurant_id == data.restaurant_id && z.name == data.name);
        if duplicate {
            return Err(StoreError::Duplicate(format!(
                "Zone '{}' already exists for restaurant {}",
                data.name, data.restaurant_id
            )));
        }

        let id = Self::next_id();
        let zone = DeliveryZone {
            id: Some(id.clone()),
            restaurant_id: data.restaurant_id,
            name: data.name,
            coordinates: data.coordinates,
            delivery_fee: data.delivery_fee,
            estimated_delivery_time: data.estimated_delivery_time,
            min_order_value: data.min_order_value,
            is_active: true,
            created_at: now_millis(),
        };
        self.zones.insert(id, zone.clone());
        Ok(zone)
    }

    async fn update_zone(&self, id: &str, data: DeliveryZoneUpdate) -> StoreResult<DeliveryZone> {
        let mut zone = self
            .zones
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("Zone {} not found", id)))?;

        if let Some(name) = data.name {
            zone.name = name;
        }
        if let Some(coordinates) = data.coordinates {
            zone.coordinates = coordinates;
        }
        if let Some(delivery_fee) = data.delivery_fee {
            zone.delivery_fee = delivery_fee;
        }
        if let Some(estimated_delivery_time) = data.estimated_delivery_time {
            zone.estimated_delivery_time = estimated_delivery_time;
        }
        if let Some(min_order_value) = data.min_order_value {
            zone.min_order_value = min_order_value;
        }
        if let Some(is_active) = data.is_active {
            zone.is_active = is_active;
        }

        Ok(zone.clone())
    }

    async fn delete_zone(&self, id: &str) -> StoreResult<bool> {
        Ok(self.zones.remove(id).is_some())
    }
}

#[async_trait]
impl CouponStore for MemoryStore {
    async fn find_coupon_by_code(&self, code: &str) -> StoreResult<Option<Coupon>> {
        Ok(self.coupons.get(code).map(|c| c.clone()))
    }

    async fn create_coupon(&self, data: CouponCreate) -> StoreResult<Coupon> {
        let code = canonical_code(&data.code);
        if self.coupons.contains_key(&code) {
            return Err(StoreError::Duplicate(format!(
                "Coupon '{}' already exists",
                code
            )));
        }

        let coupon = Coupon {
            id: Some(Self::next_id()),
            code: code.clone(),
            restaurant_id: data.restaurant_id,
            discount_type: data.discount_type,
            discount_value: data.discount_value,
            max_discount: data.max_discount,
            minimum_order: data.minimum_order,
            usage_limit: data.usage_limit,
            usage_count: 0,
            valid_from: data.valid_from,
            valid_until: data.valid_until,
            assigned_to_user_email: data.assigned_to_user_email,
            is_active: true,
            created_at: now_millis(),
        };
        self.coupons.insert(code, coupon.clone());
        Ok(coupon)
    }

    async fn update_coupon(&self, code: &str, data: CouponUpdate) -> StoreResult<Coupon> {
        let code = canonical_code(code);
        let mut coupon = self
            .coupons
            .get_mut(&code)
            .ok_or_else(|| StoreError::NotFound(format!("Coupon {} not found", code)))?;

        if let Some(discount_value) = data.discount_value {
            coupon.discount_value = discount_value;
        }
        if let Some(max_discount) = data.max_discount {
            coupon.max_discount = Some(max_discount);
        }
        if let Some(minimum_order) = data.minimum_order {
            coupon.minimum_order = Some(minimum_order);
        }
        if let Some(usage_limit) = data.usage_limit {
            coupon.usage_limit = Some(usage_limit);
        }
        if let Some(valid_from) = data.valid_from {
            coupon.valid_from = Some(valid_from);
        }
        if let Some(valid_until) = data.valid_until {
            coupon.valid_until = Some(valid_until);
        }
        if let Some(email) = data.assigned_to_user_email {
            coupon.assigned_to_user_email = Some(email);
        }
        if let Some(is_active) = data.is_active {
            coupon.is_active = is_active;
        }

        Ok(coupon.clone())
    }

    async fn delete_coupon(&self, code: &str) -> StoreResult<bool> {
        Ok(self.coupons.remove(&canonical_code(code)).is_some())
    }

    async fn consume_coupon_use(&self, code: &str) -> StoreResult<bool> {
        // get_mut holds the shard lock, making check-and-increment atomic
        let mut coupon = self
            .coupons
            .get_mut(&canonical_code(code))
            .ok_or_else(|| StoreError::NotFound(format!("Coupon {} not found", code)))?;

        if let Some(limit) = coupon.usage_limit
            && coupon.usage_count >= limit
        {
            return Ok(false);
        }
        coupon.usage_count += 1;
        Ok(true)
    }
}

#[async_trait]
impl PromotionStore for MemoryStore {
    async fn find_promotion_by_code(
        &self,
        restaurant_id: &str,
        code: &str,
    ) -> StoreResult<Option<Promotion>> {
        Ok(self
            .promotions
            .iter()
            .find(|p| {
                p.restaurant_id == restaurant_id
                    && p.is_active
                    && p.promotion_code.as_deref() == Some(code)
            })
            .map(|p| p.clone()))
    }

    async fn promotions_for_restaurant(&self, restaurant_id: &str) -> StoreResult<Vec<Promotion>> {
        Ok(self
            .promotions
            .iter()
            .filter(|p| p.restaurant_id == restaurant_id)
            .map(|p| p.clone())
            .collect())
    }

    async fn find_promotion(&self, id: &str) -> StoreResult<Option<Promotion>> {
        Ok(self.promotions.get(id).map(|p| p.clone()))
    }

    async fn create_promotion(&self, data: PromotionCreate) -> StoreResult<Promotion> {
        let code = data.promotion_code.as_deref().map(canonical_code);

        if let Some(ref code) = code {
            let duplicate = self.promotions.iter().any(|p| {
                p.restaurant_id == data.restaurant_id
                    && p.promotion_code.as_deref() == Some(code.as_str())
            });
            if duplicate {
                return Err(StoreError::Duplicate(format!(
                    "Promotion code '{}' already exists for restaurant {}",
                    code, data.restaurant_id
                )));
            }
        }

        let id = Self::next_id();
        let promotion = Promotion {
            id: Some(id.clone()),
            restaurant_id: data.restaurant_id,
            promotion_code: code,
            promotion_type: data.promotion_type,
            discount_value: data.discount_value,
            minimum_order: data.minimum_order,
            usage_limit: data.usage_limit,
            usage_count: 0,
            start_date: data.start_date,
            end_date: data.end_date,
            is_active: true,
            created_at: now_millis(),
        };
        self.promotions.insert(id, promotion.clone());
        Ok(promotion)
    }

    async fn update_promotion(&self, id: &str, data: PromotionUpdate) -> StoreResult<Promotion> {
        let mut promotion = self
            .promotions
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(format!("Promotion {} not found", id)))?;

        if let Some(code) = data.promotion_code {
            promotion.promotion_code = Some(canonical_code(&code));
        }
        if let Some(promotion_type) = data.promotion_type {
            promotion.promotion_type = promotion_type;
        }
        if let Some(discount_value) = data.discount_value {
            promotion.discount_value = discount_value;
        }
        if let Some(minimum_order) = data.minimum_order {
            promotion.minimum_order = Some(minimum_order);
        }
        if let Some(usage_limit) = data.usage_limit {
            promotion.usage_limit = Some(usage_limit);
        }
        if let Some(start_date) = data.start_date {
            promotion.start_date = start_date;
        }
        if let Some(end_date) = data.end_date {
            promotion.end_date = end_date;
        }
        if let Some(is_active) = data.is_active {
            promotion.is_active = is_active;
        }

        Ok(promotion.clone())
    }

    async fn delete_promotion(&self, id: &str) -> StoreResult<bool> {
        Ok(self.promotions.remove(id).is_some())
    }

    async fn consume_promotion_use(&self, restaurant_id: &str, code: &str) -> StoreResult<bool> {
        let mut entry = self
            .promotions
            .iter_mut()
            .find(|p| {
                p.restaurant_id == restaurant_id && p.promotion_code.as_deref() == Some(code)
            })
            .ok_or_else(|| {
                StoreError::NotFound(format!(
                    "Promotion {} not found for restaurant {}",
                    code, restaurant_id
                ))
            })?;

        if let Some(limit) = entry.usage_limit
            && entry.usage_count >= limit
        {
            return Ok(false);
        }
        entry.usage_count += 1;
        Ok(true)
    }
}
