//! Delivery Zone Resolution
//!
//! Maps a customer coordinate to the delivery zone that serves it.

use std::sync::Arc;

use shared::GeoPoint;
use shared::error::{AppError, AppResult};
use shared::models::DeliveryZone;

use super::geometry::polygon_contains;
use crate::store::ZoneStore;

/// Resolves the delivery zone serving a customer location.
///
/// When a restaurant's active zones overlap, the oldest zone wins; candidates
/// are always evaluated in `(created_at, id)` order so the same point against
/// the same zone set resolves identically on every call.
#[derive(Clone)]
pub struct ZoneResolver {
    store: Arc<dyn ZoneStore>,
}

impl ZoneResolver {
    pub fn new(store: Arc<dyn ZoneStore>) -> Self {
        Self { store }
    }

    /// Find the delivery zone containing `point`, if any.
    ///
    /// Returns `Ok(None)` both when no zone covers the point and when the
    /// zone fetch fails: a store outage degrades to "delivery unavailable"
    /// rather than blocking checkout. Precondition violations (empty
    /// restaurant id, non-finite coordinates) fail fast before any I/O.
    pub async fn resolve(
        &self,
        restaurant_id: &str,
        point: GeoPoint,
    ) -> AppResult<Option<DeliveryZone>> {
        if restaurant_id.trim().is_empty() {
            return Err(AppError::required_field("restaurant_id"));
        }
        if !point.is_finite() {
            return Err(AppError::out_of_range("location must be finite lat/lng"));
        }

        let mut zones = match self.store.active_zones(restaurant_id).await {
            Ok(zones) => zones,
            Err(err) => {
                tracing::warn!(
                    restaurant_id,
                    error = %err,
                    "Zone fetch failed, treating location as unserved"
                );
                return Ok(None);
            }
        };

        // Oldest zone wins on overlap; id breaks created_at ties
        zones.sort_by(|a, b| {
            (a.created_at, a.id.as_deref()).cmp(&(b.created_at, b.id.as_deref()))
        });

        Ok(zones
            .into_iter()
            .find(|zone| polygon_contains(&zone.coordinates, point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError, StoreResult};
    use async_trait::async_trait;
    use shared::ErrorCode;
    use shared::models::{DeliveryZoneCreate, DeliveryZoneUpdate};

    fn unit_square() -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 0.0),
        ]
    }

    fn zone(id: &str, restaurant: &str, created_at: i64, active: bool) -> DeliveryZone {
        DeliveryZone {
            id: Some(id.to_string()),
            restaurant_id: restaurant.to_string(),
            name: format!("zone-{}", id),
            coordinates: unit_square(),
            delivery_fee: 3.5,
            estimated_delivery_time: "30-45 min".to_string(),
            min_order_value: 15.0,
            is_active: active,
            created_at,
        }
    }

    /// Zone store stub with a fixed zone list or a simulated outage
    struct FixedZones(StoreResult<Vec<DeliveryZone>>);

    #[async_trait]
    impl ZoneStore for FixedZones {
        async fn active_zones(&self, _restaurant_id: &str) -> StoreResult<Vec<DeliveryZone>> {
            match &self.0 {
                Ok(zones) => Ok(zones.iter().filter(|z| z.is_active).cloned().collect()),
                Err(_) => Err(StoreError::Unavailable("store offline".into())),
            }
        }

        async fn zones_for_restaurant(
            &self,
            restaurant_id: &str,
        ) -> StoreResult<Vec<DeliveryZone>> {
            self.active_zones(restaurant_id).await
        }

        async fn find_zone(&self, _id: &str) -> StoreResult<Option<DeliveryZone>> {
            Ok(None)
        }

        async fn create_zone(&self, _data: DeliveryZoneCreate) -> StoreResult<DeliveryZone> {
            Err(StoreError::Validation("read-only stub".into()))
        }

        async fn update_zone(
            &self,
            id: &str,
            _data: DeliveryZoneUpdate,
        ) -> StoreResult<DeliveryZone> {
            Err(StoreError::NotFound(format!("Zone {} not found", id)))
        }

        async fn delete_zone(&self, _id: &str) -> StoreResult<bool> {
            Ok(false)
        }
    }

    fn resolver_with(zones: Vec<DeliveryZone>) -> ZoneResolver {
        ZoneResolver::new(Arc::new(FixedZones(Ok(zones))))
    }

    #[tokio::test]
    async fn test_resolves_containing_zone() {
        let resolver = resolver_with(vec![zone("a", "r1", 100, true)]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert_eq!(found.unwrap().id.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_point_outside_all_zones() {
        let resolver = resolver_with(vec![zone("a", "r1", 100, true)]);
        let found = resolver
            .resolve("r1", GeoPoint::new(2.0, 2.0))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_no_zones_at_all() {
        let resolver = resolver_with(vec![]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_overlap_resolves_to_oldest_regardless_of_list_order() {
        let older = zone("b", "r1", 100, true);
        let newer = zone("a", "r1", 200, true);

        // Newer zone listed first: oldest must still win
        let resolver = resolver_with(vec![newer.clone(), older.clone()]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert_eq!(found.unwrap().id.as_deref(), Some("b"));

        let resolver = resolver_with(vec![older, newer]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert_eq!(found.unwrap().id.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_created_at_tie_broken_by_id() {
        let resolver =
            resolver_with(vec![zone("z2", "r1", 100, true), zone("z1", "r1", 100, true)]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert_eq!(found.unwrap().id.as_deref(), Some("z1"));
    }

    #[tokio::test]
    async fn test_inactive_zone_never_matches() {
        let resolver = resolver_with(vec![zone("a", "r1", 100, false)]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_degenerate_zone_never_matches() {
        let mut degenerate = zone("a", "r1", 100, true);
        degenerate.coordinates = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        let mut empty = zone("b", "r1", 200, true);
        empty.coordinates = vec![];

        let resolver = resolver_with(vec![degenerate, empty]);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_degrades_to_no_zone() {
        let resolver = ZoneResolver::new(Arc::new(FixedZones(Err(StoreError::Unavailable(
            "store offline".into(),
        )))));
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_empty_restaurant_id_fails_fast() {
        let resolver = resolver_with(vec![]);
        let err = resolver
            .resolve("", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[tokio::test]
    async fn test_non_finite_point_fails_fast() {
        let resolver = resolver_with(vec![]);
        let err = resolver
            .resolve("r1", GeoPoint::new(f64::NAN, 0.5))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[tokio::test]
    async fn test_resolution_via_memory_store() {
        let store = Arc::new(MemoryStore::new());
        store
            .create_zone(DeliveryZoneCreate {
                restaurant_id: "r1".to_string(),
                name: "Centre".to_string(),
                coordinates: unit_square(),
                delivery_fee: 2.0,
                estimated_delivery_time: "20-30 min".to_string(),
                min_order_value: 12.0,
            })
            .await
            .unwrap();

        let resolver = ZoneResolver::new(store);
        let found = resolver
            .resolve("r1", GeoPoint::new(0.5, 0.5))
            .await
            .unwrap();
        assert_eq!(found.unwrap().name, "Centre");
    }
}
