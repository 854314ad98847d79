//! End-to-end checkout flow tests
//!
//! Drives the quote and discount engines over a seeded in-memory store, plus
//! router-level checks through the HTTP surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use checkout_server::core::{AppState, Config};
use checkout_server::store::{CouponStore, MemoryStore, PromotionStore, ZoneStore};
use checkout_server::{DiscountEngine, QuoteCalculator, ZoneResolver};
use shared::models::{CouponCreate, DeliveryZoneCreate, DiscountType, PromotionCreate, PromotionType};
use shared::{ErrorCode, GeoPoint, now_millis};

fn unit_square() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(1.0, 0.0),
    ]
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());

    store
        .create_zone(DeliveryZoneCreate {
            restaurant_id: "r1".to_string(),
            name: "Central".to_string(),
            coordinates: unit_square(),
            delivery_fee: 3.5,
            estimated_delivery_time: "30-45 min".to_string(),
            min_order_value: 15.0,
        })
        .await
        .unwrap();

    store
        .create_coupon(CouponCreate {
            code: "SAVE10".to_string(),
            restaurant_id: None,
            discount_type: DiscountType::Percentage,
            discount_value: 10.0,
            max_discount: None,
            minimum_order: None,
            usage_limit: None,
            valid_from: None,
            valid_until: None,
            assigned_to_user_email: None,
        })
        .await
        .unwrap();

    store
}

#[tokio::test]
async fn quote_inside_zone_carries_fee_and_minimum() {
    let store = seeded_store().await;
    let quotes = QuoteCalculator::new(ZoneResolver::new(store));

    let quote = quotes.quote("r1", GeoPoint::new(0.5, 0.5)).await.unwrap();

    assert!(quote.available);
    assert_eq!(quote.delivery_fee, Some(3.5));
    assert_eq!(quote.min_order_value, Some(15.0));
    assert_eq!(quote.zone_name.as_deref(), Some("Central"));
}

#[tokio::test]
async fn quote_outside_zone_is_unavailable_with_message() {
    let store = seeded_store().await;
    let quotes = QuoteCalculator::new(ZoneResolver::new(store));

    let quote = quotes.quote("r1", GeoPoint::new(2.0, 2.0)).await.unwrap();

    assert!(!quote.available);
    assert_eq!(
        quote.message.as_deref(),
        Some("Sorry, delivery is not available to your location.")
    );
    assert!(quote.delivery_fee.is_none());
}

#[tokio::test]
async fn platform_coupon_applies_everywhere() {
    let store = seeded_store().await;
    let discounts = DiscountEngine::new(store);

    let approval = discounts
        .validate_coupon("SAVE10", "r1", 50.0)
        .await
        .unwrap();
    assert_eq!(approval.discount, 5.0);
}

#[tokio::test]
async fn restaurant_scoped_coupon_rejected_elsewhere() {
    let store = seeded_store().await;
    store
        .create_coupon(CouponCreate {
            code: "LOCAL5".to_string(),
            restaurant_id: Some("r2".to_string()),
            discount_type: DiscountType::Fixed,
            discount_value: 5.0,
            max_discount: None,
            minimum_order: None,
            usage_limit: None,
            valid_from: None,
            valid_until: None,
            assigned_to_user_email: None,
        })
        .await
        .unwrap();
    let discounts = DiscountEngine::new(store);

    let err = discounts
        .validate_coupon("LOCAL5", "r1", 50.0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::CouponWrongRestaurant);
}

#[tokio::test]
async fn promotion_window_and_free_delivery_flow() {
    let store = seeded_store().await;
    let now = now_millis();
    store
        .create_promotion(PromotionCreate {
            restaurant_id: "r1".to_string(),
            promotion_code: Some("FREEDEL".to_string()),
            promotion_type: PromotionType::FreeDelivery,
            discount_value: 0.0,
            minimum_order: Some(20.0),
            usage_limit: None,
            start_date: now - 60_000,
            end_date: now + 60_000,
        })
        .await
        .unwrap();
    let discounts = DiscountEngine::new(store);

    let approval = discounts
        .validate_promotion_code("FREEDEL", "r1", 25.0)
        .await
        .unwrap();
    // Zero against the subtotal; the caller zeroes the delivery fee
    assert_eq!(approval.benefit.subtotal_discount(), 0.0);

    let err = discounts
        .validate_promotion_code("FREEDEL", "r1", 10.0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PromotionBelowMinimum);
}

#[tokio::test]
async fn concurrent_redemption_never_overshoots_usage_limit() {
    let store = Arc::new(MemoryStore::new());
    store
        .create_coupon(CouponCreate {
            code: "LIMITED".to_string(),
            restaurant_id: None,
            discount_type: DiscountType::Fixed,
            discount_value: 2.0,
            max_discount: None,
            minimum_order: None,
            usage_limit: Some(5),
            valid_from: None,
            valid_until: None,
            assigned_to_user_email: None,
        })
        .await
        .unwrap();
    let discounts = DiscountEngine::new(store.clone());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let engine = discounts.clone();
        handles.push(tokio::spawn(async move {
            engine.redeem_coupon("LIMITED", "r1", 50.0).await.is_ok()
        }));
    }

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap() {
            successes += 1;
        }
    }

    assert_eq!(successes, 5);
    let coupon = store.find_coupon_by_code("LIMITED").await.unwrap().unwrap();
    assert_eq!(coupon.usage_count, 5);
}

// ===== Router-level tests =====

async fn test_app() -> axum::Router {
    let store = seeded_store().await;
    checkout_server::api::router(AppState::new(Config::with_port(0), store))
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn quote_endpoint_round_trip() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/checkout/quote",
            serde_json::json!({
                "restaurant_id": "r1",
                "location": { "lat": 0.5, "lng": 0.5 }
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let quote: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(quote["available"], true);
    assert_eq!(quote["delivery_fee"], 3.5);
    assert_eq!(quote["zone_name"], "Central");
}

#[tokio::test]
async fn unknown_coupon_maps_to_404_with_reason_code() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/checkout/coupon",
            serde_json::json!({
                "code": "BOGUS",
                "restaurant_id": "r1",
                "subtotal": 50.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload["code"], 2001);
    assert_eq!(payload["message"], "Invalid coupon code");
}

#[tokio::test]
async fn coupon_endpoint_accepts_mixed_case_codes() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/checkout/coupon",
            serde_json::json!({
                "code": "  save10 ",
                "restaurant_id": "r1",
                "subtotal": 50.0
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let approval: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(approval["discount"], 5.0);
    assert_eq!(approval["coupon"]["code"], "SAVE10");
}

#[tokio::test]
async fn zone_admin_round_trip() {
    let app = test_app().await;

    // Degenerate polygon is refused at the admin boundary
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/zones",
            serde_json::json!({
                "restaurant_id": "r1",
                "name": "Sliver",
                "coordinates": [ { "lat": 0.0, "lng": 0.0 }, { "lat": 1.0, "lng": 1.0 } ],
                "delivery_fee": 2.0,
                "estimated_delivery_time": "20-30 min",
                "min_order_value": 10.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A proper polygon is accepted
    let response = app
        .oneshot(post_json(
            "/api/zones",
            serde_json::json!({
                "restaurant_id": "r1",
                "name": "North",
                "coordinates": [
                    { "lat": 2.0, "lng": 2.0 },
                    { "lat": 2.0, "lng": 3.0 },
                    { "lat": 3.0, "lng": 3.0 }
                ],
                "delivery_fee": 4.0,
                "estimated_delivery_time": "45-60 min",
                "min_order_value": 20.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
