//! API Route Module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`checkout`] - delivery quote and discount code endpoints
//! - [`zones`] - delivery zone management
//! - [`coupons`] - coupon management
//! - [`promotions`] - promotion management

pub mod checkout;
pub mod coupons;
pub mod health;
pub mod promotions;
pub mod zones;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Assemble the full service router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(checkout::router())
        .merge(zones::router())
        .merge(coupons::router())
        .merge(promotions::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
