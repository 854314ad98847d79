//! Checkout API Module
//!
//! The order-time surface: delivery quotes and discount code entry.

mod handler;

use axum::{Router, routing::post};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/checkout", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/quote", post(handler::quote))
        .route("/coupon", post(handler::validate_coupon))
        .route("/coupon/redeem", post(handler::redeem_coupon))
        .route("/promotion", post(handler::validate_promotion))
        .route("/promotion/redeem", post(handler::redeem_promotion))
}
