//! Coupon API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/coupons", routes())
}

fn routes() -> Router<AppState> {
    Router::new().route("/", post(handler::create)).route(
        "/{code}",
        get(handler::get_by_code)
            .put(handler::update)
            .delete(handler::delete),
    )
}
