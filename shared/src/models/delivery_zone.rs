//! Delivery Zone Model

use crate::types::{GeoPoint, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery zone entity (配送区域)
///
/// A named polygon service area belonging to one restaurant. Zones for a
/// restaurant may overlap geometrically; overlap resolution is by creation
/// time (oldest wins) and happens in the resolver, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub id: Option<String>,
    pub restaurant_id: String,
    pub name: String,
    /// Ordered polygon vertices; the last vertex connects back to the first
    pub coordinates: Vec<GeoPoint>,
    pub delivery_fee: f64,
    /// Display string shown to the customer, e.g. "30-45 min"
    pub estimated_delivery_time: String,
    pub min_order_value: f64,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Create delivery zone payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DeliveryZoneCreate {
    #[validate(length(min = 1))]
    pub restaurant_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    pub coordinates: Vec<GeoPoint>,
    #[validate(range(min = 0.0))]
    pub delivery_fee: f64,
    pub estimated_delivery_time: String,
    #[validate(range(min = 0.0))]
    pub min_order_value: f64,
}

/// Update delivery zone payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryZoneUpdate {
    pub name: Option<String>,
    pub coordinates: Option<Vec<GeoPoint>>,
    pub delivery_fee: Option<f64>,
    pub estimated_delivery_time: Option<String>,
    pub min_order_value: Option<f64>,
    pub is_active: Option<bool>,
}
