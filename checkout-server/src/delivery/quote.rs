//! Delivery Quote
//!
//! Combines zone resolution with the zone's commercial terms into the
//! discriminated quote consumed by checkout.

use serde::{Deserialize, Serialize};

use shared::GeoPoint;
use shared::error::AppResult;
use shared::models::DeliveryZone;
use shared::ErrorCode;

use super::resolver::ZoneResolver;

/// Quote for delivering to a customer location.
///
/// `available` discriminates the two shapes: an unavailable quote carries
/// only the user-facing `message`; an available quote carries the fee, ETA
/// and minimum-order terms of the matched zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryQuote {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<DeliveryZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DeliveryQuote {
    /// Quote for a location no active zone covers
    pub fn unavailable() -> Self {
        Self {
            available: false,
            delivery_fee: None,
            estimated_time: None,
            min_order_value: None,
            zone_name: None,
            zone: None,
            message: Some(ErrorCode::DeliveryUnavailable.message().to_string()),
        }
    }

    /// Quote from a matched zone
    pub fn from_zone(zone: DeliveryZone) -> Self {
        Self {
            available: true,
            delivery_fee: Some(zone.delivery_fee),
            estimated_time: Some(zone.estimated_delivery_time.clone()),
            min_order_value: Some(zone.min_order_value),
            zone_name: Some(zone.name.clone()),
            zone: Some(zone),
            message: None,
        }
    }
}

/// Produces delivery quotes by resolving the customer location to a zone.
///
/// Pure combinator over [`ZoneResolver`]: every branch that decides *whether*
/// delivery is available lives in the resolver.
#[derive(Clone)]
pub struct QuoteCalculator {
    resolver: ZoneResolver,
}

impl QuoteCalculator {
    pub fn new(resolver: ZoneResolver) -> Self {
        Self { resolver }
    }

    /// Quote delivery from a restaurant to a customer coordinate.
    ///
    /// Only resolver precondition violations propagate as errors; an
    /// unserved or unreachable zone set yields an unavailable quote.
    pub async fn quote(&self, restaurant_id: &str, point: GeoPoint) -> AppResult<DeliveryQuote> {
        match self.resolver.resolve(restaurant_id, point).await? {
            Some(zone) => Ok(DeliveryQuote::from_zone(zone)),
            None => Ok(DeliveryQuote::unavailable()),
        }
    }
}
