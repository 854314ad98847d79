//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Current wall-clock time as Unix milliseconds
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// A geographic coordinate (WGS84 latitude/longitude, decimal degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers (not NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_finite() {
        assert!(GeoPoint::new(51.5, -0.12).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_geo_point_serde() {
        let p = GeoPoint::new(51.5, -0.12);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"lat":51.5,"lng":-0.12}"#);
        let parsed: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }
}
