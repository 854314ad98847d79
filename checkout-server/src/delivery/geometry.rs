//! Polygon Containment
//!
//! Point-in-polygon test used for delivery zone resolution.

use shared::GeoPoint;

/// Even-odd (ray casting) point-in-polygon test.
///
/// Casts a horizontal ray from the point and toggles containment on every
/// polygon edge whose longitudes straddle the point's longitude and whose
/// latitude, interpolated at that longitude, lies above the point's latitude.
/// The polygon is implicitly closed (last vertex connects to the first).
///
/// Operates on raw lat/lng as a planar approximation, which holds for
/// city-scale zones but not near the poles or across the antimeridian.
/// Points exactly on an edge or vertex classify arbitrarily but
/// deterministically.
///
/// A polygon with fewer than 3 vertices contains nothing.
pub fn polygon_contains(polygon: &[GeoPoint], point: GeoPoint) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (vi, vj) = (polygon[i], polygon[j]);
        if (vi.lng > point.lng) != (vj.lng > point.lng) {
            let lat_at_lng =
                (vj.lat - vi.lat) * (point.lng - vi.lng) / (vj.lng - vi.lng) + vi.lat;
            if point.lat < lat_at_lng {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
