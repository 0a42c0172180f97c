//! Ground distance estimation from map coordinates.

use crate::GeoPoint;

/// Kilometers per degree of latitude.
/// Valid only for small spans; longitude degrees shrink toward the poles
/// and this constant ignores that.
pub const KM_PER_DEGREE: f64 = 111.3;

/// Round to `dp` decimal digits
pub(crate) fn round_to(x: f64, dp: u32) -> f64 {
    let factor = 10_f64.powi(dp as i32);
    (x * factor).round() / factor
}

/// Planar Euclidean approximation of the ground distance in kilometers
/// between the session's reference coordinate and a clicked point,
/// rounded to 2 decimal digits. Always non-negative; zero when the click
/// coincides with the reference point (downstream validation rejects a
/// zero distance).
pub fn estimate_distance_km(reference: GeoPoint, target: GeoPoint) -> f64 {
    let d_lat = (reference.lat - target.lat).abs();
    let d_lng = (reference.lng - target.lng).abs();
    round_to((d_lat * d_lat + d_lng * d_lng).sqrt() * KM_PER_DEGREE, 2)
}
