//! Great-circle distance between WGS84 coordinates.

use crate::error::CoreError;

/// Mean Earth radius used for distance estimates.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two lat/lng points (degrees).
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round a distance to two decimal places for display.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Latitude must lie in [-90, 90] and longitude in [-180, 180]. NaN is rejected.
pub fn check_coordinate(lat: f64, lng: f64) -> Result<(), CoreError> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(CoreError::InvalidCoordinate(format!("latitude {lat} out of range")));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(CoreError::InvalidCoordinate(format!("longitude {lng} out of range")));
    }
    Ok(())
}
