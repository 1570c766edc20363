// WGS84 degrees -> legacy Tokyo datum arc-seconds.
//
// The adjustment is a fixed empirical approximation shared with the travel
// search service. It is reproduced exactly; do not swap it for a rigorous
// geodetic transform or results stop lining up with the service.

use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// A WGS84 coordinate in signed degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A legacy-datum coordinate in arc-seconds, always rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegacyCoordinate {
    latitude: f64,
    longitude: f64,
}

impl LegacyCoordinate {
    /// Builds a coordinate from seconds values, rounding both to two decimals.
    pub fn from_seconds(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round2(latitude),
            longitude: round2(longitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Rounds half away from zero to two fractional digits.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn degrees_to_seconds(degrees: f64) -> f64 {
    degrees * SECONDS_PER_DEGREE
}

/// Applies the datum shift, still in degrees and unrounded.
pub fn adjust_to_legacy_datum(wgs84: GeoCoordinate) -> GeoCoordinate {
    let lat = wgs84.latitude;
    let lng = wgs84.longitude;

    let lat_adj = lat - 0.00010695 * lat + 0.000017464 * lng + 0.0046017;
    let lng_adj = lng - 0.000046038 * lat - 0.000083043 * lng + 0.010040;

    GeoCoordinate::new(lat_adj, lng_adj)
}

pub fn to_legacy_datum_seconds(wgs84: GeoCoordinate) -> LegacyCoordinate {
    let adjusted = adjust_to_legacy_datum(wgs84);
    LegacyCoordinate::from_seconds(
        degrees_to_seconds(adjusted.latitude),
        degrees_to_seconds(adjusted.longitude),
    )
}
