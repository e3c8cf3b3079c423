use serde::{Deserialize, Serialize};

use crate::error::CtaError;

/// Degrees of latitude per mile (about 69 miles per degree).
pub const LATITUDE_DEGREES_PER_MILE: f64 = 1.0 / 69.0;
/// Degrees of longitude per mile at Chicago's latitude (about 51 miles per degree).
pub const LONGITUDE_DEGREES_PER_MILE: f64 = 1.0 / 51.0;

/// Latitudes accepted for a search around the service area.
pub const LATITUDE_BOUNDS: (f64, f64) = (40.0, 43.0);
/// Longitudes accepted for a search around the service area.
pub const LONGITUDE_BOUNDS: (f64, f64) = (-88.0, -87.0);

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the service-area sanity bounds.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CtaError> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }
}

/// Parse a decimal-degree value typed by the user.
pub fn parse_degrees(input: &str) -> Result<f64, CtaError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| CtaError::ParseError(format!("'{}' is not a decimal number", input.trim())))
}

pub fn check_latitude(latitude: f64) -> Result<f64, CtaError> {
    let (min, max) = LATITUDE_BOUNDS;
    if (min..=max).contains(&latitude) {
        Ok(latitude)
    } else {
        Err(CtaError::LatitudeOutOfBounds)
    }
}

pub fn check_longitude(longitude: f64) -> Result<f64, CtaError> {
    let (min, max) = LONGITUDE_BOUNDS;
    if (min..=max).contains(&longitude) {
        Ok(longitude)
    } else {
        Err(CtaError::LongitudeOutOfBounds)
    }
}

/// Latitude/longitude rectangle approximating a radius around a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Box spanning one mile in each direction, bounds rounded to three decimals.
    pub fn one_mile_around(center: Coordinate) -> Self {
        Self {
            lat_min: round3(center.latitude - LATITUDE_DEGREES_PER_MILE),
            lat_max: round3(center.latitude + LATITUDE_DEGREES_PER_MILE),
            lon_min: round3(center.longitude - LONGITUDE_DEGREES_PER_MILE),
            lon_max: round3(center.longitude + LONGITUDE_DEGREES_PER_MILE),
        }
    }

    /// Inclusive containment, matching SQL `BETWEEN`.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
