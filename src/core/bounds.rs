use crate::core::constants::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
use crate::util::error::GeohashError;
use crate::util::round::round_to_precision;
use serde::{Deserialize, Serialize};

/// A latitude/longitude rectangle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub max_lat: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub min_lng: f64,
}

impl Bounds {
    /// The whole earth.
    pub const WORLD: Bounds = Bounds {
        max_lat: MAX_LAT,
        min_lat: MIN_LAT,
        max_lng: MAX_LNG,
        min_lng: MIN_LNG,
    };

    pub fn new(max_lat: f64, min_lat: f64, max_lng: f64, min_lng: f64) -> Self {
        Self {
            max_lat,
            min_lat,
            max_lng,
            min_lng,
        }
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Unrounded midpoint as `(lat, lng)`.
    pub fn midpoint(&self) -> (f64, f64) {
        (
            (self.max_lat + self.min_lat) / 2.0,
            (self.max_lng + self.min_lng) / 2.0,
        )
    }

    /// Midpoint rounded to `precision` decimal places.
    pub fn center(&self, precision: usize) -> (f64, f64) {
        let (lat, lng) = self.midpoint();
        (
            round_to_precision(lat, precision),
            round_to_precision(lng, precision),
        )
    }

    /// Shifts the rectangle by the given offsets without any range checks.
    pub fn translate(&self, dlat: f64, dlng: f64) -> Self {
        Self {
            max_lat: self.max_lat + dlat,
            min_lat: self.min_lat + dlat,
            max_lng: self.max_lng + dlng,
            min_lng: self.min_lng + dlng,
        }
    }

    /// Returns bounds that lie inside the world, wrapping longitude once
    /// around the antimeridian if needed.
    ///
    /// Latitude never wraps: a rectangle beyond a pole is an error.
    pub fn normalized(&self) -> Result<Self, GeohashError> {
        if self.max_lat > MAX_LAT || self.min_lat < MIN_LAT || self.min_lat > self.max_lat {
            return Err(GeohashError::InvalidRegion(format!(
                "latitude bounds [{}, {}] outside [{}, {}]",
                self.min_lat, self.max_lat, MIN_LAT, MAX_LAT
            )));
        }

        let (mut min_lng, mut max_lng) = (self.min_lng, self.max_lng);
        if max_lng > MAX_LNG || min_lng < MIN_LNG {
            if max_lng <= min_lng {
                return Err(GeohashError::InvalidRegion(format!(
                    "longitude bounds [{}, {}] have no consistent orientation",
                    min_lng, max_lng
                )));
            }
            let shift = if max_lng > MAX_LNG { -360.0 } else { 360.0 };
            min_lng += shift;
            max_lng += shift;
        }
        if max_lng > MAX_LNG || min_lng < MIN_LNG || min_lng > max_lng {
            return Err(GeohashError::InvalidRegion(format!(
                "longitude bounds [{}, {}] outside [{}, {}]",
                min_lng, max_lng, MIN_LNG, MAX_LNG
            )));
        }

        Ok(Self {
            max_lat: self.max_lat,
            min_lat: self.min_lat,
            max_lng,
            min_lng,
        })
    }
}

/// Fails unless `lat` is in [-90, 90] and `lng` in [-180, 180].
pub fn check_coordinate(lat: f64, lng: f64) -> Result<(), GeohashError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(GeohashError::LatitudeOutOfRange(lat));
    }
    if !(MIN_LNG..=MAX_LNG).contains(&lng) {
        return Err(GeohashError::LongitudeOutOfRange(lng));
    }
    Ok(())
}
