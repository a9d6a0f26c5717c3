use crate::core::bounds::Bounds;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use geo::Intersects;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangle a geohash denotes, together with its error estimate.
///
/// Regions come out of every encode and decode call. Reads go through
/// [`Region::validate`], which rejects latitudes beyond a pole and wraps
/// longitudes that crossed the antimeridian.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeoCryptor, Geohash};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let region = Geohash::default().encode_as_region(-2.0, -3.0, 6)?;
/// assert_eq!(region.geohash()?, "7ztuee");
/// assert_eq!(region.center()?, (-2.002258, -3.004761));
/// assert_eq!(region.err_pair(), (0.002747, 0.005493));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Bounds in degrees
    pub bounds: Bounds,
    /// Latitude error in degrees
    pub lat_err: f64,
    /// Longitude error in degrees
    pub lng_err: f64,
    /// Hash that produced this region
    pub hash: String,
    /// Decimal places used when reporting coordinates
    pub precision: usize,
}

impl Region {
    pub(crate) fn new(
        bounds: Bounds,
        lat_err: f64,
        lng_err: f64,
        hash: String,
        precision: usize,
    ) -> Self {
        Self {
            bounds,
            lat_err,
            lng_err,
            hash,
            precision,
        }
    }

    /// Returns the bounds ready to read, with longitude wrapped into
    /// [-180, 180]. The region itself is never modified.
    pub fn validate(&self) -> Result<Bounds, GeohashError> {
        self.bounds.normalized()
    }

    /// Center as `(lat, lng)`, rounded to [`Region::precision`] decimals.
    pub fn center(&self) -> Result<(f64, f64), GeohashError> {
        Ok(self.validate()?.center(self.precision))
    }

    pub fn geohash(&self) -> Result<&str, GeohashError> {
        self.validate()?;
        Ok(&self.hash)
    }

    /// `(lat_err, lng_err)` in degrees.
    pub fn err_pair(&self) -> (f64, f64) {
        (self.lat_err, self.lng_err)
    }

    /// Whether the coordinate lies inside or on the edge of the region.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.to_rect()
            .intersects(&Point::new(coord.lng(), coord.lat()))
    }

    /// The region as a `geo_types::Rect` with x = longitude, y = latitude.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.bounds.min_lng, y: self.bounds.min_lat },
            coord! { x: self.bounds.max_lng, y: self.bounds.max_lat },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// Well-Known Text polygon, e.g. `POLYGON((...))`.
    pub fn to_wkt(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }

    /// GeoJSON Feature with the polygon as geometry and the hash, precision
    /// and error pair as properties.
    pub fn to_geojson(&self) -> String {
        let mut properties = geojson::JsonObject::new();
        properties.insert("geohash".to_string(), serde_json::Value::from(self.hash.as_str()));
        properties.insert("precision".to_string(), serde_json::Value::from(self.precision));
        properties.insert("lat_err".to_string(), serde_json::Value::from(self.lat_err));
        properties.insert("lng_err".to_string(), serde_json::Value::from(self.lng_err));

        let feature = geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.to_polygon())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };
        feature.to_string()
    }
}
