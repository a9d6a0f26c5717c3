use geo_types::{Coord, Point};

/// Anything that can be read as a WGS84 longitude/latitude pair.
///
/// Tuples follow the `geo_types` convention of `(x, y)`, i.e.
/// `(longitude, latitude)`.
pub trait Coordinate {
    fn lat(&self) -> f64;
    fn lng(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lat(&self) -> f64 { self.1 }
    fn lng(&self) -> f64 { self.0 }
}

impl Coordinate for Point<f64> {
    fn lat(&self) -> f64 { self.y() }
    fn lng(&self) -> f64 { self.x() }
}

impl Coordinate for Coord<f64> {
    fn lat(&self) -> f64 { self.y }
    fn lng(&self) -> f64 { self.x }
}
