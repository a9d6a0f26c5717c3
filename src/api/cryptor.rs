use crate::api::neighbors::Neighbors;
use crate::api::region::Region;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;

/// A geohash algorithm bound to one alphabet.
///
/// Implemented by [`Geohash`](crate::Geohash) (base-32) and
/// [`Geohash36`](crate::Geohash36). Coordinates are always `(lat, lng)` in
/// degrees, and a decode `precision` of `0` means "the hash length".
///
/// ```
/// use geohash_rs::{GeoCryptor, Geohash, Geohash36};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cryptors: Vec<Box<dyn GeoCryptor>> = vec![
///     Box::new(Geohash::default()),
///     Box::new(Geohash36::default()),
/// ];
/// for cryptor in &cryptors {
///     let hash = cryptor.encode(51.504444, -0.086666, 8)?;
///     assert!(cryptor.decode_as_region(&hash, 0).contains(&(-0.086666, 51.504444)));
///
///     let (lat, lng, lat_err, lng_err) = cryptor.decode_with_error(&hash, 0);
///     assert!((lat - 51.504444).abs() <= lat_err);
///     assert!((lng + 0.086666).abs() <= lng_err);
/// }
/// # Ok(())
/// # }
/// ```
pub trait GeoCryptor {
    /// The alphabet symbols in index order.
    fn alphabet(&self) -> &str;

    /// Replaces the alphabet. Fails, leaving the old one in place, if the
    /// symbols are not a valid table for this algorithm.
    fn set_alphabet(&mut self, symbols: &str) -> Result<(), GeohashError>;

    /// Encodes a coordinate into a region holding its hash and bounds.
    fn encode_as_region(&self, lat: f64, lng: f64, precision: usize)
    -> Result<Region, GeohashError>;

    /// Decodes a hash, treating symbols outside the alphabet as index 0.
    fn decode_as_region(&self, hash: &str, precision: usize) -> Region;

    /// Decodes a hash, rejecting symbols outside the alphabet.
    fn decode_as_region_strict(&self, hash: &str, precision: usize)
    -> Result<Region, GeohashError>;

    /// The eight cells around `hash` at the same precision.
    fn neighbors(&self, hash: &str, precision: usize) -> Neighbors;

    fn encode(&self, lat: f64, lng: f64, precision: usize) -> Result<String, GeohashError> {
        Ok(self.encode_as_region(lat, lng, precision)?.hash)
    }

    /// Returns `(hash, lat_err, lng_err)`.
    fn encode_with_error(
        &self,
        lat: f64,
        lng: f64,
        precision: usize,
    ) -> Result<(String, f64, f64), GeohashError> {
        let Region {
            hash,
            lat_err,
            lng_err,
            ..
        } = self.encode_as_region(lat, lng, precision)?;
        Ok((hash, lat_err, lng_err))
    }

    /// Encodes a `(lng, lat)` tuple, `geo_types::Point` or `geo_types::Coord`.
    fn encode_point<C: Coordinate>(&self, coord: &C, precision: usize) -> Result<String, GeohashError>
    where
        Self: Sized,
    {
        self.encode(coord.lat(), coord.lng(), precision)
    }

    /// Center of the hash as `(lat, lng)`, rounded to `precision` decimals.
    fn decode(&self, hash: &str, precision: usize) -> (f64, f64) {
        let region = self.decode_as_region(hash, precision);
        region.bounds.center(region.precision)
    }

    /// Returns `(lat, lng, lat_err, lng_err)`.
    fn decode_with_error(&self, hash: &str, precision: usize) -> (f64, f64, f64, f64) {
        let region = self.decode_as_region(hash, precision);
        let (lat, lng) = region.bounds.center(region.precision);
        (lat, lng, region.lat_err, region.lng_err)
    }

    fn decode_strict(&self, hash: &str, precision: usize) -> Result<(f64, f64), GeohashError> {
        let region = self.decode_as_region_strict(hash, precision)?;
        Ok(region.bounds.center(region.precision))
    }
}

/// Decimal places to report for `hash`: `precision`, or the hash length when `0`.
pub(crate) fn effective_precision(hash: &str, precision: usize) -> usize {
    if precision == 0 {
        hash.chars().count()
    } else {
        precision
    }
}
