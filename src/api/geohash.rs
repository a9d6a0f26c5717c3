use crate::api::cryptor::{GeoCryptor, effective_precision};
use crate::api::neighbors::{Neighbors, find_neighbors};
use crate::api::region::Region;
use crate::core::alphabet::{Alphabet, DEFAULT_BASE32};
use crate::core::base32;
use crate::core::bounds::Bounds;
use crate::util::error::GeohashError;
use crate::util::round::round_to_precision;

/// The classic base-32 geohash.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeoCryptor, Geohash};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cryptor = Geohash::default();
/// assert_eq!(cryptor.encode(12.04512315, 118.20385763, 9)?, "wdhh9b9rv");
/// assert_eq!(cryptor.decode("7ztuee", 6), (-2.002258, -3.004761));
///
/// let neighbors = cryptor.neighbors("7ztuee", 6);
/// assert_eq!(
///     neighbors.hashes(),
///     ["7ztue6", "7ztued", "7ztuef", "7ztue7", "7ztueg", "7ztuek", "7ztues", "7ztueu"]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geohash {
    alphabet: Alphabet<32>,
}

impl Default for Geohash {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_BASE32,
        }
    }
}

impl Geohash {
    /// A cryptor over a custom 32-symbol alphabet.
    pub fn with_alphabet(symbols: &str) -> Result<Self, GeohashError> {
        Ok(Self {
            alphabet: Alphabet::new(symbols)?,
        })
    }

    /// Latitude error in degrees of any hash with `precision` symbols.
    pub fn lat_err(precision: usize) -> f64 {
        base32::lat_err(precision)
    }

    /// Longitude error in degrees of any hash with `precision` symbols.
    pub fn lng_err(precision: usize) -> f64 {
        base32::lng_err(precision)
    }

    fn region_from_bounds(&self, bounds: Bounds, hash: &str, precision: usize) -> Region {
        let (half_lat, half_lng) = base32::half_cell(hash.chars().count());
        Region::new(
            bounds,
            round_to_precision(half_lat, precision),
            round_to_precision(half_lng, precision),
            hash.to_string(),
            precision,
        )
    }
}

impl GeoCryptor for Geohash {
    fn alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    fn set_alphabet(&mut self, symbols: &str) -> Result<(), GeohashError> {
        self.alphabet = Alphabet::new(symbols)?;
        Ok(())
    }

    fn encode_as_region(
        &self,
        lat: f64,
        lng: f64,
        precision: usize,
    ) -> Result<Region, GeohashError> {
        let (hash, bounds) = base32::encode(lat, lng, precision, &self.alphabet)?;
        Ok(Region::new(
            bounds,
            base32::lat_err(precision),
            base32::lng_err(precision),
            hash,
            precision,
        ))
    }

    fn decode_as_region(&self, hash: &str, precision: usize) -> Region {
        let bounds = base32::decode_bounds(hash, &self.alphabet);
        self.region_from_bounds(bounds, hash, effective_precision(hash, precision))
    }

    fn decode_as_region_strict(
        &self,
        hash: &str,
        precision: usize,
    ) -> Result<Region, GeohashError> {
        let bounds = base32::decode_bounds_strict(hash, &self.alphabet)?;
        Ok(self.region_from_bounds(bounds, hash, effective_precision(hash, precision)))
    }

    fn neighbors(&self, hash: &str, precision: usize) -> Neighbors {
        let precision = effective_precision(hash, precision);
        let origin = self.decode_as_region(hash, precision);
        let (half_lat, half_lng) = base32::half_cell(precision);

        find_neighbors(&origin, 2.0 * half_lat, 2.0 * half_lng, |lat, lng| {
            self.encode_as_region(lat, lng, precision)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::neighbors::Direction;
    use crate::core::constants::MAX_PRECISION;
    use proptest::prelude::*;

    #[test]
    fn test_encode() -> Result<(), GeohashError> {
        let g = Geohash::default();
        assert_eq!(g.encode(12.04512315, 118.20385763, 9)?, "wdhh9b9rv");
        assert_eq!(g.encode(-2.0, -3.0, 1)?, "7");
        assert_eq!(g.encode(-2.0, -3.0, 6)?, "7ztuee");
        Ok(())
    }

    #[test]
    fn test_encode_invalid_input() {
        let g = Geohash::default();
        assert!(g.encode(90.1, 0.0, 5).is_err());
        assert!(g.encode(0.0, -180.1, 5).is_err());
        assert!(g.encode(0.0, 0.0, 13).is_err());
    }

    #[test]
    fn test_encode_with_error() -> Result<(), GeohashError> {
        let (hash, lat_err, lng_err) = Geohash::default().encode_with_error(-2.0, -3.0, 6)?;
        assert_eq!(hash, "7ztuee");
        assert_eq!(lat_err, 0.002747);
        assert_eq!(lng_err, 0.005493);
        Ok(())
    }

    #[test]
    fn test_encode_point_uses_lng_lat_order() -> Result<(), GeohashError> {
        let g = Geohash::default();
        assert_eq!(g.encode_point(&(-3.0, -2.0), 6)?, "7ztuee");
        assert_eq!(
            g.encode_point(&geo_types::Point::new(118.20385763, 12.04512315), 9)?,
            "wdhh9b9rv"
        );
        Ok(())
    }

    #[test]
    fn test_decode() {
        let g = Geohash::default();
        assert_eq!(g.decode("7ztuee", 6), (-2.002258, -3.004761));
        assert_eq!(g.decode("wdhh9b9rv", 8), (12.04511404, 118.20385695));
        assert_eq!(g.decode("7", 1), (-22.5, -22.5));
        // Precision 0 falls back to the hash length.
        assert_eq!(g.decode("7ztuee", 0), (-2.002258, -3.004761));
    }

    #[test]
    fn test_decode_unknown_symbols_is_lenient() {
        let g = Geohash::default();
        assert_eq!(g.decode("aaaaaaa", 7), (-89.9993134, -179.9993134));
        assert!(matches!(
            g.decode_strict("aaaaaaa", 7),
            Err(GeohashError::UnknownSymbol { symbol: 'a', position: 0 })
        ));
    }

    #[test]
    fn test_decode_with_excessive_precision() {
        let g = Geohash::default();
        let midpoint = g.decode_as_region("7ztuee", 0).bounds.midpoint();
        let (half_lat, half_lng) = base32::half_cell(6);

        assert_eq!(g.decode("7ztuee", 400), midpoint);
        assert_eq!(g.decode("7ztuee", usize::MAX), midpoint);
        assert_eq!(
            g.decode_with_error("7ztuee", 400),
            (midpoint.0, midpoint.1, half_lat, half_lng)
        );
    }

    #[test]
    fn test_decode_with_error() {
        let (lat, lng, lat_err, lng_err) = Geohash::default().decode_with_error("7ztuee", 6);
        assert_eq!((lat, lng), (-2.002258, -3.004761));
        assert_eq!((lat_err, lng_err), (0.002747, 0.005493));
    }

    #[test]
    fn test_decode_as_region_matches_encode() -> Result<(), GeohashError> {
        let g = Geohash::default();
        let encoded = g.encode_as_region(12.04512315, 118.20385763, 9)?;
        let decoded = g.decode_as_region("wdhh9b9rv", 9);
        assert_eq!(encoded, decoded);
        Ok(())
    }

    #[test]
    fn test_neighbors() {
        let neighbors = Geohash::default().neighbors("7ztuee", 6);
        assert_eq!(neighbors.len(), 8);
        assert_eq!(
            neighbors.hashes(),
            vec!["7ztue6", "7ztued", "7ztuef", "7ztue7", "7ztueg", "7ztuek", "7ztues", "7ztueu"]
        );
        // The sixth symbol starts on a latitude bit, so 'g' lies east and 's' north.
        assert_eq!(
            neighbors.get(Direction::North).map(|r| r.hash.as_str()),
            Some("7ztues")
        );
        assert_eq!(
            neighbors.get(Direction::East).map(|r| r.hash.as_str()),
            Some("7ztueg")
        );
        assert_eq!(
            neighbors.get(Direction::SouthWest).map(|r| r.hash.as_str()),
            Some("7ztue6")
        );
    }

    #[test]
    fn test_neighbors_crossing_parent_cell() {
        let neighbors = Geohash::default().neighbors("wdhh9b9rv", 9);
        assert_eq!(
            neighbors.hashes(),
            vec![
                "wdhh9b9rs", "wdhh9b9rt", "wdhh9b9rw", "wdhh9b9ru", "wdhh9b9ry", "wdhh9bc2h",
                "wdhh9bc2j", "wdhh9bc2n"
            ]
        );
    }

    #[test]
    fn test_neighbors_at_north_pole() {
        let neighbors = Geohash::default().neighbors("b", 1);
        assert_eq!(neighbors.len(), 5);
        assert!(neighbors.get(Direction::North).is_none());
        assert!(neighbors.get(Direction::NorthWest).is_none());
        assert!(neighbors.get(Direction::NorthEast).is_none());
        // West of the dateline wraps to the far east.
        assert_eq!(neighbors.hashes(), vec!["x", "8", "9", "z", "c"]);
    }

    #[test]
    fn test_neighbors_at_south_west_corner() {
        let neighbors = Geohash::default().neighbors("0", 1);
        assert_eq!(neighbors.hashes(), vec!["p", "1", "r", "2", "3"]);
        assert!(neighbors.get(Direction::South).is_none());
        assert_eq!(
            neighbors.get(Direction::West).map(|r| r.hash.as_str()),
            Some("p")
        );
    }

    #[test]
    fn test_custom_alphabet() -> Result<(), GeohashError> {
        let mut g = Geohash::with_alphabet("ABCDEFGHIJKLMNOPQRSTUVWXYZ234567")?;
        assert_eq!(g.alphabet(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
        // '7' is index 7 in the default table.
        assert_eq!(g.encode(-2.0, -3.0, 1)?, "H");
        assert_eq!(g.decode("H", 1), (-22.5, -22.5));

        assert!(g.set_alphabet("too short").is_err());
        assert_eq!(g.alphabet(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");

        g.set_alphabet("0123456789bcdefghjkmnpqrstuvwxyz")?;
        assert_eq!(g, Geohash::default());
        Ok(())
    }

    #[test]
    fn test_error_accessors() {
        assert_eq!(Geohash::lat_err(1), 22.5);
        assert_eq!(Geohash::lng_err(12), 1.67638e-7);
    }

    proptest! {
        #[test]
        fn round_trip_within_error(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            p in 1usize..=MAX_PRECISION,
        ) {
            let g = Geohash::default();
            let hash = g.encode(lat, lng, p).unwrap();

            // Unrounded center against the exact half cell.
            let (mid_lat, mid_lng) = g.decode_as_region(&hash, p).bounds.midpoint();
            let (half_lat, half_lng) = base32::half_cell(p);
            prop_assert!((mid_lat - lat).abs() <= half_lat);
            prop_assert!((mid_lng - lng).abs() <= half_lng);

            let (dlat, dlng) = g.decode(&hash, p);
            // Both the center and the error are rounded to p decimals.
            let slack = 10f64.powi(-(p as i32));
            prop_assert!((dlat - lat).abs() <= Geohash::lat_err(p) + slack);
            prop_assert!((dlng - lng).abs() <= Geohash::lng_err(p) + slack);
        }

        #[test]
        fn neighbors_are_symmetric(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            p in 1usize..=MAX_PRECISION,
        ) {
            let g = Geohash::default();
            let hash = g.encode(lat, lng, p).unwrap();
            for (direction, region) in g.neighbors(&hash, p).iter() {
                if let Some(region) = region {
                    let back = g.neighbors(&region.hash, p);
                    let opposite = back.get(direction.opposite()).map(|r| r.hash.as_str());
                    prop_assert_eq!(opposite, Some(hash.as_str()));
                }
            }
        }
    }
}
