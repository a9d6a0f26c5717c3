use crate::api::cryptor::{GeoCryptor, effective_precision};
use crate::api::neighbors::{Neighbors, find_neighbors};
use crate::api::region::Region;
use crate::core::alphabet::{Alphabet, DEFAULT_BASE36};
use crate::core::base36;
use crate::core::bounds::Bounds;
use crate::util::error::GeohashError;
use crate::util::round::round_to_precision;

/// Geohash-36: a 6x6 grid per symbol over a case-sensitive 36-symbol alphabet.
///
/// The error pair of a geohash-36 region is the full cell height and width.
///
/// # Example
///
/// ```
/// use geohash_rs::{GeoCryptor, Geohash36};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cryptor = Geohash36::default();
/// assert_eq!(cryptor.encode(51.504444, -0.086666, 10)?, "bdrdC26BqH");
/// assert_eq!(cryptor.decode("bdrdC26BqH", 6), (51.504444, -0.086666));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Geohash36 {
    alphabet: Alphabet<36>,
}

impl Default for Geohash36 {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_BASE36,
        }
    }
}

impl Geohash36 {
    /// A cryptor over a custom 36-symbol alphabet.
    pub fn with_alphabet(symbols: &str) -> Result<Self, GeohashError> {
        Ok(Self {
            alphabet: Alphabet::new(symbols)?,
        })
    }

    fn region_from_bounds(bounds: Bounds, hash: &str, precision: usize) -> Region {
        Region::new(
            bounds,
            round_to_precision(bounds.height(), precision),
            round_to_precision(bounds.width(), precision),
            hash.to_string(),
            precision,
        )
    }
}

impl GeoCryptor for Geohash36 {
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
        let encoded = base36::encode(lat, lng, precision, &self.alphabet)?;
        let (cell_lat, cell_lng) = encoded.cell_size();
        Ok(Region::new(
            encoded.bounds,
            round_to_precision(cell_lat, precision),
            round_to_precision(cell_lng, precision),
            encoded.hash,
            precision,
        ))
    }

    fn decode_as_region(&self, hash: &str, precision: usize) -> Region {
        let bounds = base36::decode_bounds(hash, &self.alphabet);
        Self::region_from_bounds(bounds, hash, effective_precision(hash, precision))
    }

    fn decode_as_region_strict(
        &self,
        hash: &str,
        precision: usize,
    ) -> Result<Region, GeohashError> {
        let bounds = base36::decode_bounds_strict(hash, &self.alphabet)?;
        Ok(Self::region_from_bounds(
            bounds,
            hash,
            effective_precision(hash, precision),
        ))
    }

    fn neighbors(&self, hash: &str, precision: usize) -> Neighbors {
        let precision = effective_precision(hash, precision);
        let origin = self.decode_as_region(hash, precision);
        let (step_lat, step_lng) = (origin.bounds.height(), origin.bounds.width());

        find_neighbors(&origin, step_lat, step_lng, |lat, lng| {
            self.encode_as_region(lat, lng, precision)
        })
    }
}
