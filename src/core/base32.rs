//! Base-32 geohash: the rectangle is bisected one bit at a time, alternating
//! longitude and latitude, and every 5 bits become one alphabet symbol.

use crate::core::alphabet::Alphabet;
use crate::core::bounds::{Bounds, check_coordinate};
use crate::core::constants::{BITS_PER_SYMBOL, MAX_PRECISION};
use crate::util::error::GeohashError;
use crate::util::round::round_to_precision;

/// The current rectangle of a bisection walk and the axis the next bit refines.
#[derive(Debug, Clone, Copy)]
struct Bisector {
    bounds: Bounds,
    lng_turn: bool,
}

impl Bisector {
    fn new() -> Self {
        Self {
            bounds: Bounds::WORLD,
            lng_turn: true,
        }
    }

    /// Halves the rectangle on the side that holds `(lat, lng)` and returns the bit for that side.
    fn split_toward(&mut self, lat: f64, lng: f64) -> bool {
        let b = &mut self.bounds;
        let bit = if self.lng_turn {
            let mid = (b.min_lng + b.max_lng) / 2.0;
            if mid < lng {
                b.min_lng = mid;
                true
            } else {
                b.max_lng = mid;
                false
            }
        } else {
            let mid = (b.min_lat + b.max_lat) / 2.0;
            if mid < lat {
                b.min_lat = mid;
                true
            } else {
                b.max_lat = mid;
                false
            }
        };
        self.lng_turn = !self.lng_turn;
        bit
    }

    /// Halves the rectangle on the side named by `bit`.
    fn push(&mut self, bit: bool) {
        let b = &mut self.bounds;
        if self.lng_turn {
            let mid = (b.min_lng + b.max_lng) / 2.0;
            if bit { b.min_lng = mid } else { b.max_lng = mid }
        } else {
            let mid = (b.min_lat + b.max_lat) / 2.0;
            if bit { b.min_lat = mid } else { b.max_lat = mid }
        }
        self.lng_turn = !self.lng_turn;
    }
}

/// The bits of `hash`, most significant first, 5 per symbol.
///
/// Symbols missing from the alphabet read as `00000`. The sequence is lazy
/// and finite; call `bits` again to restart it.
pub fn bits<'a>(
    hash: &'a str,
    alphabet: &'a Alphabet<32>,
) -> impl Iterator<Item = bool> + Clone + 'a {
    hash.chars()
        .map(move |c| alphabet.index_of(c).unwrap_or(0))
        .flat_map(|value| {
            (0..BITS_PER_SYMBOL)
                .rev()
                .map(move |shift| (value >> shift) & 1 == 1)
        })
}

/// Encodes a coordinate into `precision` symbols and returns the hash with
/// the rectangle it denotes.
pub fn encode(
    lat: f64,
    lng: f64,
    precision: usize,
    alphabet: &Alphabet<32>,
) -> Result<(String, Bounds), GeohashError> {
    check_coordinate(lat, lng)?;
    check_precision(precision)?;

    let mut bisector = Bisector::new();
    let mut hash = String::with_capacity(precision);
    for _ in 0..precision {
        let mut value = 0;
        for _ in 0..BITS_PER_SYMBOL {
            value = (value << 1) | usize::from(bisector.split_toward(lat, lng));
        }
        hash.push(alphabet.symbol(value));
    }

    Ok((hash, bisector.bounds))
}

/// Rectangle denoted by `hash`, reading unknown symbols as index 0.
pub fn decode_bounds(hash: &str, alphabet: &Alphabet<32>) -> Bounds {
    if let Err(e) = alphabet.check(hash) {
        log::warn!("Decoding geohash {:?} leniently: {}", hash, e);
    }

    let mut bisector = Bisector::new();
    for bit in bits(hash, alphabet) {
        bisector.push(bit);
    }
    bisector.bounds
}

/// Like [`decode_bounds`], but rejects symbols outside the alphabet.
pub fn decode_bounds_strict(hash: &str, alphabet: &Alphabet<32>) -> Result<Bounds, GeohashError> {
    alphabet.check(hash)?;
    Ok(decode_bounds(hash, alphabet))
}

/// Exact half-height and half-width in degrees of a cell at `precision`.
pub fn half_cell(precision: usize) -> (f64, f64) {
    let p = precision as i32;
    let lat_bits = 2 * p + p / 2;
    let lng_bits = 3 * p - p / 2;
    (
        180.0 / (2.0 * 2_f64.powi(lat_bits)),
        360.0 / (2.0 * 2_f64.powi(lng_bits)),
    )
}

/// Latitude error (half cell height) at `precision`, rounded to `precision` decimals.
pub fn lat_err(precision: usize) -> f64 {
    round_to_precision(half_cell(precision).0, precision)
}

/// Longitude error (half cell width) at `precision`, rounded to `precision` decimals.
pub fn lng_err(precision: usize) -> f64 {
    round_to_precision(half_cell(precision).1, precision)
}

fn check_precision(precision: usize) -> Result<(), GeohashError> {
    if precision == 0 || precision > MAX_PRECISION {
        log::debug!("Rejecting base-32 precision {}", precision);
        return Err(GeohashError::InvalidPrecision {
            precision,
            max: MAX_PRECISION,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::BASE32_ALPHABET;
    use proptest::prelude::*;

    fn alphabet() -> Alphabet<32> {
        Alphabet::new(BASE32_ALPHABET).unwrap()
    }

    #[test]
    fn test_encode_known_values() -> Result<(), GeohashError> {
        let a = alphabet();
        assert_eq!(encode(12.04512315, 118.20385763, 9, &a)?.0, "wdhh9b9rv");
        assert_eq!(encode(-2.0, -3.0, 1, &a)?.0, "7");
        assert_eq!(encode(-2.0, -3.0, 6, &a)?.0, "7ztuee");
        Ok(())
    }

    #[test]
    fn test_encode_world_corners() -> Result<(), GeohashError> {
        let a = alphabet();
        let (hash, bounds) = encode(90.0, 180.0, 5, &a)?;
        assert_eq!(hash, "zzzzz");
        assert_eq!(bounds.max_lat, 90.0);
        assert_eq!(bounds.max_lng, 180.0);

        assert_eq!(encode(-90.0, -180.0, 5, &a)?.0, "00000");
        // Midpoints fall to the lower half.
        assert_eq!(encode(0.0, 0.0, 3, &a)?.0, "7zz");
        Ok(())
    }

    #[test]
    fn test_encode_rejects_bad_input() {
        let a = alphabet();
        assert_eq!(
            encode(91.0, 0.0, 5, &a),
            Err(GeohashError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            encode(0.0, 181.0, 5, &a),
            Err(GeohashError::LongitudeOutOfRange(181.0))
        );
        assert_eq!(
            encode(0.0, 0.0, 13, &a),
            Err(GeohashError::InvalidPrecision {
                precision: 13,
                max: 12
            })
        );
        assert!(encode(0.0, 0.0, 0, &a).is_err());
    }

    #[test]
    fn test_decode_bounds_matches_encode() -> Result<(), GeohashError> {
        let a = alphabet();
        let (hash, bounds) = encode(-2.0, -3.0, 6, &a)?;
        assert_eq!(decode_bounds(&hash, &a), bounds);
        Ok(())
    }

    #[test]
    fn test_decode_unknown_symbols_leniently() {
        let a = alphabet();
        assert_eq!(decode_bounds("aaa", &a), decode_bounds("000", &a));
        assert!(matches!(
            decode_bounds_strict("aaa", &a),
            Err(GeohashError::UnknownSymbol { symbol: 'a', position: 0 })
        ));
    }

    #[test]
    fn test_bits_order() {
        let a = alphabet();
        // 'e' is index 13 = 0b01101
        let collected: Vec<bool> = bits("e", &a).collect();
        assert_eq!(collected, vec![false, true, true, false, true]);
        assert_eq!(bits("wdhh9b9rv", &a).count(), 45);
        assert_eq!(bits("", &a).count(), 0);
    }

    #[test]
    fn test_bits_clone_continues_independently() {
        let a = alphabet();
        let mut it = bits("z0", &a);
        it.next();
        let rest: Vec<bool> = it.clone().collect();
        assert_eq!(rest.len(), 9);
        assert_eq!(it.count(), 9);
    }

    #[test]
    fn test_error_values() {
        assert_eq!(lat_err(1), 22.5);
        assert_eq!(lng_err(1), 22.5);
        assert_eq!(lat_err(2), 2.81);
        assert_eq!(lng_err(2), 5.63);
        assert_eq!(lat_err(6), 0.002747);
        assert_eq!(lng_err(6), 0.005493);
    }

    #[test]
    fn test_error_formula_matches_bisection() -> Result<(), GeohashError> {
        let a = alphabet();
        for p in 1..=MAX_PRECISION {
            let (_, bounds) = encode(-2.0, -3.0, p, &a)?;
            let (half_lat, half_lng) = half_cell(p);
            assert_eq!(bounds.height() / 2.0, half_lat);
            assert_eq!(bounds.width() / 2.0, half_lng);
            assert_eq!(round_to_precision(bounds.height() / 2.0, p), lat_err(p));
            assert_eq!(round_to_precision(bounds.width() / 2.0, p), lng_err(p));
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn error_formula_exact_everywhere(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            p in 1usize..=12,
        ) {
            let (_, bounds) = encode(lat, lng, p, &alphabet()).unwrap();
            let (half_lat, half_lng) = half_cell(p);
            prop_assert_eq!(bounds.height() / 2.0, half_lat);
            prop_assert_eq!(bounds.width() / 2.0, half_lng);
        }

        #[test]
        fn encoded_cell_contains_point(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            p in 1usize..=12,
        ) {
            let (_, b) = encode(lat, lng, p, &alphabet()).unwrap();
            prop_assert!(b.min_lat <= lat && lat <= b.max_lat);
            prop_assert!(b.min_lng <= lng && lng <= b.max_lng);
        }

        #[test]
        fn encode_is_prefix_monotone(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            p in 1usize..12,
        ) {
            let a = alphabet();
            let (short, _) = encode(lat, lng, p, &a).unwrap();
            let (long, _) = encode(lat, lng, p + 1, &a).unwrap();
            prop_assert!(long.starts_with(&short));
        }
    }
}
