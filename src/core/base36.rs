//! Geohash-36: each symbol picks one cell of a 6x6 grid laid over the
//! current rectangle, rows counted from the north and columns from the west.

use crate::core::alphabet::Alphabet;
use crate::core::bounds::{Bounds, check_coordinate};
use crate::core::constants::{GRID_SIDE, INIT_UNIT_LAT, INIT_UNIT_LNG, MAX_PRECISION_36};
use crate::util::error::GeohashError;

/// Result of a geohash-36 encode.
#[derive(Debug, Clone, PartialEq)]
pub struct Encoded36 {
    pub hash: String,
    pub bounds: Bounds,
    /// Row height of the next (unused) level.
    pub unit_lat: f64,
    /// Column width of the next (unused) level.
    pub unit_lng: f64,
}

impl Encoded36 {
    /// Size of the final cell, i.e. the units one level up.
    pub fn cell_size(&self) -> (f64, f64) {
        let side = GRID_SIDE as f64;
        (self.unit_lat * side, self.unit_lng * side)
    }
}

pub fn encode(
    lat: f64,
    lng: f64,
    precision: usize,
    alphabet: &Alphabet<36>,
) -> Result<Encoded36, GeohashError> {
    check_coordinate(lat, lng)?;
    if precision == 0 || precision > MAX_PRECISION_36 {
        log::debug!("Rejecting geohash-36 precision {}", precision);
        return Err(GeohashError::InvalidPrecision {
            precision,
            max: MAX_PRECISION_36,
        });
    }

    let (mut unit_lat, mut unit_lng) = (INIT_UNIT_LAT, INIT_UNIT_LNG);
    let mut b = Bounds::WORLD;
    let mut hash = String::with_capacity(precision);
    let last = GRID_SIDE - 1;

    for _ in 0..precision {
        // A linear scan over at most 6 rows and 6 columns. The index stops
        // at the last row/column so accumulated rounding can never step off
        // the grid.
        let mut row = 0;
        while row < last && b.max_lat - unit_lat > lat {
            row += 1;
            b.max_lat -= unit_lat;
        }
        let mut col = 0;
        while col < last && b.min_lng + unit_lng < lng {
            col += 1;
            b.min_lng += unit_lng;
        }

        b.min_lat = b.max_lat - unit_lat;
        b.max_lng = b.min_lng + unit_lng;
        unit_lat /= GRID_SIDE as f64;
        unit_lng /= GRID_SIDE as f64;
        hash.push(alphabet.symbol(row * GRID_SIDE + col));
    }

    Ok(Encoded36 {
        hash,
        bounds: b,
        unit_lat,
        unit_lng,
    })
}

/// Rectangle denoted by `hash`, reading unknown symbols as index 0.
pub fn decode_bounds(hash: &str, alphabet: &Alphabet<36>) -> Bounds {
    if let Err(e) = alphabet.check(hash) {
        log::warn!("Decoding geohash-36 {:?} leniently: {}", hash, e);
    }

    let (mut unit_lat, mut unit_lng) = (INIT_UNIT_LAT, INIT_UNIT_LNG);
    let mut b = Bounds::WORLD;
    for c in hash.chars() {
        let index = alphabet.index_of(c).unwrap_or(0);
        let (row, col) = (index / GRID_SIDE, index % GRID_SIDE);

        b.max_lat -= row as f64 * unit_lat;
        b.min_lat = b.max_lat - unit_lat;
        b.min_lng += col as f64 * unit_lng;
        b.max_lng = b.min_lng + unit_lng;
        unit_lat /= GRID_SIDE as f64;
        unit_lng /= GRID_SIDE as f64;
    }
    b
}

/// Like [`decode_bounds`], but rejects symbols outside the alphabet.
pub fn decode_bounds_strict(hash: &str, alphabet: &Alphabet<36>) -> Result<Bounds, GeohashError> {
    alphabet.check(hash)?;
    Ok(decode_bounds(hash, alphabet))
}
