//! # geohash-rs
//!
//! Two geohash algorithms behind one trait, [`GeoCryptor`].
//!
//! ### 1. `Geohash` - base-32
//!
//! ```
//! use geohash_rs::{GeoCryptor, Geohash};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cryptor = Geohash::default();
//! let hash = cryptor.encode(12.04512315, 118.20385763, 9)?;
//! assert_eq!(hash, "wdhh9b9rv");
//!
//! let (lat, lng, lat_err, lng_err) = cryptor.decode_with_error(&hash, 0);
//! println!("{lat} ± {lat_err}, {lng} ± {lng_err}");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `Geohash36` - 6x6 grid, 36 symbols
//!
//! ```
//! use geohash_rs::{GeoCryptor, Geohash36};
//!
//! # fn main() -> Result<(), geohash_rs::GeohashError> {
//! let cryptor = Geohash36::default();
//! let region = cryptor.encode_as_region(51.504444, -0.086666, 10)?;
//! assert_eq!(region.geohash()?, "bdrdC26BqH");
//! println!("{}", region.to_wkt());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Neighbors
//!
//! ```
//! use geohash_rs::{Direction, GeoCryptor, Geohash};
//!
//! let neighbors = Geohash::default().neighbors("7ztuee", 6);
//! for (direction, region) in neighbors.iter() {
//!     if let Some(region) = region {
//!         println!("{:?}: {}", direction, region.hash);
//!     }
//! }
//! assert_eq!(neighbors.get(Direction::North).map(|r| r.hash.as_str()), Some("7ztues"));
//! assert_eq!(neighbors.get(Direction::East).map(|r| r.hash.as_str()), Some("7ztueg"));
//! ```
//!
//! Custom alphabets are checked when the cryptor is built:
//!
//! ```
//! use geohash_rs::{Geohash, GeohashError};
//!
//! let err = Geohash::with_alphabet("0123456789").unwrap_err();
//! assert_eq!(err, GeohashError::InvalidAlphabetLength { expected: 32, actual: 10 });
//! ```
//!

pub mod api;
pub mod core;
pub mod geom;
pub mod util;

pub use crate::api::{
    Direction, GeoCryptor, Geohash, Geohash36, Neighbors, Region, decode_batch, encode_batch,
};
pub use crate::core::{
    Alphabet, BASE32_ALPHABET, BASE36_ALPHABET, Bounds, DEFAULT_BASE32, DEFAULT_BASE36, MAX_LAT,
    MAX_LNG, MAX_PRECISION, MAX_PRECISION_36, MIN_LAT, MIN_LNG,
};
pub use crate::geom::{encode_geometry_str, geometry_to_hashes, parse_geometry};
pub use crate::util::{Coordinate, GeohashError, round, round_to_precision};

pub use geo_types;
