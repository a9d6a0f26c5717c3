/// Northern world bound in degrees
pub const MAX_LAT: f64 = 90.0;
/// Southern world bound in degrees
pub const MIN_LAT: f64 = -90.0;
/// Eastern world bound in degrees
pub const MAX_LNG: f64 = 180.0;
/// Western world bound in degrees
pub const MIN_LNG: f64 = -180.0;

/// Default base-32 geohash alphabet
pub const BASE32_ALPHABET: &str = "0123456789bcdefghjkmnpqrstuvwxyz";

/// Default geohash-36 alphabet (case sensitive)
pub const BASE36_ALPHABET: &str = "23456789bBCdDFgGhHjJKlLMnNPqQrRtTVWX";

/// Bits carried by one base-32 symbol
pub(crate) const BITS_PER_SYMBOL: usize = 5;

/// Maximum base-32 precision; f64 resolution is exhausted beyond this
pub const MAX_PRECISION: usize = 12;

/// Maximum geohash-36 precision
pub const MAX_PRECISION_36: usize = 16;

/// Rows and columns of the geohash-36 grid
pub(crate) const GRID_SIDE: usize = 6;

/// Height in degrees of a first-level geohash-36 row
pub(crate) const INIT_UNIT_LAT: f64 = 30.0;

/// Width in degrees of a first-level geohash-36 column
pub(crate) const INIT_UNIT_LNG: f64 = 60.0;
