pub mod alphabet;
pub mod base32;
pub mod base36;
pub mod bounds;
pub mod constants;

pub use alphabet::{Alphabet, DEFAULT_BASE32, DEFAULT_BASE36};
pub use bounds::Bounds;
pub use constants::{
    BASE32_ALPHABET, BASE36_ALPHABET, MAX_LAT, MAX_LNG, MAX_PRECISION, MAX_PRECISION_36, MIN_LAT,
    MIN_LNG,
};
