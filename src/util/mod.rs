pub mod coord;
pub mod error;
pub mod round;

pub use coord::Coordinate;
pub use error::GeohashError;
pub use round::{round, round_to_precision};
