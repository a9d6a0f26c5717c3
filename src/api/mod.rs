pub mod batch;
pub mod cryptor;
pub mod geohash;
pub mod geohash36;
pub mod neighbors;
pub mod region;

pub use batch::{decode_batch, encode_batch};
pub use cryptor::GeoCryptor;
pub use geohash::Geohash;
pub use geohash36::Geohash36;
pub use neighbors::{Direction, Neighbors};
pub use region::Region;
