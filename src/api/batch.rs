use crate::api::cryptor::GeoCryptor;
use crate::util::coord::Coordinate;
use crate::util::error::GeohashError;
use rayon::prelude::*;

/// Encodes every coordinate in parallel, keeping input order.
///
/// # Example
///
/// ```
/// use geohash_rs::{Geohash, encode_batch};
///
/// let points = [(-3.0, -2.0), (118.20385763, 12.04512315), (0.0, 95.0)];
/// let hashes = encode_batch(&Geohash::default(), &points, 6);
///
/// assert_eq!(hashes[0].as_deref(), Ok("7ztuee"));
/// assert_eq!(hashes[1].as_deref(), Ok("wdhh9b"));
/// assert!(hashes[2].is_err());
/// ```
pub fn encode_batch<G, C>(cryptor: &G, coords: &[C], precision: usize) -> Vec<Result<String, GeohashError>>
where
    G: GeoCryptor + Sync,
    C: Coordinate + Sync,
{
    coords
        .par_iter()
        .map(|c| cryptor.encode(c.lat(), c.lng(), precision))
        .collect()
}

/// Decodes every hash in parallel to `(lat, lng)`, keeping input order.
pub fn decode_batch<G, S>(cryptor: &G, hashes: &[S], precision: usize) -> Vec<(f64, f64)>
where
    G: GeoCryptor + Sync,
    S: AsRef<str> + Sync,
{
    hashes
        .par_iter()
        .map(|h| cryptor.decode(h.as_ref(), precision))
        .collect()
}
