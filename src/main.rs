use geohash_rs::{GeoCryptor, Geohash, Geohash36, GeohashError};

fn main() -> Result<(), GeohashError> {
    let lat = 51.504444;
    let lng = -0.086666;

    let geohash = Geohash::default();
    let region = geohash.encode_as_region(lat, lng, 9)?;

    println!("Geohash: {}", region.geohash()?);
    println!("Center: {:?}", region.center()?);
    println!("Error: {:?}", region.err_pair());
    println!("Polygon: {}", region.to_wkt());

    for (direction, neighbor) in geohash.neighbors(&region.hash, 9).iter() {
        match neighbor {
            Some(n) => println!("{:?}: {}", direction, n.hash),
            None => println!("{:?}: -", direction),
        }
    }

    let geohash36 = Geohash36::default();
    let (hash, lat_err, lng_err) = geohash36.encode_with_error(lat, lng, 10)?;
    println!("Geohash-36: {} (±{}, ±{})", hash, lat_err, lng_err);

    Ok(())
}
