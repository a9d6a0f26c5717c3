use crate::api::cryptor::GeoCryptor;
use crate::util::error::GeohashError;
use geo::Centroid;
use geo_types::Geometry;
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string. A leading `{` means GeoJSON, anything else is
/// read as WKT. Coordinates are expected as `(lng, lat)`.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        from_geojson(trimmed)
    } else {
        let wkt = Wkt::<f64>::from_str(trimmed)
            .map_err(|e| GeohashError::GeometryParseError(e.to_string()))?;
        wkt.try_into().map_err(|_| {
            GeohashError::GeometryParseError("WKT has no geo-types equivalent".to_string())
        })
    }
}

fn from_geojson(s: &str) -> Result<Geometry<f64>, GeohashError> {
    let parse_err = |e: geojson::Error| GeohashError::GeometryParseError(e.to_string());

    let geometry = match s.parse::<GeoJson>().map_err(parse_err)? {
        GeoJson::Geometry(geometry) => geometry,
        GeoJson::Feature(feature) => feature.geometry.ok_or_else(|| {
            GeohashError::GeometryParseError("Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(_) => {
            return Err(GeohashError::GeometryParseError(
                "FeatureCollection not supported, hash its features one by one".to_string(),
            ));
        }
    };
    Geometry::try_from(geometry).map_err(parse_err)
}

/// Hashes a geometry: every point of a `Point` or `MultiPoint`, the centroid
/// of anything else. Empty geometries yield no hashes.
pub fn geometry_to_hashes<G: GeoCryptor>(
    cryptor: &G,
    geometry: &Geometry<f64>,
    precision: usize,
) -> Result<Vec<String>, GeohashError> {
    match geometry {
        Geometry::Point(pt) => Ok(vec![cryptor.encode(pt.y(), pt.x(), precision)?]),
        Geometry::MultiPoint(mp) => mp
            .iter()
            .map(|pt| cryptor.encode(pt.y(), pt.x(), precision))
            .collect(),
        other => match other.centroid() {
            Some(c) => Ok(vec![cryptor.encode(c.y(), c.x(), precision)?]),
            None => Ok(Vec::new()),
        },
    }
}

/// [`parse_geometry`] followed by [`geometry_to_hashes`].
///
/// # Example
///
/// ```
/// use geohash_rs::{Geohash, encode_geometry_str};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let hashes = encode_geometry_str(&Geohash::default(), "POINT(-3 -2)", 6)?;
/// assert_eq!(hashes, vec!["7ztuee"]);
/// # Ok(())
/// # }
/// ```
pub fn encode_geometry_str<G: GeoCryptor>(
    cryptor: &G,
    s: &str,
    precision: usize,
) -> Result<Vec<String>, GeohashError> {
    let geometry = parse_geometry(s)?;
    geometry_to_hashes(cryptor, &geometry, precision)
}
