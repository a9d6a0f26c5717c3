/// Error type for geohash-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GeohashError {
    /// Latitude is outside [-90, 90] or not a number.
    LatitudeOutOfRange(f64),
    /// Longitude is outside [-180, 180] or not a number.
    LongitudeOutOfRange(f64),
    /// The precision (number of symbols) is outside the supported range.
    InvalidPrecision { precision: usize, max: usize },
    /// The alphabet does not have the number of symbols the codec needs.
    InvalidAlphabetLength { expected: usize, actual: usize },
    /// A symbol appears more than once in the alphabet.
    DuplicateSymbol(char),
    /// Alphabet symbols must be ASCII.
    NonAsciiSymbol(char),
    /// A hash symbol is not part of the alphabet (strict decoding only).
    UnknownSymbol { symbol: char, position: usize },
    /// A region's bounds cannot be read (latitude beyond a pole, or broken
    /// longitude orientation).
    InvalidRegion(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
}

impl std::fmt::Display for GeohashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeohashError::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude out of range [-90, 90]: {}", lat)
            }
            GeohashError::LongitudeOutOfRange(lng) => {
                write!(f, "Longitude out of range [-180, 180]: {}", lng)
            }
            GeohashError::InvalidPrecision { precision, max } => {
                write!(f, "Invalid precision: {} (expected 1..={})", precision, max)
            }
            GeohashError::InvalidAlphabetLength { expected, actual } => write!(
                f,
                "Invalid alphabet length: expected {} symbols, got {}",
                expected, actual
            ),
            GeohashError::DuplicateSymbol(c) => write!(f, "Duplicate alphabet symbol: {:?}", c),
            GeohashError::NonAsciiSymbol(c) => write!(f, "Non-ASCII alphabet symbol: {:?}", c),
            GeohashError::UnknownSymbol { symbol, position } => {
                write!(f, "Unknown symbol {:?} at position {}", symbol, position)
            }
            GeohashError::InvalidRegion(msg) => write!(f, "Coordinate error: {}", msg),
            GeohashError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
        }
    }
}

impl std::error::Error for GeohashError {}
