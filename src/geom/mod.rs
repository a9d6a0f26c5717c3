pub mod parse;

pub use parse::{encode_geometry_str, geometry_to_hashes, parse_geometry};
