//! GeoJSON parsing into the typed model.

mod crs;
mod document;
mod error;
mod geometry;

pub use crs::extract_crs;
pub use document::{parse, parse_str, parse_value};
pub use error::ParseError;
pub use geometry::extract_geometry;
