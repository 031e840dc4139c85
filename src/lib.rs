//! Zonefence - GeoJSON parsing and point-in-zone lookups
//!
//! Parses GeoJSON into an immutable typed model and answers containment,
//! bounding-box and grouping queries over it. The `zone-lookup` binary
//! wires these together over configured layers.

pub mod bounds;
pub mod config;
pub mod fetch;
pub mod group;
pub mod interop;
pub mod load;
pub mod models;
pub mod parse;
pub mod pip;

pub use bounds::{bounds, center};
pub use group::{group_by_property, PropertyGroups};
pub use models::{Bounds, Coordinate, Crs, Document, DocumentKind, Feature, Geometry, GeometryKind};
pub use parse::{extract_geometry, parse, ParseError};
pub use pip::surrounds_point;
