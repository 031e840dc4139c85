//! Immutable value model produced by the parser.

pub mod coordinate;
pub mod feature;
pub mod geometry;

pub use coordinate::{Bounds, Coordinate};
pub use feature::{Crs, Document, DocumentBody, DocumentKind, Feature, Properties, StringProperties};
pub use geometry::{Geometry, GeometryKind, PolygonRings, Ring};
