//! Typed GeoJSON geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Coordinate;

/// A closed ring or open line of positions
pub type Ring = Vec<Coordinate>;

/// One polygon: ring 0 is the outer boundary, ring 1 (if any) a hole.
pub type PolygonRings = Vec<Ring>;

/// Geometry variant. The variant alone decides which payload exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    MultiPoint(Vec<Coordinate>),
    LineString(Ring),
    MultiLineString(Vec<Ring>),
    /// Rings beyond the first hole are kept but never tested for containment.
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// Placeholder used for features that carry no geometry member
    pub fn empty() -> Self {
        Geometry::Point(Coordinate::default())
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Whether this geometry encloses an area (and can contain a point)
    pub fn is_areal(&self) -> bool {
        match self {
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => true,
            Geometry::GeometryCollection(children) => children.iter().any(Geometry::is_areal),
            _ => false,
        }
    }
}

/// Payload-free geometry tag, spelled as the GeoJSON `type` member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub fn all() -> &'static [GeometryKind] {
        &[
            GeometryKind::Point,
            GeometryKind::MultiPoint,
            GeometryKind::LineString,
            GeometryKind::MultiLineString,
            GeometryKind::Polygon,
            GeometryKind::MultiPolygon,
            GeometryKind::GeometryCollection,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::LineString => "LineString",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeometryKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
