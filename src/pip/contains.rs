//! Containment over whole geometries.

use super::ring::ring_contains;
use crate::models::{Coordinate, Geometry, Ring};

/// Outer ring contains the point and the first hole (if any) does not.
///
/// Rings after the first hole are not consulted.
pub fn polygon_contains(rings: &[Ring], point: Coordinate) -> bool {
    let outer = rings
        .first()
        .map(|ring| ring_contains(ring, point))
        .unwrap_or(false);
    if !outer {
        return false;
    }

    let inner = rings
        .get(1)
        .map(|hole| ring_contains(hole, point))
        .unwrap_or(false);

    !inner
}

/// Whether an areal geometry surrounds the point.
///
/// Non-areal geometries (points and lines) never contain anything.
pub fn surrounds_point(geometry: &Geometry, point: Coordinate) -> bool {
    match geometry {
        Geometry::Polygon(rings) => polygon_contains(rings, point),
        Geometry::MultiPolygon(polygons) => polygons
            .iter()
            .any(|rings| polygon_contains(rings, point)),
        Geometry::GeometryCollection(children) => {
            children.iter().any(|child| surrounds_point(child, point))
        }
        Geometry::Point(_)
        | Geometry::MultiPoint(_)
        | Geometry::LineString(_)
        | Geometry::MultiLineString(_) => false,
    }
}

impl Geometry {
    pub fn surrounds_point(&self, point: Coordinate) -> bool {
        surrounds_point(self, point)
    }
}
