//! Bounding box and center calculation.
//!
//! Only the outer coordinates widen the box: polygon holes are skipped, and
//! points and collections yield the degenerate `(0,0)-(0,0)` box.

use std::sync::OnceLock;

use crate::models::{Bounds, Coordinate, Geometry};

const MIN_LATITUDE: f64 = -90.0;
const MAX_LATITUDE: f64 = 90.0;
const MIN_LONGITUDE: f64 = -180.0;
const MAX_LONGITUDE: f64 = 180.0;

/// Running min/max accumulator, seeded with the opposite extremes
struct Extent {
    min_lat: f64,
    min_lon: f64,
    max_lat: f64,
    max_lon: f64,
}

impl Extent {
    fn new() -> Self {
        Self {
            min_lat: MAX_LATITUDE,
            min_lon: MAX_LONGITUDE,
            max_lat: MIN_LATITUDE,
            max_lon: MIN_LONGITUDE,
        }
    }

    fn extend<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coordinate>) {
        for c in coords {
            if c.longitude > self.max_lon {
                self.max_lon = c.longitude;
            }
            if c.latitude > self.max_lat {
                self.max_lat = c.latitude;
            }
            if c.longitude < self.min_lon {
                self.min_lon = c.longitude;
            }
            if c.latitude < self.min_lat {
                self.min_lat = c.latitude;
            }
        }
    }

    fn finish(self) -> Bounds {
        Bounds::new(
            Coordinate::new(self.min_lat, self.min_lon),
            Coordinate::new(self.max_lat, self.max_lon),
        )
    }
}

/// Bounding box of a geometry's outer coordinates
pub fn bounds(geometry: &Geometry) -> Bounds {
    let mut extent = Extent::new();

    match geometry {
        Geometry::MultiPoint(points) | Geometry::LineString(points) => extent.extend(points),
        Geometry::MultiLineString(lines) => {
            for line in lines {
                extent.extend(line);
            }
        }
        Geometry::Polygon(rings) => extent.extend(rings.first().into_iter().flatten()),
        Geometry::MultiPolygon(polygons) => {
            for rings in polygons {
                extent.extend(rings.first().into_iter().flatten());
            }
        }
        Geometry::Point(_) | Geometry::GeometryCollection(_) => return Bounds::default(),
    }

    extent.finish()
}

/// Midpoint of [`bounds`]
pub fn center(geometry: &Geometry) -> Coordinate {
    bounds(geometry).center()
}

impl Geometry {
    /// Uncached [`bounds`]
    pub fn bounds(&self) -> Bounds {
        bounds(self)
    }

    /// Uncached [`center`]
    pub fn center(&self) -> Coordinate {
        center(self)
    }
}

/// Write-once bounds cache.
///
/// Concurrent first readers may both compute, but only one value is stored
/// and every reader observes it. Always compares equal so cached and
/// uncached values stay structurally equal.
#[derive(Debug, Clone, Default)]
pub struct BoundsCache(OnceLock<Bounds>);

impl BoundsCache {
    pub fn get_or_compute(&self, geometry: &Geometry) -> Bounds {
        *self.0.get_or_init(|| bounds(geometry))
    }

    pub fn is_computed(&self) -> bool {
        self.0.get().is_some()
    }
}

impl PartialEq for BoundsCache {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
