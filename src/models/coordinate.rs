//! Coordinate and bounding box value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic position in degrees (latitude first).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from a GeoJSON position ordered `[longitude, latitude]`
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Axis-aligned box between the south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bounds {
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Build from a GeoJSON bbox ordered `[min_lon, min_lat, max_lon, max_lat]`
    pub fn from_bbox(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            south_west: Coordinate::from_lon_lat(min_lon, min_lat),
            north_east: Coordinate::from_lon_lat(max_lon, max_lat),
        }
    }

    /// Midpoint of the two corners on each axis.
    ///
    /// This is the box center, not an area centroid.
    pub fn center(&self) -> Coordinate {
        let ne = self.north_east;
        let sw = self.south_west;
        Coordinate {
            latitude: ne.latitude - (ne.latitude - sw.latitude) / 2.0,
            longitude: ne.longitude - (ne.longitude - sw.longitude) / 2.0,
        }
    }

    /// True when both corners sit at the origin
    pub fn is_degenerate(&self) -> bool {
        self.south_west == Coordinate::default() && self.north_east == Coordinate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lon_lat_swaps_axes() {
        let c = Coordinate::from_lon_lat(8.5, 47.4);
        assert_eq!(c.latitude, 47.4);
        assert_eq!(c.longitude, 8.5);
    }

    #[test]
    fn test_bbox_corners() {
        let b = Bounds::from_bbox(-10.0, -5.0, 10.0, 5.0);
        assert_eq!(b.south_west, Coordinate::new(-5.0, -10.0));
        assert_eq!(b.north_east, Coordinate::new(5.0, 10.0));
        assert_eq!(b.center(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn test_default_is_degenerate() {
        assert!(Bounds::default().is_degenerate());
        assert!(!Bounds::from_bbox(0.0, 0.0, 1.0, 1.0).is_degenerate());
    }
}
