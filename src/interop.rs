//! Conversion into `geo-types` for use with the `geo` algorithms.
//!
//! `geo` orders axes `x = longitude, y = latitude`. All polygon rings are
//! carried over, so `geo` sees every hole, not only the first one.

use geo_types as gt;

use crate::models::{Coordinate, Geometry, Ring};

impl From<Coordinate> for gt::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        gt::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<gt::Coord<f64>> for Coordinate {
    fn from(c: gt::Coord<f64>) -> Self {
        Coordinate::from_lon_lat(c.x, c.y)
    }
}

fn line_string(ring: &[Coordinate]) -> gt::LineString<f64> {
    ring.iter().copied().map(gt::Coord::<f64>::from).collect()
}

fn polygon(rings: &[Ring]) -> gt::Polygon<f64> {
    let exterior = rings
        .first()
        .map(|ring| line_string(ring))
        .unwrap_or_else(|| gt::LineString::new(Vec::new()));
    let interiors = rings.iter().skip(1).map(|ring| line_string(ring)).collect();
    gt::Polygon::new(exterior, interiors)
}

impl From<&Geometry> for gt::Geometry<f64> {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(c) => gt::Geometry::Point(gt::Point::from(gt::Coord::<f64>::from(*c))),
            Geometry::MultiPoint(points) => gt::Geometry::MultiPoint(
                points
                    .iter()
                    .map(|c| gt::Point::from(gt::Coord::<f64>::from(*c)))
                    .collect(),
            ),
            Geometry::LineString(ring) => gt::Geometry::LineString(line_string(ring)),
            Geometry::MultiLineString(lines) => gt::Geometry::MultiLineString(
                gt::MultiLineString::new(lines.iter().map(|l| line_string(l)).collect()),
            ),
            Geometry::Polygon(rings) => gt::Geometry::Polygon(polygon(rings)),
            Geometry::MultiPolygon(polygons) => gt::Geometry::MultiPolygon(
                gt::MultiPolygon::new(polygons.iter().map(|p| polygon(p)).collect()),
            ),
            Geometry::GeometryCollection(children) => gt::Geometry::GeometryCollection(
                gt::GeometryCollection(children.iter().map(gt::Geometry::<f64>::from).collect()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pip::surrounds_point;
    use geo::{BoundingRect, Contains};

    fn pt(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_lon_lat(lon, lat)
    }

    fn square(min: f64, max: f64) -> Ring {
        vec![pt(min, min), pt(max, min), pt(max, max), pt(min, max), pt(min, min)]
    }

    #[test]
    fn test_axes_map_to_x_lon_y_lat() {
        let c: gt::Coord<f64> = pt(8.5, 47.4).into();
        assert_eq!(c, gt::Coord { x: 8.5, y: 47.4 });
        assert_eq!(Coordinate::from(c), pt(8.5, 47.4));
    }

    #[test]
    fn test_containment_agrees_with_geo_off_boundary() {
        let ours = Geometry::MultiPolygon(vec![
            vec![square(0.0, 10.0), square(2.0, 4.0)],
            vec![square(20.0, 25.0)],
        ]);
        let theirs = gt::Geometry::<f64>::from(&ours);

        for i in 0..60 {
            for j in 0..60 {
                // offset keeps samples off every edge
                let p = pt(i as f64 * 0.5 - 2.25, j as f64 * 0.5 - 2.25);
                let geo_point = gt::Point::from(gt::Coord::<f64>::from(p));
                assert_eq!(
                    surrounds_point(&ours, p),
                    theirs.contains(&geo_point),
                    "disagree at {}",
                    p
                );
            }
        }
    }

    #[test]
    fn test_bounds_agree_with_geo_for_lines() {
        let ours = Geometry::LineString(vec![pt(0.0, 0.0), pt(5.0, 5.0), pt(10.0, 0.0)]);
        let rect = gt::Geometry::<f64>::from(&ours).bounding_rect().unwrap();
        let b = ours.bounds();
        assert_eq!(Coordinate::from(rect.min()), b.south_west);
        assert_eq!(Coordinate::from(rect.max()), b.north_east);
    }
}
