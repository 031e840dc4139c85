//! Geometry extraction from raw JSON.
//!
//! Every coordinate-bearing geometry differs only in how deeply its
//! positions are nested, so one recursive [`FromCoordinates`] routine
//! handles all depths: a position at depth 0, and an array of the next
//! shallower shape at every level above it.

use serde_json::Value;

use super::ParseError;
use crate::models::{Coordinate, Geometry, GeometryKind};

const TYPE: &str = "type";
const COORDINATES: &str = "coordinates";
const GEOMETRIES: &str = "geometries";

/// A value that can be read from a (possibly nested) GeoJSON coordinate array
trait FromCoordinates: Sized {
    fn from_coordinates(value: &Value) -> Result<Self, ParseError>;
}

/// `[longitude, latitude, ...]`; extra members such as altitude are ignored
impl FromCoordinates for Coordinate {
    fn from_coordinates(value: &Value) -> Result<Self, ParseError> {
        let position = value
            .as_array()
            .ok_or_else(|| ParseError::geometry(format!("expected a position, got {}", value)))?;

        if position.len() < 2 {
            return Err(ParseError::geometry(format!(
                "position needs 2 numbers, got {}",
                position.len()
            )));
        }

        let numbers = position
            .iter()
            .map(|n| {
                n.as_f64()
                    .ok_or_else(|| ParseError::geometry(format!("non-numeric coordinate {}", n)))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        Ok(Coordinate::from_lon_lat(numbers[0], numbers[1]))
    }
}

impl<T: FromCoordinates> FromCoordinates for Vec<T> {
    fn from_coordinates(value: &Value) -> Result<Self, ParseError> {
        value
            .as_array()
            .ok_or_else(|| ParseError::geometry(format!("expected an array, got {}", value)))?
            .iter()
            .map(T::from_coordinates)
            .collect()
    }
}

fn coordinates<T: FromCoordinates>(
    object: &serde_json::Map<String, Value>,
    kind: GeometryKind,
) -> Result<T, ParseError> {
    let raw = object
        .get(COORDINATES)
        .ok_or_else(|| ParseError::geometry(format!("{} has no coordinates", kind)))?;
    T::from_coordinates(raw).map_err(|err| match err {
        ParseError::InvalidGeometry(reason) => {
            ParseError::InvalidGeometry(format!("{}: {}", kind, reason))
        }
        other => other,
    })
}

/// Extract a typed geometry from a GeoJSON geometry object.
///
/// Geometry collections recurse through this same function, so nesting
/// depth is unbounded.
pub fn extract_geometry(value: &Value) -> Result<Geometry, ParseError> {
    let object = value
        .as_object()
        .ok_or_else(|| ParseError::geometry("geometry is not an object"))?;

    let type_name = object
        .get(TYPE)
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::geometry("geometry has no type"))?;

    let kind: GeometryKind = type_name
        .parse()
        .map_err(|name| ParseError::geometry(format!("unknown geometry type `{}`", name)))?;

    let geometry = match kind {
        GeometryKind::Point => Geometry::Point(coordinates(object, kind)?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(coordinates(object, kind)?),
        GeometryKind::LineString => Geometry::LineString(coordinates(object, kind)?),
        GeometryKind::MultiLineString => Geometry::MultiLineString(coordinates(object, kind)?),
        GeometryKind::Polygon => Geometry::Polygon(coordinates(object, kind)?),
        GeometryKind::MultiPolygon => Geometry::MultiPolygon(coordinates(object, kind)?),
        GeometryKind::GeometryCollection => {
            let children = object
                .get(GEOMETRIES)
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    ParseError::geometry("GeometryCollection has no geometries array")
                })?;
            Geometry::GeometryCollection(
                children
                    .iter()
                    .map(extract_geometry)
                    .collect::<Result<_, _>>()?,
            )
        }
    };

    Ok(geometry)
}
