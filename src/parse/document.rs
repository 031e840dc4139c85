//! Top-level document parsing.

use serde_json::{Map, Value};
use tracing::debug;

use super::crs::extract_crs;
use super::geometry::extract_geometry;
use super::ParseError;
use crate::models::{Bounds, Document, DocumentBody, Feature, Geometry, GeometryKind};

const FEATURE_COLLECTION: &str = "FeatureCollection";
const FEATURE: &str = "Feature";

/// Parse raw GeoJSON bytes into a [`Document`]
pub fn parse(bytes: &[u8]) -> Result<Document, ParseError> {
    let value: Value = serde_json::from_slice(bytes)?;
    parse_value(&value)
}

pub fn parse_str(input: &str) -> Result<Document, ParseError> {
    parse(input.as_bytes())
}

/// Parse an already decoded JSON value
pub fn parse_value(value: &Value) -> Result<Document, ParseError> {
    let object = value
        .as_object()
        .ok_or_else(|| ParseError::Malformed("top-level value is not an object".to_string()))?;

    let type_name = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingType)?;

    let bbox = extract_bbox(object)?;
    let id = extract_id(object);
    let crs = object
        .get("crs")
        .filter(|crs| crs.is_object())
        .map(extract_crs);

    let body = match type_name {
        FEATURE_COLLECTION => DocumentBody::FeatureCollection(extract_features(object)?),
        FEATURE => DocumentBody::Feature(extract_feature(object)?),
        other if other.parse::<GeometryKind>().is_ok() => {
            DocumentBody::Geometry(extract_geometry(value)?)
        }
        other => return Err(ParseError::UnknownType(other.to_string())),
    };

    Ok(Document::new(body, crs, bbox, id))
}

fn extract_features(collection: &Map<String, Value>) -> Result<Vec<Feature>, ParseError> {
    let Some(entries) = collection.get("features").and_then(Value::as_array) else {
        debug!("FeatureCollection has no features array");
        return Ok(Vec::new());
    };

    let mut features = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            Some(object) => features.push(extract_feature(object)?),
            None => debug!("Skipping non-object feature entry {}", index),
        }
    }

    Ok(features)
}

/// Build a feature from its JSON object.
///
/// A missing or null geometry becomes the empty point placeholder.
fn extract_feature(object: &Map<String, Value>) -> Result<Feature, ParseError> {
    let properties = object
        .get("properties")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    let bbox = extract_bbox(object)?;
    let id = extract_id(object);

    let geometry = match object.get("geometry") {
        None | Some(Value::Null) => {
            debug!("Feature {:?} has no geometry, using placeholder", id);
            Geometry::empty()
        }
        Some(raw) => extract_geometry(raw)?,
    };

    Ok(Feature::new(geometry, properties, bbox, id))
}

/// `[min_lon, min_lat, max_lon, max_lat]` into south-west/north-east corners
fn extract_bbox(object: &Map<String, Value>) -> Result<Option<Bounds>, ParseError> {
    let Some(raw) = object.get("bbox").and_then(Value::as_array) else {
        return Ok(None);
    };

    if raw.len() != 4 {
        return Err(ParseError::InvalidBbox);
    }

    let n = raw
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()
        .ok_or(ParseError::InvalidBbox)?;

    Ok(Some(Bounds::from_bbox(n[0], n[1], n[2], n[3])))
}

/// String ids are copied; numeric ids are rendered as decimal text
fn extract_id(object: &Map<String, Value>) -> Option<String> {
    match object.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
