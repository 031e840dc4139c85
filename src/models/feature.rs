//! Parsed GeoJSON documents, features and CRS metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Bounds, Coordinate, Geometry, GeometryKind};
use crate::bounds::BoundsCache;
use crate::group::{group_by_property, PropertyGroups};
use crate::pip::surrounds_point;

/// Raw feature properties, in document order
pub type Properties = serde_json::Map<String, Value>;

/// The string-valued subset of [`Properties`], in document order
pub type StringProperties = IndexMap<String, String>;

/// A single GeoJSON feature.
///
/// Built once by the parser and never mutated afterwards. The only lazily
/// filled state is the bounds cache, which does not take part in equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    geometry: Geometry,
    properties: Properties,
    string_properties: StringProperties,
    bbox: Option<Bounds>,
    id: Option<String>,
    bounds: BoundsCache,
}

impl Feature {
    pub(crate) fn new(
        geometry: Geometry,
        properties: Properties,
        bbox: Option<Bounds>,
        id: Option<String>,
    ) -> Self {
        let string_properties = properties
            .iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key.clone(), s.to_string())))
            .collect();

        Self {
            geometry,
            properties,
            string_properties,
            bbox,
            id,
            bounds: BoundsCache::default(),
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn string_properties(&self) -> &StringProperties {
        &self.string_properties
    }

    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.string_properties.get(key).map(String::as_str)
    }

    /// The `bbox` member as declared in the document (not computed)
    pub fn bbox(&self) -> Option<Bounds> {
        self.bbox
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Bounding box of the geometry, computed on first use
    pub fn bounds(&self) -> Bounds {
        self.bounds.get_or_compute(&self.geometry)
    }

    /// Center of [`Feature::bounds`]
    pub fn center(&self) -> Coordinate {
        self.bounds().center()
    }

    pub fn surrounds_point(&self, point: Coordinate) -> bool {
        surrounds_point(&self.geometry, point)
    }
}

/// Coordinate reference system member.
///
/// Fields the CRS form does not define stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crs {
    /// Set for `"type": "name"`
    pub name: String,
    /// Set for `"type": "link"`
    pub href: String,
    /// The link's own `type` property
    pub link_type: String,
}

/// Top-level document kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    FeatureCollection,
    Feature,
    Geometry,
}

/// Payload matching the document kind
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBody {
    FeatureCollection(Vec<Feature>),
    Feature(Feature),
    Geometry(Geometry),
}

/// A parsed GeoJSON document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    body: DocumentBody,
    crs: Option<Crs>,
    bbox: Option<Bounds>,
    id: Option<String>,
}

impl Document {
    pub(crate) fn new(
        body: DocumentBody,
        crs: Option<Crs>,
        bbox: Option<Bounds>,
        id: Option<String>,
    ) -> Self {
        Self {
            body,
            crs,
            bbox,
            id,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self.body {
            DocumentBody::FeatureCollection(_) => DocumentKind::FeatureCollection,
            DocumentBody::Feature(_) => DocumentKind::Feature,
            DocumentBody::Geometry(_) => DocumentKind::Geometry,
        }
    }

    pub fn body(&self) -> &DocumentBody {
        &self.body
    }

    /// Features of a `FeatureCollection`; empty for other kinds
    pub fn features(&self) -> &[Feature] {
        match &self.body {
            DocumentBody::FeatureCollection(features) => features,
            _ => &[],
        }
    }

    pub fn feature(&self) -> Option<&Feature> {
        match &self.body {
            DocumentBody::Feature(feature) => Some(feature),
            _ => None,
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        match &self.body {
            DocumentBody::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }

    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    pub fn bbox(&self) -> Option<Bounds> {
        self.bbox
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Every feature the document carries: the whole collection, or the
    /// single feature of a `Feature` document.
    pub fn iter_features(&self) -> impl Iterator<Item = &Feature> {
        let (many, one) = match &self.body {
            DocumentBody::FeatureCollection(features) => (features.as_slice(), None),
            DocumentBody::Feature(feature) => (&[][..], Some(feature)),
            DocumentBody::Geometry(_) => (&[][..], None),
        };
        many.iter().chain(one)
    }

    /// Collection features whose geometry has the given kind
    pub fn features_of_kind(&self, kind: GeometryKind) -> Vec<&Feature> {
        self.features()
            .iter()
            .filter(|f| f.geometry().kind() == kind)
            .collect()
    }

    pub fn points(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::Point)
    }

    pub fn multi_points(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::MultiPoint)
    }

    pub fn line_strings(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::LineString)
    }

    pub fn multi_line_strings(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::MultiLineString)
    }

    pub fn polygons(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::Polygon)
    }

    pub fn multi_polygons(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::MultiPolygon)
    }

    pub fn geometry_collections(&self) -> Vec<&Feature> {
        self.features_of_kind(GeometryKind::GeometryCollection)
    }

    /// Group the collection's features by a string property
    pub fn group_by_property(&self, key: &str) -> PropertyGroups<'_> {
        group_by_property(self.features(), key)
    }

    /// True if any feature (or the bare geometry) surrounds the point
    pub fn surrounds_point(&self, point: Coordinate) -> bool {
        match &self.body {
            DocumentBody::Geometry(geometry) => surrounds_point(geometry, point),
            _ => self.iter_features().any(|f| f.surrounds_point(point)),
        }
    }

    /// Features whose geometry surrounds the point, in document order
    pub fn features_surrounding(&self, point: Coordinate) -> Vec<&Feature> {
        self.iter_features()
            .filter(|f| f.surrounds_point(point))
            .collect()
    }

    /// Features whose bounding-box center lies inside `region`
    pub fn features_centered_in(&self, region: &Geometry) -> Vec<&Feature> {
        self.iter_features()
            .filter(|f| surrounds_point(region, f.center()))
            .collect()
    }
}
