//! PIP service for looking up which zones contain a point.

use tracing::debug;

use crate::models::{Coordinate, Document, Feature};

/// A named document whose features are treated as zones
#[derive(Debug, Clone)]
pub struct ZoneLayer {
    pub name: String,
    pub document: Document,
    /// String property used as a human-readable label for hits
    pub label_property: Option<String>,
}

impl ZoneLayer {
    pub fn new(name: impl Into<String>, document: Document) -> Self {
        Self {
            name: name.into(),
            document,
            label_property: None,
        }
    }

    pub fn with_label_property(mut self, key: impl Into<String>) -> Self {
        self.label_property = Some(key.into());
        self
    }

    /// Label for a feature of this layer, if the label property is a string
    pub fn label_for<'a>(&self, feature: &'a Feature) -> Option<&'a str> {
        self.label_property
            .as_deref()
            .and_then(|key| feature.string_property(key))
    }
}

/// A feature that contains the queried point
#[derive(Debug, Clone, Copy)]
pub struct ZoneHit<'a> {
    pub layer: &'a ZoneLayer,
    pub feature: &'a Feature,
}

impl<'a> ZoneHit<'a> {
    pub fn label(&self) -> Option<&'a str> {
        self.layer.label_for(self.feature)
    }
}

/// Point-in-Polygon lookup service over a handful of layers.
///
/// Every query is a linear scan of every feature.
#[derive(Debug, Clone, Default)]
pub struct PipService {
    layers: Vec<ZoneLayer>,
}

impl PipService {
    pub fn new(layers: Vec<ZoneLayer>) -> Self {
        Self { layers }
    }

    pub fn add_layer(&mut self, layer: ZoneLayer) {
        self.layers.push(layer);
    }

    /// Find every zone containing the point, layers in insertion order
    pub fn lookup(&self, point: Coordinate) -> Vec<ZoneHit<'_>> {
        let hits: Vec<ZoneHit<'_>> = self
            .layers
            .iter()
            .flat_map(|layer| {
                layer
                    .document
                    .features_surrounding(point)
                    .into_iter()
                    .map(move |feature| ZoneHit { layer, feature })
            })
            .collect();

        debug!("PIP lookup at {}: found {} zones", point, hits.len());

        hits
    }

    /// Whether any zone in the named layer contains the point
    pub fn layer_contains(&self, name: &str, point: Coordinate) -> bool {
        self.layer(name)
            .map(|layer| layer.document.surrounds_point(point))
            .unwrap_or(false)
    }

    pub fn layer(&self, name: &str) -> Option<&ZoneLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    pub fn layers(&self) -> &[ZoneLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
