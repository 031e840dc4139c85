use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use zonefence::load::load_path;
use zonefence::models::{Coordinate, DocumentKind, Geometry};
use zonefence::pip::{PipService, ZoneLayer};
use zonefence::{parse, Document};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn zones() -> Document {
    load_path(data("zones.geojson")).unwrap()
}

fn at(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon)
}

#[test]
fn document_metadata() {
    let doc = zones();
    assert_eq!(doc.kind(), DocumentKind::FeatureCollection);
    assert_eq!(doc.id(), Some("no-fly-sample"));
    assert_eq!(doc.crs().unwrap().name, "urn:ogc:def:crs:OGC:1.3:CRS84");

    let bbox = doc.bbox().unwrap();
    assert_eq!(bbox.south_west, at(36.0, -123.0));
    assert_eq!(bbox.north_east, at(39.0, -120.0));

    // the trailing string entry is skipped
    assert_eq!(doc.features().len(), 6);
    assert_eq!(doc.features()[1].id(), Some("2"));
}

#[test]
fn accessors_filter_by_geometry_kind() {
    let doc = zones();
    // the feature without geometry carries the point placeholder
    assert_eq!(doc.points().len(), 2);
    assert_eq!(doc.multi_points().len(), 0);
    assert_eq!(doc.line_strings().len(), 1);
    assert_eq!(doc.multi_line_strings().len(), 0);
    assert_eq!(doc.polygons().len(), 1);
    assert_eq!(doc.multi_polygons().len(), 1);
    assert_eq!(doc.geometry_collections().len(), 1);
    assert_eq!(doc.points()[1].geometry(), &Geometry::empty());
}

#[test]
fn containment_queries() {
    let doc = zones();
    let names = |point: Coordinate| -> Vec<String> {
        doc.features_surrounding(point)
            .iter()
            .map(|f| {
                f.string_property("PARKNAME")
                    .or_else(|| f.string_property("INSTALLATI"))
                    .or_else(|| f.string_property("name"))
                    .unwrap_or_default()
                    .to_string()
            })
            .collect()
    };

    assert_eq!(names(at(37.6, -122.4)), vec!["Bay Park"]);
    // inside the park's hole
    assert!(names(at(37.75, -122.25)).is_empty());
    assert_eq!(names(at(36.75, -121.25)), vec!["Fort Example"]);
    assert_eq!(names(at(38.6, -120.3)), vec!["Fort Example"]);
    assert_eq!(names(at(36.2, -122.8)), vec!["Training area"]);
    // points and lines never contain anything
    assert!(names(at(37.3, -121.9)).is_empty());
    assert!(names(at(10.0, 10.0)).is_empty());
}

#[test]
fn bounds_and_center() {
    let doc = zones();
    let park = &doc.features()[0];
    let b = park.bounds();
    assert_eq!(b.south_west, at(37.5, -122.5));
    assert_eq!(b.north_east, at(38.0, -122.0));
    assert_eq!(park.center(), at(37.75, -122.25));

    // points and collections give the degenerate box
    assert!(doc.features()[2].bounds().is_degenerate());
    assert!(doc.features()[4].bounds().is_degenerate());
}

#[test]
fn grouping_by_category() {
    let doc = zones();
    let groups = doc.group_by_property("category");
    let summary: Vec<(&str, usize)> = groups
        .iter()
        .map(|(value, features)| (value.as_str(), features.len()))
        .collect();
    assert_eq!(summary, vec![("park", 1), ("military", 2), ("airport", 2)]);
    assert_eq!(groups["military"][1].string_property("name"), Some("Training area"));
}

#[test]
fn region_filter_uses_bbox_center() {
    let doc = zones();
    let region = load_path(data("region")).unwrap();
    let outline = region.feature().unwrap().geometry();

    let kept: Vec<_> = doc
        .features_centered_in(outline)
        .iter()
        .map(|f| {
            f.string_property("PARKNAME")
                .or_else(|| f.string_property("name"))
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(kept, vec!["Bay Park", "Approach corridor"]);
}

#[test]
fn pip_service_over_layers() {
    let service = PipService::new(vec![
        ZoneLayer::new("region", load_path(data("region.geojson")).unwrap()),
        ZoneLayer::new("zones", zones()).with_label_property("PARKNAME"),
    ]);

    let hits = service.lookup(at(37.6, -122.4));
    let layers: Vec<_> = hits.iter().map(|h| h.layer.name.as_str()).collect();
    assert_eq!(layers, vec!["region", "zones"]);
    assert_eq!(hits[1].label(), Some("Bay Park"));
}

#[test]
fn parse_is_idempotent() {
    let bytes = std::fs::read(data("zones.geojson")).unwrap();
    let first = parse(&bytes).unwrap();
    let second = parse(&bytes).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.features()[0].string_properties(),
        second.features()[0].string_properties()
    );
}

#[test]
fn shared_bounds_cache_across_threads() {
    let doc = Arc::new(zones());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let doc = Arc::clone(&doc);
            thread::spawn(move || doc.features()[1].bounds())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].south_west, at(36.5, -121.5));
    assert_eq!(results[0].north_east, at(38.8, -120.2));
}
