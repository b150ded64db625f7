use std::collections::HashMap;
use std::sync::Arc;

use pinmap::prelude::*;

fn bare_feature() -> GeoJsonFeature {
    GeoJsonFeature {
        id: None,
        geometry: None,
        properties: None,
    }
}

/// Scenario: descriptor assets/map_marker.png 78x77, latlng (10, 20)
#[test]
fn test_fixed_icon_marker_at_position() {
    let factory = IconMarkerFactory::new(IconDescriptor::new("assets/map_marker.png", 78, 77));
    let marker = factory
        .point_to_layer(
            &bare_feature(),
            LatLng::new(10.0, 20.0),
            &FactoryContext::default(),
        )
        .unwrap();

    assert_eq!(marker.position(), LatLng::new(10.0, 20.0));
    assert_eq!(marker.icon().image_source, "assets/map_marker.png");
    assert_eq!(marker.icon().size(), (78, 77));
}

/// Scenario: descriptor assets/marker.png 75x75, latlng (0, 0)
#[test]
fn test_marker_at_origin() {
    let factory = IconMarkerFactory::new(IconDescriptor::new("assets/marker.png", 75, 75));
    let marker = factory
        .point_to_layer(
            &bare_feature(),
            LatLng::new(0.0, 0.0),
            &FactoryContext::default(),
        )
        .unwrap();

    assert_eq!(marker.position(), LatLng::new(0.0, 0.0));
    assert_eq!(marker.icon().size(), (75, 75));
}

/// Scenario: absolute icon URL carried through unchanged
#[test]
fn test_absolute_icon_url() {
    let factory =
        IconMarkerFactory::new(IconDescriptor::new("https://example.com/icon.png", 45, 80));
    let marker = factory
        .point_to_layer(
            &bare_feature(),
            LatLng::new(-5.5, 100.25),
            &FactoryContext::default(),
        )
        .unwrap();

    assert_eq!(marker.position(), LatLng::new(-5.5, 100.25));
    assert_eq!(marker.icon().image_source, "https://example.com/icon.png");
    assert_eq!(marker.icon().size(), (45, 80));
}

/// Every marker from one factory carries the same injected descriptor
#[test]
fn test_one_descriptor_per_factory() {
    let descriptor = IconDescriptor::new("assets/map_marker.png", 78, 77);
    let factory = IconMarkerFactory::new(descriptor.clone());
    let ctx = FactoryContext::default();

    for latlng in [
        LatLng::new(10.0, 20.0),
        LatLng::new(-45.0, 170.0),
        LatLng::new(0.0, 0.0),
    ] {
        let marker = factory
            .point_to_layer(&bare_feature(), latlng, &ctx)
            .unwrap();
        assert_eq!(marker.icon(), &descriptor);
        assert_eq!(marker.position(), latlng);
    }
}

/// Registered factory resolved by path drives layer materialization
#[test]
fn test_registry_wiring_end_to_end() {
    let mut registry = FactoryRegistry::new();
    let path = FactoryPath::new("myNamespace", "mySubNamespace", "pointToLayer");
    registry.register(
        path.clone(),
        Arc::new(IconMarkerFactory::new(IconDescriptor::new(
            "assets/map_marker.png",
            78,
            77,
        ))),
    );

    let records: Vec<Record> = (0..3)
        .map(|i| {
            HashMap::from([
                ("lat".to_string(), serde_json::json!(40.0 + i as f64)),
                ("lon".to_string(), serde_json::json!(-74.0 + i as f64)),
                ("id".to_string(), serde_json::json!(i)),
            ])
        })
        .collect();

    let data = records_to_geojson(&records);
    let factory = registry.resolve(&path).unwrap();
    let layer = PointLayer::new("census".to_string(), data, factory);

    let markers = layer.markers().unwrap();
    assert_eq!(markers.len(), 3);
    for (i, marker) in markers.iter().enumerate() {
        assert_eq!(
            marker.position(),
            LatLng::new(40.0 + i as f64, -74.0 + i as f64)
        );
        assert_eq!(marker.icon().size(), (78, 77));
    }
}

/// Materialization is repeatable: two calls produce independent but
/// configurationally identical markers
#[test]
fn test_materialization_is_idempotent() {
    let data = GeoJson::from_str(
        r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "one"},
                    "geometry": {"type": "Point", "coordinates": [10.0, 56.0]}
                }
            ]
        }"#,
    )
    .unwrap();

    let layer = PointLayer::new(
        "repeat".to_string(),
        data,
        Arc::new(IconMarkerFactory::default()),
    );

    let first = layer.markers().unwrap();
    let second = layer.markers().unwrap();
    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].position(), second[0].position());
    assert_eq!(first[0].icon(), second[0].icon());
}

/// Bare-geometry documents and nested geometry collections load like any
/// other GeoJSON input
#[test]
fn test_bare_and_nested_geometry_documents() {
    let bare = GeoJson::from_str(r#"{"type": "Point", "coordinates": [10.0, 56.0]}"#).unwrap();
    assert!(bare.bounds().unwrap().contains(&LatLng::new(56.0, 10.0)));

    let nested = GeoJson::from_str(
        r#"
        {
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "GeometryCollection",
                        "geometries": [
                            {"type": "Point", "coordinates": [10.0, 56.0]},
                            {"type": "Point", "coordinates": [11.0, 57.0]}
                        ]
                    }
                }
            ]
        }
        "#,
    )
    .unwrap();

    let layer = PointLayer::new(
        "nested".to_string(),
        nested,
        Arc::new(IconMarkerFactory::default()),
    );
    let markers = layer.markers().unwrap();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].position(), LatLng::new(56.0, 10.0));
    assert_eq!(markers[1].position(), LatLng::new(57.0, 11.0));
}

/// An out-of-range coordinate fails materialization at the marker boundary
#[test]
fn test_invalid_coordinate_rejected_by_marker_constructor() {
    let data = GeoJson::FeatureCollection {
        features: vec![GeoJsonFeature {
            id: None,
            geometry: Some(GeoJsonGeometry::Point {
                coordinates: [500.0, 95.0],
            }),
            properties: None,
        }],
    };

    let layer = PointLayer::new(
        "broken".to_string(),
        data,
        Arc::new(IconMarkerFactory::default()),
    );
    assert!(layer.markers().is_err());
}

/// Layer bounds and record center line up with the loaded data
#[test]
fn test_layer_bounds_and_center() {
    let records = vec![
        HashMap::from([
            ("lat".to_string(), serde_json::json!(40.0)),
            ("lon".to_string(), serde_json::json!(-74.0)),
        ]),
        HashMap::from([
            ("lat".to_string(), serde_json::json!(42.0)),
            ("lon".to_string(), serde_json::json!(-72.0)),
        ]),
    ];

    let center = mean_center(&records).unwrap();
    assert_eq!(center, LatLng::new(41.0, -73.0));

    let layer = PointLayer::new(
        "bounds".to_string(),
        records_to_geojson(&records),
        Arc::new(IconMarkerFactory::default()),
    );
    let bounds = layer.bounds().unwrap();
    assert_eq!(bounds.center(), center);
    assert!(bounds.contains(&center));
}
