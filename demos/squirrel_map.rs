use std::collections::HashMap;
use std::sync::Arc;

use pinmap::prelude::*;

/// Example of wiring a point dataset to an icon-marker factory without a UI
fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("🐿️ Squirrel Census Marker Demo");
    println!("==============================");

    // Flat survey rows, the shape a CSV export lands in
    let sightings = [
        (40.79408, -73.95613, "Adult", "Gray"),
        (40.79485, -73.96987, "Juvenile", "Cinnamon"),
        (40.76718, -73.97365, "Adult", "Black"),
        (40.78391, -73.96620, "Unknown", "Gray"),
    ];

    let records: Vec<Record> = sightings
        .iter()
        .map(|(lat, lon, age, fur)| {
            HashMap::from([
                ("lat".to_string(), serde_json::json!(lat)),
                ("lon".to_string(), serde_json::json!(lon)),
                ("Age".to_string(), serde_json::json!(age)),
                ("Primary Fur Color".to_string(), serde_json::json!(fur)),
            ])
        })
        .collect();

    let center = mean_center(&records).expect("records carry coordinates");
    println!("✅ Loaded {} sightings", records.len());
    println!("   Map center: {:.5}, {:.5}", center.lat, center.lng);

    // Register the factory under the path the page wiring resolves
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
    println!("✅ Factory registered at {}", path);

    // Materialize one marker per sighting through the resolved factory
    let factory = registry
        .resolve(&path)
        .ok_or_else(|| anyhow::anyhow!("no factory at {}", path))?;
    let layer = PointLayer::new(
        "unique-squirrel-id".to_string(),
        records_to_geojson(&records),
        factory,
    );

    let markers = layer
        .markers()
        .map_err(|e| anyhow::anyhow!("materialization failed: {}", e))?;

    println!("\n🎯 Markers:");
    for marker in &markers {
        let pos = marker.position();
        println!(
            "   📍 {:.5}, {:.5} ({} {}x{})",
            pos.lat,
            pos.lng,
            marker.icon().image_source,
            marker.icon().width,
            marker.icon().height,
        );
    }

    if let Some(bounds) = layer.bounds() {
        println!(
            "\n✅ Layer bounds: ({:.5}, {:.5}) .. ({:.5}, {:.5})",
            bounds.south_west.lat, bounds.south_west.lng, bounds.north_east.lat, bounds.north_east.lng,
        );
    }

    Ok(())
}
