//! Tabular record conversion
//!
//! Datasets for point maps often arrive as flat rows (CSV exports, survey
//! dumps) with `lat`/`lon` columns. These helpers turn such rows into a
//! GeoJSON feature collection the point layer can materialize, and compute
//! the mean center used for the initial map view.

use std::collections::HashMap;

use crate::{
    core::geo::LatLng,
    data::geojson::{GeoJson, GeoJsonFeature},
};

/// One flat data row: column name to value
pub type Record = HashMap<String, serde_json::Value>;

/// Column holding the latitude value
pub const LAT_COLUMN: &str = "lat";
/// Column holding the longitude value
pub const LON_COLUMN: &str = "lon";

fn coordinate(record: &Record, column: &str) -> Option<f64> {
    let value = record.get(column)?.as_f64()?;
    value.is_finite().then_some(value)
}

/// Converts flat records into a GeoJSON feature collection.
///
/// Each row with finite `lat`/`lon` values becomes one point feature; the
/// remaining columns become the feature's properties. Rows without usable
/// coordinates are skipped.
pub fn records_to_geojson(records: &[Record]) -> GeoJson {
    let mut features = Vec::with_capacity(records.len());

    for record in records {
        let (lat, lon) = match (coordinate(record, LAT_COLUMN), coordinate(record, LON_COLUMN)) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                log::debug!("skipping record without usable coordinates");
                continue;
            }
        };

        let properties: HashMap<String, serde_json::Value> = record
            .iter()
            .filter(|(key, _)| key.as_str() != LAT_COLUMN && key.as_str() != LON_COLUMN)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        features.push(GeoJsonFeature::point(LatLng::new(lat, lon), properties));
    }

    GeoJson::FeatureCollection { features }
}

/// Mean center of the records' coordinates, for centering the initial view.
///
/// Returns `None` when no record carries usable coordinates.
pub fn mean_center(records: &[Record]) -> Option<LatLng> {
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;
    let mut count = 0usize;

    for record in records {
        if let (Some(lat), Some(lon)) =
            (coordinate(record, LAT_COLUMN), coordinate(record, LON_COLUMN))
        {
            lat_sum += lat;
            lon_sum += lon;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    Some(LatLng::new(lat_sum / count as f64, lon_sum / count as f64))
}
