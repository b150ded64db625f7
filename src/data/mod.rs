pub mod geojson;
pub mod records;
