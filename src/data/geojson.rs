use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    core::geo::{LatLng, LatLngBounds},
    factory::{FactoryContext, PointToLayer},
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::Marker,
    },
    Result,
};

/// GeoJSON geometry types
///
/// Non-point geometries are parsed and carried so mixed collections load,
/// but only point geometries participate in marker materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: [f64; 2],
    },
    MultiPoint {
        coordinates: Vec<[f64; 2]>,
    },
    LineString {
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

impl GeoJsonGeometry {
    /// Point coordinates as LatLng values; empty for non-point geometries.
    /// Recurses into geometry collections.
    pub fn point_positions(&self) -> Vec<LatLng> {
        match self {
            GeoJsonGeometry::Point { coordinates } => {
                vec![LatLng::new(coordinates[1], coordinates[0])]
            }
            GeoJsonGeometry::MultiPoint { coordinates } => coordinates
                .iter()
                .map(|c| LatLng::new(c[1], c[0]))
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .flat_map(|g| g.point_positions())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

impl GeoJsonFeature {
    /// Creates a point feature at the given position
    pub fn point(position: LatLng, properties: HashMap<String, serde_json::Value>) -> Self {
        Self {
            id: None,
            geometry: Some(GeoJsonGeometry::Point {
                coordinates: [position.lng, position.lat],
            }),
            properties: Some(properties),
        }
    }
}

/// Root GeoJSON object
///
/// A document is either a feature, a feature collection, or a bare
/// geometry. The `type` tag of a bare geometry names the geometry itself
/// (`"Point"`, not `"Geometry"`), so parsing dispatches on the tag by hand
/// instead of through a derived tagged enum.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
    Geometry(GeoJsonGeometry),
}

impl GeoJson {
    /// Parses a GeoJSON document from a raw JSON string
    pub fn from_str(geojson_str: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(geojson_str)
            .map_err(|e| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e)))?;
        Self::from_value(value)
    }

    /// Parses a GeoJSON document from an already-decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value.get("type").and_then(|t| t.as_str()) {
            Some("Feature") => {
                let feature: GeoJsonFeature = serde_json::from_value(value)
                    .map_err(|e| crate::Error::ParseError(format!("Invalid feature: {}", e)))?;
                Ok(GeoJson::Feature(feature))
            }
            Some("FeatureCollection") => {
                let features = value
                    .get("features")
                    .cloned()
                    .ok_or_else(|| crate::Error::ParseError("missing features".to_string()))?;
                let features: Vec<GeoJsonFeature> = serde_json::from_value(features)
                    .map_err(|e| crate::Error::ParseError(format!("Invalid features: {}", e)))?;
                Ok(GeoJson::FeatureCollection { features })
            }
            _ => {
                let geometry: GeoJsonGeometry = serde_json::from_value(value)
                    .map_err(|e| crate::Error::ParseError(format!("Invalid geometry: {}", e)))?;
                Ok(GeoJson::Geometry(geometry))
            }
        }
    }

    /// Features in the document; a bare geometry carries none
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features.iter().collect(),
            GeoJson::Geometry(_) => Vec::new(),
        }
    }

    /// Features carrying at least one point position
    pub fn point_features(&self) -> Vec<&GeoJsonFeature> {
        self.features()
            .into_iter()
            .filter(|f| {
                f.geometry
                    .as_ref()
                    .map_or(false, |g| !g.point_positions().is_empty())
            })
            .collect()
    }

    /// Bounding box of all point positions in the document
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        let geometries: Vec<&GeoJsonGeometry> = match self {
            GeoJson::Geometry(geometry) => vec![geometry],
            _ => self
                .features()
                .into_iter()
                .filter_map(|f| f.geometry.as_ref())
                .collect(),
        };
        for geometry in geometries {
            for position in geometry.point_positions() {
                if let Some(ref mut b) = bounds {
                    b.extend(&position);
                } else {
                    bounds = Some(LatLngBounds::new(position, position));
                }
            }
        }
        bounds
    }
}

/// Layer binding a point-feature collection to a point-to-layer factory.
///
/// Materialization invokes the factory once per point position, the way a
/// Leaflet GeoJSON layer invokes its `pointToLayer` option.
pub struct PointLayer {
    properties: LayerProperties,
    data: GeoJson,
    factory: Arc<dyn PointToLayer>,
    filter: Option<Box<dyn Fn(&GeoJsonFeature) -> bool + Send + Sync>>,
}

impl PointLayer {
    pub fn new(id: String, data: GeoJson, factory: Arc<dyn PointToLayer>) -> Self {
        let properties = LayerProperties::new(id, "Point Layer".to_string(), LayerType::GeoJson);
        Self {
            properties,
            data,
            factory,
            filter: None,
        }
    }

    /// Sets a filter function to show/hide features
    pub fn with_filter<F>(mut self, filter_fn: F) -> Self
    where
        F: Fn(&GeoJsonFeature) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(filter_fn));
        self
    }

    pub fn data(&self) -> &GeoJson {
        &self.data
    }

    /// Materializes one marker per point position through the factory
    pub fn markers(&self) -> Result<Vec<Marker>> {
        let context = FactoryContext::for_layer(self.properties.id.clone());
        let mut markers = Vec::new();

        for feature in self.data.point_features() {
            if let Some(filter) = &self.filter {
                if !filter(feature) {
                    continue;
                }
            }
            if let Some(geometry) = &feature.geometry {
                for position in geometry.point_positions() {
                    markers.push(self.factory.point_to_layer(feature, position, &context)?);
                }
            }
        }

        log::debug!(
            "layer {} materialized {} markers",
            self.properties.id,
            markers.len()
        );
        Ok(markers)
    }
}

impl LayerTrait for PointLayer {
    crate::impl_layer_trait!(PointLayer, properties);

    crate::impl_basic_options!(properties);

    fn bounds(&self) -> Option<LatLngBounds> {
        self.data.bounds()
    }
}
