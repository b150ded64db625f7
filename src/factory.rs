//! Point-to-layer factories
//!
//! A [`PointToLayer`] factory is invoked once per point feature by the layer
//! that materializes a feature collection, and returns the marker the host
//! widget should draw for it. Factories are stateless and deterministic:
//! the same coordinate and the same injected configuration always produce an
//! equivalent marker.

use crate::{
    core::geo::LatLng,
    data::geojson::GeoJsonFeature,
    icon::IconDescriptor,
    layers::marker::Marker,
    Result,
};

/// Opaque per-invocation context forwarded to factories.
///
/// Mirrors the third argument of Leaflet's `pointToLayer` callback; most
/// factories ignore it.
#[derive(Debug, Clone, Default)]
pub struct FactoryContext {
    /// ID of the layer the feature belongs to, when known
    pub layer_id: Option<String>,
    /// Host-supplied options, passed through untouched
    pub options: serde_json::Value,
}

impl FactoryContext {
    pub fn for_layer(layer_id: impl Into<String>) -> Self {
        Self {
            layer_id: Some(layer_id.into()),
            options: serde_json::Value::Null,
        }
    }
}

/// Callback contract for turning a point feature into a marker.
pub trait PointToLayer: Send + Sync {
    fn point_to_layer(
        &self,
        feature: &GeoJsonFeature,
        latlng: LatLng,
        context: &FactoryContext,
    ) -> Result<Marker>;
}

impl<F> PointToLayer for F
where
    F: Fn(&GeoJsonFeature, LatLng, &FactoryContext) -> Result<Marker> + Send + Sync,
{
    fn point_to_layer(
        &self,
        feature: &GeoJsonFeature,
        latlng: LatLng,
        context: &FactoryContext,
    ) -> Result<Marker> {
        self(feature, latlng, context)
    }
}

/// Factory producing markers styled with one fixed icon.
///
/// The descriptor is injected at construction time and never mutated, so
/// every marker from one factory carries the same icon.
pub struct IconMarkerFactory {
    icon: IconDescriptor,
}

impl IconMarkerFactory {
    pub fn new(icon: IconDescriptor) -> Self {
        Self { icon }
    }

    pub fn icon(&self) -> &IconDescriptor {
        &self.icon
    }

    fn marker_id(feature: &GeoJsonFeature, latlng: LatLng) -> String {
        match &feature.id {
            Some(serde_json::Value::String(id)) => format!("marker-{}", id),
            Some(id) => format!("marker-{}", id),
            None => format!("marker-{}-{}", latlng.lat, latlng.lng),
        }
    }
}

impl Default for IconMarkerFactory {
    fn default() -> Self {
        Self::new(IconDescriptor::default())
    }
}

impl PointToLayer for IconMarkerFactory {
    fn point_to_layer(
        &self,
        feature: &GeoJsonFeature,
        latlng: LatLng,
        _context: &FactoryContext,
    ) -> Result<Marker> {
        Marker::new(Self::marker_id(feature, latlng), latlng, self.icon.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_feature() -> GeoJsonFeature {
        GeoJsonFeature {
            id: None,
            geometry: None,
            properties: None,
        }
    }

    #[test]
    fn test_factory_positions_marker() {
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

    #[test]
    fn test_factory_is_deterministic() {
        let factory = IconMarkerFactory::new(IconDescriptor::new("assets/marker.png", 75, 75));
        let feature = bare_feature();
        let ctx = FactoryContext::default();

        let a = factory
            .point_to_layer(&feature, LatLng::new(0.0, 0.0), &ctx)
            .unwrap();
        let b = factory
            .point_to_layer(&feature, LatLng::new(0.0, 0.0), &ctx)
            .unwrap();

        // Independently constructed, configurationally identical
        assert_eq!(a.position(), b.position());
        assert_eq!(a.icon(), b.icon());
    }

    #[test]
    fn test_factory_propagates_invalid_coordinates() {
        let factory = IconMarkerFactory::default();
        let result = factory.point_to_layer(
            &bare_feature(),
            LatLng::new(-120.0, 0.0),
            &FactoryContext::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_closure_factory() {
        let icon = IconDescriptor::new("https://example.com/icon.png", 45, 80);
        let factory = move |_: &GeoJsonFeature, latlng: LatLng, _: &FactoryContext| {
            Marker::new("closure".to_string(), latlng, icon.clone())
        };

        let marker = factory
            .point_to_layer(
                &bare_feature(),
                LatLng::new(-5.5, 100.25),
                &FactoryContext::default(),
            )
            .unwrap();
        assert_eq!(marker.icon().size(), (45, 80));
    }
}
