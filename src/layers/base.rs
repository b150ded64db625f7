use crate::{core::geo::LatLngBounds, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Marker,
    GeoJson,
    Custom,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Marker => write!(f, "marker"),
            LayerType::GeoJson => write!(f, "geojson"),
            LayerType::Custom => write!(f, "custom"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
    pub interactive: bool,
    pub options: serde_json::Value,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: 0,
            opacity: 1.0,
            visible: true,
            interactive: true,
            options: serde_json::Value::Null,
        }
    }
}

impl Default for LayerProperties {
    fn default() -> Self {
        Self::new(
            "default".to_string(),
            "Default Layer".to_string(),
            LayerType::Custom,
        )
    }
}

/// Trait for layer-like objects
///
/// The rendering half of a map engine's layer contract lives with the host
/// widget; this trait covers the identity, ordering and option surface the
/// factory side needs.
pub trait LayerTrait: Send + Sync {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer opacity (0.0 to 1.0)
    fn opacity(&self) -> f32;

    /// Set layer opacity
    fn set_opacity(&mut self, opacity: f32);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Set layer z-index
    fn set_z_index(&mut self, z_index: i32);

    /// Get layer bounds if applicable
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Get layer options
    fn options(&self) -> serde_json::Value;

    /// Set layer options
    fn set_options(&mut self, options: serde_json::Value) -> Result<()>;

    /// Dynamic casting support
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
