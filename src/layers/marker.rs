use crate::{
    core::geo::{LatLng, LatLngBounds},
    icon::IconDescriptor,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    MapError, Result,
};

/// A visual map object representing a point location, styled by an icon.
///
/// Construction is the boundary where invalid coordinates are rejected, the
/// same place a Leaflet-style host library rejects them.
pub struct Marker {
    properties: LayerProperties,
    position: LatLng,
    icon: IconDescriptor,
    popup_text: Option<String>,
}

impl Marker {
    pub fn new(id: String, position: LatLng, icon: IconDescriptor) -> Result<Self> {
        if !position.is_valid() {
            return Err(Box::new(MapError::InvalidCoordinates(format!(
                "({}, {})",
                position.lat, position.lng
            ))));
        }
        let properties = LayerProperties::new(id, "Marker".to_string(), LayerType::Marker);
        Ok(Self {
            properties,
            position,
            icon,
            popup_text: None,
        })
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn icon(&self) -> &IconDescriptor {
        &self.icon
    }

    pub fn popup_text(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }

    pub fn set_position(&mut self, position: LatLng) -> Result<()> {
        if !position.is_valid() {
            return Err(Box::new(MapError::InvalidCoordinates(format!(
                "({}, {})",
                position.lat, position.lng
            ))));
        }
        self.position = position;
        Ok(())
    }
}

impl LayerTrait for Marker {
    crate::impl_layer_trait!(Marker, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "icon": self.icon.options(),
            "popup": self.popup_text
        })
    }

    fn set_options(&mut self, options: serde_json::Value) -> Result<()> {
        if let Some(popup) = options.get("popup").and_then(|v| v.as_str()) {
            self.popup_text = Some(popup.to_string());
        }
        Ok(())
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        Some(LatLngBounds::new(self.position, self.position))
    }
}
