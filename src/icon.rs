//! Icon descriptors for marker rendering
//!
//! An [`IconDescriptor`] carries the image URL and pixel dimensions a map
//! widget needs to draw a marker icon. Descriptors are plain immutable
//! values: no validation of the URL happens here, a missing image surfaces
//! as a broken-image placeholder in the host renderer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::geo::Point;

/// The image URL and pixel dimensions used to render a map marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Relative asset path or absolute URL of the icon image
    pub image_source: String,
    /// Rendered icon width in pixels
    pub width: u32,
    /// Rendered icon height in pixels
    pub height: u32,
}

/// Descriptor used when no icon is injected explicitly
pub static DEFAULT_ICON: Lazy<IconDescriptor> =
    Lazy::new(|| IconDescriptor::new("assets/map_marker.png", 78, 77));

impl IconDescriptor {
    /// Creates a new icon descriptor. Dimensions are in pixels.
    pub fn new(image_source: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            image_source: image_source.into(),
            width,
            height,
        }
    }

    /// Icon size as a (width, height) pixel pair
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Icon size as a screen-space point
    pub fn pixel_size(&self) -> Point {
        Point::new(self.width as f64, self.height as f64)
    }

    /// Leaflet-shaped options for the host widget
    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "iconUrl": self.image_source,
            "iconSize": [self.width, self.height]
        })
    }
}

impl Default for IconDescriptor {
    fn default() -> Self {
        DEFAULT_ICON.clone()
    }
}
