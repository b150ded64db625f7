//! # pinmap
//!
//! Marker icon factories and point-to-layer registries for map widgets,
//! inspired by Leaflet's `pointToLayer` pattern.
//!
//! The crate covers the glue between a loaded point-feature collection and
//! the markers a map widget draws for it: an immutable [`IconDescriptor`]
//! describing the marker image, a [`PointToLayer`] factory invoked once per
//! point feature, and an explicit namespaced [`FactoryRegistry`] the host
//! page wires the callback through.

pub mod core;
pub mod data;
pub mod factory;
pub mod icon;
pub mod layers;
pub mod prelude;
pub mod registry;

// Re-export public API
pub use crate::core::geo::{LatLng, LatLngBounds, Point};

pub use crate::icon::IconDescriptor;

pub use crate::layers::{base::LayerTrait, marker::Marker};

pub use crate::factory::{FactoryContext, IconMarkerFactory, PointToLayer};

pub use crate::registry::{FactoryPath, FactoryRegistry};

pub use crate::data::geojson::{GeoJson, GeoJsonFeature, PointLayer};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
