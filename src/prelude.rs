//! Prelude module for common pinmap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use pinmap::prelude::*;`

pub use crate::core::geo::{LatLng, LatLngBounds, Point};

pub use crate::icon::{IconDescriptor, DEFAULT_ICON};

pub use crate::layers::{
    base::{LayerProperties, LayerTrait, LayerType},
    marker::Marker,
};

pub use crate::factory::{FactoryContext, IconMarkerFactory, PointToLayer};

pub use crate::registry::{FactoryPath, FactoryRegistry};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry, PointLayer},
    records::{mean_center, records_to_geojson, Record},
};

pub use crate::{Error, MapError, Result};
