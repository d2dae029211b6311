//! # quakemap
//!
//! Layered map composition for recent seismic events and tectonic plate
//! boundaries, in the spirit of a Leaflet page.
//!
//! Two GeoJSON feeds are fetched in a strict order, every feature is turned
//! into a styled marker or path, and the results are grouped into togglable
//! overlays sitting on top of one of three switchable base maps. A legend
//! derived from the very same color rule explains the marker encoding.

pub mod core;
pub mod data;
pub mod layers;
pub mod loader;
pub mod prelude;
pub mod render;
pub mod style;
pub mod tiles;
pub mod traits;
pub mod ui;
pub mod visualization;

pub use crate::core::constants;

// Re-export public API
pub use core::{
    config::{BasemapStyle, VisualizationConfig},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::Map,
};

pub use data::{
    dataset::{Dataset, DatasetKind, LoadState},
    geojson::{Feature, GeoJson, GeoJsonFeature, Geometry},
};

pub use layers::{
    base::LayerTrait, composer::LayerComposer, marker::CircleMarker, overlay::OverlayLayer,
    tile::TileLayer, vector::VectorPath, RenderedFeature,
};

pub use loader::{DataLoader, LoadReport, StageReport};

pub use render::{FeatureRenderer, RenderOutcome};

pub use style::{color_for, radius_for, LineStyle, MarkerStyle};

pub use traits::{MapSurface, Transport};

pub use ui::{
    controls::{LayerControl, PositionedControl},
    elements::Position,
    legend::{Legend, LegendEntry},
    popup::Popup,
};

pub use visualization::Visualization;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Malformed feature: {0}")]
    MalformedFeature(String),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl MapError {
    /// Errors scoped to a single feature; the rest of the dataset still renders.
    pub fn is_per_feature(&self) -> bool {
        matches!(
            self,
            MapError::MalformedFeature(_) | MapError::UnsupportedGeometry(_)
        )
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Parse(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for MapError {
    fn from(err: reqwest::Error) -> Self {
        MapError::Transport(err.to_string())
    }
}

/// Error type alias for convenience
pub type Error = MapError;
