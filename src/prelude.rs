//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    config::{BasemapStyle, TileLayerOptions, VisualizationConfig},
    geo::{LatLng, LatLngBounds, TileCoord},
    map::{Map, MapOptions},
};

pub use crate::data::{
    dataset::{Dataset, DatasetKind, LoadState},
    geojson::{Feature, GeoJson, GeoJsonFeature, Geometry, GeometryType},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    composer::LayerComposer,
    marker::CircleMarker,
    overlay::OverlayLayer,
    tile::TileLayer,
    vector::VectorPath,
    RenderedFeature,
};

pub use crate::loader::{DataLoader, LoadReport, StageReport};

pub use crate::render::{FeatureRenderer, RenderOutcome};

pub use crate::style::{color_for, radius_for, LineStyle, MarkerStyle};

pub use crate::traits::{MapSurface, Transport};

pub use crate::ui::{Legend, LegendEntry, LayerControl, Popup, Position, PositionedControl};

pub use crate::visualization::Visualization;

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
