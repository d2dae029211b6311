pub mod base;
pub mod composer;
pub mod macros;
pub mod marker;
pub mod overlay;
pub mod tile;
pub mod vector;

use crate::core::geo::LatLngBounds;
use marker::CircleMarker;
use serde::{Deserialize, Serialize};
use vector::VectorPath;

/// A feature turned into something the map can draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedFeature {
    Marker(CircleMarker),
    Path(VectorPath),
}

impl RenderedFeature {
    pub fn as_marker(&self) -> Option<&CircleMarker> {
        match self {
            RenderedFeature::Marker(marker) => Some(marker),
            RenderedFeature::Path(_) => None,
        }
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            RenderedFeature::Marker(marker) => {
                Some(LatLngBounds::new(marker.position(), marker.position()))
            }
            RenderedFeature::Path(path) => path.bounds(),
        }
    }
}
