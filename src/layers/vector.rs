use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::geojson::GeometryType,
    style::LineStyle,
};
use serde::{Deserialize, Serialize};

/// Stroked line or polygon outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorPath {
    pub id: Option<String>,
    kind: GeometryType,
    rings: Vec<Vec<LatLng>>,
    style: LineStyle,
}

impl VectorPath {
    pub fn new(kind: GeometryType, rings: Vec<Vec<LatLng>>, style: LineStyle) -> Self {
        Self {
            id: None,
            kind,
            rings,
            style,
        }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }

    pub fn rings(&self) -> &[Vec<LatLng>] {
        &self.rings
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<LatLng> = self.rings.iter().flatten().copied().collect();
        LatLngBounds::from_points(&points)
    }
}
