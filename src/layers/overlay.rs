use crate::{
    core::geo::LatLngBounds,
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::CircleMarker,
        RenderedFeature,
    },
    render::RenderOutcome,
};

/// Named group of rendered features, toggled on and off as a unit
pub struct OverlayLayer {
    properties: LayerProperties,
    features: Vec<RenderedFeature>,
    skipped: usize,
}

impl OverlayLayer {
    pub fn new(id: String, name: String) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Overlay),
            features: Vec::new(),
            skipped: 0,
        }
    }

    /// Appends the result of rendering one dataset
    pub fn populate(&mut self, outcome: RenderOutcome) {
        self.skipped += outcome.skipped;
        self.features.extend(outcome.rendered);
    }

    pub fn features(&self) -> &[RenderedFeature] {
        &self.features
    }

    pub fn markers(&self) -> impl Iterator<Item = &CircleMarker> {
        self.features.iter().filter_map(RenderedFeature::as_marker)
    }

    /// Features dropped while rendering because they were malformed or unsupported
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl LayerTrait for OverlayLayer {
    crate::impl_layer_trait!(OverlayLayer, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "features": self.features,
            "skipped": self.skipped,
        })
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        self.features
            .iter()
            .filter_map(RenderedFeature::bounds)
            .reduce(|acc, b| acc.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::geo::LatLng,
        data::geojson::GeometryType,
        layers::vector::VectorPath,
        style::{LineStyle, MarkerStyle},
    };

    fn marker(lat: f64, lng: f64) -> RenderedFeature {
        RenderedFeature::Marker(CircleMarker::new(
            LatLng::new(lat, lng),
            MarkerStyle::for_magnitude(Some(2.0)),
        ))
    }

    #[test]
    fn test_populate_accumulates() {
        let mut overlay = OverlayLayer::new("events".into(), "Earthquakes".into());
        assert!(overlay.is_empty());

        overlay.populate(RenderOutcome {
            rendered: vec![marker(1.0, 1.0), marker(2.0, 2.0)],
            skipped: 1,
        });

        assert_eq!(overlay.len(), 2);
        assert_eq!(overlay.markers().count(), 2);
        assert_eq!(overlay.skipped(), 1);
        assert_eq!(overlay.layer_type(), LayerType::Overlay);
    }

    #[test]
    fn test_bounds_cover_markers_and_paths() {
        let mut overlay = OverlayLayer::new("mixed".into(), "Mixed".into());
        assert!(overlay.bounds().is_none());

        overlay.populate(RenderOutcome {
            rendered: vec![
                marker(10.0, -10.0),
                RenderedFeature::Path(VectorPath::new(
                    GeometryType::LineString,
                    vec![vec![LatLng::new(-20.0, 5.0), LatLng::new(0.0, 30.0)]],
                    LineStyle::boundary(),
                )),
            ],
            skipped: 0,
        });

        let bounds = overlay.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-20.0, -10.0));
        assert_eq!(bounds.north_east, LatLng::new(10.0, 30.0));
    }

    #[test]
    fn test_options_serializes_features() {
        let mut overlay = OverlayLayer::new("events".into(), "Earthquakes".into());
        overlay.populate(RenderOutcome {
            rendered: vec![marker(1.0, 2.0)],
            skipped: 0,
        });
        let options = overlay.options();
        assert_eq!(options["features"][0]["type"], "marker");
        assert_eq!(options["skipped"], 0);
    }
}
