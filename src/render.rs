//! Feature rendering
//!
//! Points become circle markers styled by magnitude and carrying an event
//! popup. Lines and polygons become uniformly styled paths.

use crate::{
    data::geojson::{Feature, GeoJsonFeature, Geometry},
    layers::{marker::CircleMarker, vector::VectorPath, RenderedFeature},
    style::{LineStyle, MarkerStyle},
    ui::popup::Popup,
    Result,
};

/// Features rendered from one dataset, plus how many were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutcome {
    pub rendered: Vec<RenderedFeature>,
    pub skipped: usize,
}

/// Turns features into drawable map objects
#[derive(Debug, Clone, Default)]
pub struct FeatureRenderer {
    path_style: LineStyle,
}

impl FeatureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders an already validated feature
    pub fn render(&self, feature: &Feature) -> RenderedFeature {
        match &feature.geometry {
            Geometry::Point(position) => {
                let style = MarkerStyle::for_magnitude(feature.magnitude);
                let marker = CircleMarker::new(*position, style)
                    .with_id(feature.id.clone())
                    .with_popup(Popup::for_event(
                        feature.magnitude,
                        feature.place.as_deref(),
                        feature.timestamp_millis,
                    ));
                RenderedFeature::Marker(marker)
            }
            Geometry::Path { kind, rings } => RenderedFeature::Path(
                VectorPath::new(*kind, rings.clone(), self.path_style.clone())
                    .with_id(feature.id.clone()),
            ),
        }
    }

    /// Validates and renders one raw feature
    pub fn render_feature(&self, raw: &GeoJsonFeature) -> Result<RenderedFeature> {
        Feature::decode(raw).map(|feature| self.render(&feature))
    }

    /// Renders a whole dataset. Features that fail to decode are logged and
    /// skipped; they never abort the rest.
    pub fn render_features(&self, raws: &[GeoJsonFeature]) -> RenderOutcome {
        let mut outcome = RenderOutcome {
            rendered: Vec::with_capacity(raws.len()),
            skipped: 0,
        };

        for (index, raw) in raws.iter().enumerate() {
            match self.render_feature(raw) {
                Ok(rendered) => outcome.rendered.push(rendered),
                Err(e) if e.is_per_feature() => {
                    log::warn!("skipping feature #{}: {}", index, e);
                    outcome.skipped += 1;
                }
                Err(e) => {
                    log::error!("feature #{} could not be rendered: {}", index, e);
                    outcome.skipped += 1;
                }
            }
        }

        if outcome.skipped > 0 {
            log::info!(
                "rendered {} of {} features ({} skipped)",
                outcome.rendered.len(),
                raws.len(),
                outcome.skipped
            );
        }
        outcome
    }
}
