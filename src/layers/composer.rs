use crate::{
    core::{
        config::{BasemapStyle, VisualizationConfig},
        constants::{BOUNDARIES_OVERLAY_NAME, EVENTS_OVERLAY_NAME},
    },
    data::dataset::DatasetKind,
    layers::{base::LayerTrait, overlay::OverlayLayer, tile::TileLayer},
    render::RenderOutcome,
    traits::MapSurface,
    ui::controls::LayerControl,
};

/// Owns every layer of the visualization: the three base maps and the
/// events and boundaries overlays.
///
/// Both overlays exist from the start so the layer switcher can list them
/// before any data has arrived.
pub struct LayerComposer {
    base_layers: Vec<TileLayer>,
    default_base: usize,
    events: OverlayLayer,
    boundaries: OverlayLayer,
}

impl LayerComposer {
    pub fn new(access_token: &str, default_base: BasemapStyle) -> Self {
        let base_layers = BasemapStyle::ALL
            .iter()
            .map(|style| TileLayer::from_style(*style, access_token))
            .collect();
        let default_base = BasemapStyle::ALL
            .iter()
            .position(|style| *style == default_base)
            .unwrap_or(0);

        Self {
            base_layers,
            default_base,
            events: OverlayLayer::new(
                DatasetKind::Events.overlay_id().to_string(),
                EVENTS_OVERLAY_NAME.to_string(),
            ),
            boundaries: OverlayLayer::new(
                DatasetKind::Boundaries.overlay_id().to_string(),
                BOUNDARIES_OVERLAY_NAME.to_string(),
            ),
        }
    }

    pub fn from_config(config: &VisualizationConfig) -> Self {
        Self::new(&config.access_token, config.default_base)
    }

    pub fn base_layers(&self) -> &[TileLayer] {
        &self.base_layers
    }

    /// Base map shown when the map first opens
    pub fn default_base(&self) -> &TileLayer {
        &self.base_layers[self.default_base]
    }

    pub fn overlay(&self, kind: DatasetKind) -> &OverlayLayer {
        match kind {
            DatasetKind::Events => &self.events,
            DatasetKind::Boundaries => &self.boundaries,
        }
    }

    fn overlay_mut(&mut self, kind: DatasetKind) -> &mut OverlayLayer {
        match kind {
            DatasetKind::Events => &mut self.events,
            DatasetKind::Boundaries => &mut self.boundaries,
        }
    }

    /// Looks up any owned layer by id
    pub fn layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        let overlays: [&dyn LayerTrait; 2] = [&self.events, &self.boundaries];
        self.base_layers
            .iter()
            .map(|layer| layer as &dyn LayerTrait)
            .chain(overlays)
            .find(|layer| layer.id() == layer_id)
    }

    /// Switcher entries: mutually exclusive base maps, independent overlays
    pub fn layer_control(&self) -> LayerControl {
        let control = self
            .base_layers
            .iter()
            .fold(LayerControl::new(), |control, layer| {
                control.with_base_layer(layer.name(), layer.id())
            });
        control
            .with_overlay(self.events.name(), self.events.id())
            .with_overlay(self.boundaries.name(), self.boundaries.id())
    }

    /// Sets up the opening state of the map: the switcher with every layer,
    /// the default base map and the (still empty) events overlay.
    pub fn initialize(&self, surface: &mut dyn MapSurface) {
        surface.register_layer_control(self.layer_control());
        surface.add_layer(self.default_base());
        surface.add_layer(&self.events);
    }

    /// Adds the rendered features of a dataset to its overlay
    pub fn populate(&mut self, kind: DatasetKind, outcome: RenderOutcome) {
        let overlay = self.overlay_mut(kind);
        overlay.populate(outcome);
        log::debug!(
            "{} overlay now holds {} features ({} skipped)",
            kind,
            overlay.len(),
            overlay.skipped()
        );
    }

    /// Makes an overlay visible on the map. Repeated calls do not duplicate it.
    pub fn attach(&self, kind: DatasetKind, surface: &mut dyn MapSurface) -> bool {
        surface.add_layer(self.overlay(kind))
    }
}
