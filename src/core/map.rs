use crate::{
    core::{config::VisualizationConfig, geo::LatLng},
    layers::base::LayerTrait,
    prelude::HashSet,
    traits::MapSurface,
    ui::controls::{LayerControl, PositionedControl},
};

#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        let config = VisualizationConfig::default();
        Self {
            center: config.center,
            zoom: config.zoom,
        }
    }
}

impl From<&VisualizationConfig> for MapOptions {
    fn from(config: &VisualizationConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
        }
    }
}

/// Headless map surface.
///
/// Records what a map widget would show: which layers are live and in what
/// stacking order, the registered layer switcher, pinned controls and any
/// error shown to the user.
#[derive(Debug, Default)]
pub struct Map {
    options: MapOptions,
    /// Live layer ids in the order they were added (bottom first)
    layer_order: Vec<String>,
    live: HashSet<String>,
    layer_control: Option<LayerControl>,
    controls: Vec<PositionedControl>,
    errors: Vec<String>,
}

impl Map {
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn center(&self) -> LatLng {
        self.options.center
    }

    pub fn zoom(&self) -> f64 {
        self.options.zoom
    }

    /// Live layer ids, bottom first
    pub fn layer_ids(&self) -> &[String] {
        &self.layer_order
    }

    pub fn layer_control(&self) -> Option<&LayerControl> {
        self.layer_control.as_ref()
    }

    pub fn controls(&self) -> &[PositionedControl] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&PositionedControl> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Messages shown to the user
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl MapSurface for Map {
    fn add_layer(&mut self, layer: &dyn LayerTrait) -> bool {
        let id = layer.id();
        if !self.live.insert(id.to_string()) {
            log::debug!("layer {} already on the map", id);
            return false;
        }
        self.layer_order.push(id.to_string());
        log::debug!("added {} layer {}", layer.layer_type(), id);
        true
    }

    fn has_layer(&self, layer_id: &str) -> bool {
        self.live.contains(layer_id)
    }

    fn register_layer_control(&mut self, control: LayerControl) {
        self.layer_control = Some(control);
    }

    fn add_control(&mut self, control: PositionedControl) -> bool {
        if self.control(&control.id).is_some() {
            return false;
        }
        self.controls.push(control);
        true
    }

    fn show_error(&mut self, message: String) {
        log::error!("{}", message);
        self.errors.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::config::BasemapStyle,
        layers::{overlay::OverlayLayer, tile::TileLayer},
        ui::elements::Position,
    };

    #[test]
    fn test_initial_view() {
        let map = Map::new(MapOptions::default());
        assert_eq!(map.center(), LatLng::new(35.91, -79.07));
        assert_eq!(map.zoom(), 2.0);
        assert!(map.layer_ids().is_empty());
    }

    #[test]
    fn test_add_layer_is_idempotent() {
        let mut map = Map::new(MapOptions::default());
        let base = TileLayer::from_style(BasemapStyle::Satellite, "pk.test");
        let events = OverlayLayer::new("events".into(), "Earthquakes".into());

        assert!(map.add_layer(&base));
        assert!(map.add_layer(&events));
        assert!(!map.add_layer(&events));

        assert_eq!(map.layer_ids(), ["satellite", "events"]);
        assert!(map.has_layer("events"));
    }

    #[test]
    fn test_controls_are_unique_by_id() {
        let mut map = Map::new(MapOptions::default());
        let legend = PositionedControl::new("legend", Position::BottomRight, "<div></div>");
        let other = PositionedControl::new("legend", Position::TopLeft, "other");

        assert!(map.add_control(legend));
        assert!(!map.add_control(other));
        assert_eq!(map.controls().len(), 1);
        assert_eq!(map.control("legend").unwrap().position, Position::BottomRight);
    }

    #[test]
    fn test_errors_are_recorded() {
        let mut map = Map::new(MapOptions::default());
        map.show_error("feed unavailable".to_string());
        assert_eq!(map.errors(), ["feed unavailable"]);
    }
}
