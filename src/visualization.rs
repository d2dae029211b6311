use crate::{
    core::{
        config::VisualizationConfig,
        map::{Map, MapOptions},
    },
    data::dataset::DatasetKind,
    layers::{composer::LayerComposer, marker::CircleMarker, overlay::OverlayLayer},
    loader::{DataLoader, LoadReport},
    traits::{MapSurface, Transport},
    ui::legend::Legend,
    Result,
};
use once_cell::sync::OnceCell;

/// Top-level controller owning the map, its layers, the loader and the
/// legend for one page load
pub struct Visualization {
    config: VisualizationConfig,
    map: Map,
    composer: LayerComposer,
    loader: DataLoader,
    legend: OnceCell<Legend>,
}

impl Visualization {
    /// Builds the map in its opening state: default base map, empty events
    /// overlay and a layer switcher that already lists the boundaries.
    pub fn new(config: VisualizationConfig) -> Self {
        let mut map = Map::new(MapOptions::from(&config));
        let composer = LayerComposer::from_config(&config);
        composer.initialize(&mut map);

        let legend = OnceCell::new();
        legend.get_or_init(Legend::build);

        Self {
            loader: DataLoader::from_config(&config),
            config,
            map,
            composer,
            legend,
        }
    }

    pub fn config(&self) -> &VisualizationConfig {
        &self.config
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn composer(&self) -> &LayerComposer {
        &self.composer
    }

    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    pub fn legend(&self) -> &Legend {
        self.legend.get_or_init(Legend::build)
    }

    /// Loads both feeds in order, then puts the legend on the map.
    ///
    /// Fails only when the events feed cannot be loaded. The legend is not
    /// shown in that case.
    pub async fn load<T>(&mut self, transport: &T) -> Result<LoadReport>
    where
        T: Transport + ?Sized,
    {
        let report = self
            .loader
            .run(transport, &mut self.composer, &mut self.map)
            .await?;

        let legend = self.legend.get_or_init(Legend::build).to_control();
        self.map.add_control(legend);

        Ok(report)
    }

    /// Puts an overlay on the map (again). Returns whether it was newly added.
    pub fn show_overlay(&mut self, kind: DatasetKind) -> bool {
        self.composer.attach(kind, &mut self.map)
    }

    /// Markers of every overlay currently on the map
    pub fn visible_markers(&self) -> Vec<&CircleMarker> {
        self.map
            .layer_ids()
            .iter()
            .filter_map(|id| self.composer.layer(id))
            .filter_map(|layer| layer.as_any().downcast_ref::<OverlayLayer>())
            .flat_map(OverlayLayer::markers)
            .collect()
    }

    /// JSON snapshot of what the map shows
    pub fn scene(&self) -> serde_json::Value {
        let layers: Vec<serde_json::Value> = self
            .map
            .layer_ids()
            .iter()
            .filter_map(|id| self.composer.layer(id))
            .map(|layer| {
                serde_json::json!({
                    "id": layer.id(),
                    "name": layer.name(),
                    "type": layer.layer_type(),
                    "options": layer.options(),
                    "bounds": layer.bounds(),
                })
            })
            .collect();

        serde_json::json!({
            "center": self.map.center(),
            "zoom": self.map.zoom(),
            "layers": layers,
            "layerControl": self.map.layer_control(),
            "controls": self.map.controls(),
            "errors": self.map.errors(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_state() {
        let viz = Visualization::new(VisualizationConfig::default().with_access_token("pk.test"));

        assert_eq!(viz.map().layer_ids(), ["satellite", "events"]);
        assert!(viz.map().controls().is_empty());
        assert!(viz.visible_markers().is_empty());
        assert_eq!(viz.legend().entries().len(), 6);
        assert!(std::ptr::eq(viz.legend(), viz.legend()));
    }

    #[test]
    fn test_scene_lists_live_layers() {
        let viz = Visualization::new(VisualizationConfig::default().with_access_token("pk.test"));
        let scene = viz.scene();

        assert_eq!(scene["zoom"], 2.0);
        assert_eq!(scene["layers"][0]["id"], "satellite");
        assert_eq!(scene["layers"][0]["type"], "Tile");
        assert_eq!(scene["layers"][1]["id"], "events");
        assert!(scene["layers"][1]["bounds"].is_null());
        assert_eq!(scene["layerControl"]["overlays"][1]["name"], "Tectonic Plates");
    }
}
