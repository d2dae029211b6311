use crate::{
    core::{
        config::{BasemapStyle, TileLayerOptions},
        geo::TileCoord,
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
    tiles::source::{TemplateSource, TileSource},
};

/// A base map drawn from a styled tile service.
///
/// The tiles themselves are painted by the external tile renderer; this
/// layer only knows how to address them.
pub struct TileLayer {
    /// Base layer properties
    properties: LayerProperties,
    /// Tile layer specific options
    options: TileLayerOptions,
    /// URL builder for individual tiles
    source: TemplateSource,
}

impl TileLayer {
    /// Create a new tile layer with custom options
    pub fn with_options(
        id: String,
        name: String,
        options: TileLayerOptions,
        access_token: &str,
    ) -> Self {
        let properties = LayerProperties::new(id, name, LayerType::Tile);
        let source = TemplateSource::new(
            options.url_template.clone(),
            options.style_id.clone(),
            access_token,
        )
        .with_zoom_offset(options.zoom_offset);

        Self {
            properties,
            options,
            source,
        }
    }

    /// Create the tile layer for one of the preset base maps
    pub fn from_style(style: BasemapStyle, access_token: &str) -> Self {
        Self::with_options(
            style.layer_id().to_string(),
            style.display_name().to_string(),
            style.resolve(),
            access_token,
        )
    }

    /// Whether the service serves tiles at this zoom
    pub fn covers_zoom(&self, zoom: u8) -> bool {
        (self.options.min_zoom..=self.options.max_zoom).contains(&zoom)
    }

    /// URL of a tile, or `None` when the zoom is outside the layer's range
    pub fn tile_url(&self, coord: TileCoord) -> Option<String> {
        if !self.covers_zoom(coord.z) || !coord.is_valid() {
            return None;
        }
        Some(self.source.url(coord))
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.options.style_id,
            "attribution": self.options.attribution,
            "tileSize": self.options.tile_size,
            "minZoom": self.options.min_zoom,
            "maxZoom": self.options.max_zoom,
            "zoomOffset": self.options.zoom_offset,
        })
    }
}
