//! Configuration for the visualization
//!
//! Base maps are described by presets that resolve into concrete tile layer
//! options.

use crate::{
    core::{
        constants::{
            ACCESS_TOKEN_ENV, BASEMAP_MAX_ZOOM, BOUNDARIES_URL, DEFAULT_CENTER, DEFAULT_ZOOM,
            EVENTS_URL, LIGHT_NAME, LIGHT_STYLE_ID, OUTDOORS_ATTRIBUTION, OUTDOORS_NAME,
            OUTDOORS_STYLE_ID, OUTDOORS_TILE_SIZE, OUTDOORS_ZOOM_OFFSET, SATELLITE_NAME,
            SATELLITE_STYLE_ID, STREETS_ATTRIBUTION, TILE_URL_TEMPLATE,
        },
        geo::LatLng,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// Options describing one styled tile source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerOptions {
    /// URL template with `{id}`, `{z}`, `{x}`, `{y}` and `{accessToken}` placeholders
    pub url_template: String,
    /// Style identifier substituted for `{id}`
    pub style_id: String,
    pub attribution: String,
    pub tile_size: u32,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Added to the requested zoom before it is put in the URL
    pub zoom_offset: i8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: TILE_URL_TEMPLATE.to_string(),
            style_id: SATELLITE_STYLE_ID.to_string(),
            attribution: STREETS_ATTRIBUTION.to_string(),
            tile_size: 256,
            min_zoom: 0,
            max_zoom: BASEMAP_MAX_ZOOM,
            zoom_offset: 0,
        }
    }
}

/// The three selectable base maps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BasemapStyle {
    #[default]
    Satellite,
    Light,
    Outdoors,
}

impl BasemapStyle {
    /// Every style, in layer control order
    pub const ALL: [BasemapStyle; 3] = [Self::Satellite, Self::Light, Self::Outdoors];

    pub fn resolve(&self) -> TileLayerOptions {
        match self {
            Self::Satellite => TileLayerOptions::default(),
            Self::Light => TileLayerOptions {
                style_id: LIGHT_STYLE_ID.to_string(),
                ..TileLayerOptions::default()
            },
            Self::Outdoors => TileLayerOptions {
                style_id: OUTDOORS_STYLE_ID.to_string(),
                attribution: OUTDOORS_ATTRIBUTION.to_string(),
                tile_size: OUTDOORS_TILE_SIZE,
                zoom_offset: OUTDOORS_ZOOM_OFFSET,
                ..TileLayerOptions::default()
            },
        }
    }

    /// Label shown in the layer control
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Satellite => SATELLITE_NAME,
            Self::Light => LIGHT_NAME,
            Self::Outdoors => OUTDOORS_NAME,
        }
    }

    /// Layer id used on the map surface
    pub fn layer_id(&self) -> &'static str {
        match self {
            Self::Satellite => "satellite",
            Self::Light => "light",
            Self::Outdoors => "outdoors",
        }
    }
}

/// Everything needed to build one visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    pub events_url: String,
    pub boundaries_url: String,
    pub center: LatLng,
    pub zoom: f64,
    pub access_token: String,
    pub default_base: BasemapStyle,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            events_url: EVENTS_URL.to_string(),
            boundaries_url: BOUNDARIES_URL.to_string(),
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            access_token: String::new(),
            default_base: BasemapStyle::default(),
        }
    }
}

impl VisualizationConfig {
    /// Default configuration with the tile credential taken from the environment
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(ACCESS_TOKEN_ENV)
            .map_err(|_| MapError::Config(format!("{} is not set", ACCESS_TOKEN_ENV)))?;
        Self::default().with_access_token(token).validated()
    }

    pub fn with_events_url(mut self, url: impl Into<String>) -> Self {
        self.events_url = url.into();
        self
    }

    pub fn with_boundaries_url(mut self, url: impl Into<String>) -> Self {
        self.boundaries_url = url.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn with_default_base(mut self, style: BasemapStyle) -> Self {
        self.default_base = style;
        self
    }

    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }

    /// Rejects configurations the map could never display
    pub fn validated(self) -> Result<Self> {
        if self.access_token.trim().is_empty() {
            return Err(MapError::Config("access token is empty".to_string()));
        }
        if self.events_url.is_empty() || self.boundaries_url.is_empty() {
            return Err(MapError::Config("data source URL is empty".to_string()));
        }
        if !self.center.is_valid() {
            return Err(MapError::Config(format!(
                "center {:?} is outside valid coordinates",
                self.center
            )));
        }
        if !(0.0..=f64::from(BASEMAP_MAX_ZOOM)).contains(&self.zoom) {
            return Err(MapError::Config(format!(
                "zoom {} is outside 0..={}",
                self.zoom, BASEMAP_MAX_ZOOM
            )));
        }
        Ok(self)
    }
}
