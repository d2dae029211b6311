use crate::core::geo::TileCoord;

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;
}

/// Tile source driven by a `{id}/{z}/{x}/{y}?access_token={accessToken}` style template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSource {
    template: String,
    style_id: String,
    access_token: String,
    zoom_offset: i8,
}

impl TemplateSource {
    pub fn new(
        template: impl Into<String>,
        style_id: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            style_id: style_id.into(),
            access_token: access_token.into(),
            zoom_offset: 0,
        }
    }

    /// Shift applied to the zoom placed in the URL (e.g. -1 for 512px tiles)
    pub fn with_zoom_offset(mut self, offset: i8) -> Self {
        self.zoom_offset = offset;
        self
    }
}

impl TileSource for TemplateSource {
    fn url(&self, coord: TileCoord) -> String {
        let z = (i16::from(coord.z) + i16::from(self.zoom_offset)).max(0);
        self.template
            .replace("{id}", &self.style_id)
            .replace("{z}", &z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{accessToken}", &self.access_token)
    }
}
