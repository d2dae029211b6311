//! Fixed values shared by the styling rules, base maps and layer control.

/// USGS feed of every recorded earthquake over the past seven days.
pub const EVENTS_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 plate boundary model (Bird, 2003).
pub const BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Initial map center, roughly over North Carolina.
pub const DEFAULT_CENTER: (f64, f64) = (35.91, -79.07);

/// Initial zoom, wide enough to show most of the globe.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Environment variable holding the tile service credential.
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Styled tile endpoint. Placeholders: `{id}`, `{z}`, `{x}`, `{y}`, `{accessToken}`.
pub const TILE_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";

pub const SATELLITE_STYLE_ID: &str = "mapbox/satellite-v9";
pub const LIGHT_STYLE_ID: &str = "mapbox/light-v10";
pub const OUTDOORS_STYLE_ID: &str = "mapbox/outdoors-v11";

pub const BASEMAP_MAX_ZOOM: u8 = 15;
pub const OUTDOORS_TILE_SIZE: u32 = 512;
pub const OUTDOORS_ZOOM_OFFSET: i8 = -1;

pub const STREETS_ATTRIBUTION: &str =
    "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

pub const OUTDOORS_ATTRIBUTION: &str =
    "© <a href=\"https://www.mapbox.com/about/maps/\">Mapbox</a> © <a href=\"http://www.openstreetmap.org/copyright\">OpenStreetMap</a> <strong><a href=\"https://www.mapbox.com/map-feedback/\" target=\"_blank\">Improve this map</a></strong>";

/// Layer control labels.
pub const SATELLITE_NAME: &str = "Satellite";
pub const LIGHT_NAME: &str = "Light";
pub const OUTDOORS_NAME: &str = "Outdoors";
pub const EVENTS_OVERLAY_NAME: &str = "Earthquakes (Past 7 Days)";
pub const BOUNDARIES_OVERLAY_NAME: &str = "Tectonic Plates";

/// Layer ids used on the map surface.
pub const EVENTS_OVERLAY_ID: &str = "events";
pub const BOUNDARIES_OVERLAY_ID: &str = "boundaries";
pub const LEGEND_CONTROL_ID: &str = "legend";

/// Marker palette, darkest for the strongest events.
pub const INDIGO: &str = "#4B0082";
pub const DARK_ORCHID: &str = "#9932CC";
pub const BLUE_VIOLET: &str = "#8A2BE2";
pub const MAGENTA: &str = "#FF00FF";
pub const VIOLET: &str = "#EE82EE";
pub const THISTLE: &str = "#D8BFD8";

/// Fixed marker outline and transparency.
pub const MARKER_STROKE_COLOR: &str = "#000000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;
pub const MARKER_STROKE_OPACITY: f64 = 0.5;
pub const MARKER_FILL_OPACITY: f64 = 0.6;

/// Radius given to events with zero or unknown magnitude.
pub const MIN_MARKER_RADIUS: f64 = 1.0;

/// Marker radius per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 4.0;

/// Plate boundary paths.
pub const OLIVE: &str = "#808000";
pub const BOUNDARY_WEIGHT: f64 = 2.0;

/// Lower bounds of the legend bins.
pub const LEGEND_BINS: [f64; 6] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];

pub const LEGEND_TITLE: &str = "Magnitude Level";
